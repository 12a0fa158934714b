//! Example: Interactive browsing shell.
//!
//! Drives a `Navigator` over stdin/stdout: every mutating command
//! triggers a full reload and re-render of the current folder.
//!
//! Usage:
//!   cargo run --example shell -- [--server URL]
//!
//! Commands:
//!   ls                       list the current folder
//!   cd [NAME | .. | /]       enter a subfolder, go up, or go to root
//!   pwd                      show the breadcrumb trail
//!   mkdir NAME               create a folder here
//!   put FILE...              upload local files here
//!   get ID                   download a file into the working dir
//!   mv ID [FOLDER_ID]        move a file (no target = root)
//!   rename-file ID NAME      rename a file
//!   rename-dir ID NAME       rename a folder
//!   rm-file ID               delete a file
//!   rm-dir ID                delete a folder and its contents
//!   quit                     exit

mod cli;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cli::ArgParser;
use vaultlib::progress::make_progress_bar;
use vaultlib::{FolderRef, Navigator};

const USAGE: &str = "Usage: cargo run --example shell -- [--server URL]";

fn parse_id(arg: Option<&&str>) -> Option<i64> {
    arg.and_then(|v| v.parse().ok())
}

async fn change_dir<W: Write + ?Sized>(
    nav: &mut Navigator,
    name: &str,
    out: &mut W,
) -> vaultlib::Result<()> {
    match name {
        "/" => nav.navigate_to(None, out).await,
        ".." => {
            let entries = nav.breadcrumb().entries();
            let target = if entries.len() >= 2 {
                Some(entries[entries.len() - 2].clone())
            } else {
                None
            };
            nav.navigate_to(target, out).await
        }
        _ => {
            let listing = nav.client().list_current().await?;
            match listing.folders.iter().find(|f| f.name == name) {
                Some(folder) => nav.navigate_to(Some(FolderRef::from(folder)), out).await,
                None => {
                    writeln!(out, "No such folder: {}", name)?;
                    Ok(())
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> vaultlib::Result<()> {
    tracing_subscriber::fmt::init();

    let mut parser = ArgParser::new(USAGE);
    let (client, config) = cli::connect_authenticated(&mut parser)?;

    println!("Connected to {}", config.server_url);
    let mut nav = Navigator::new(client);
    let mut out = io::stdout();

    nav.navigate_to(None, &mut out).await?;

    loop {
        print!("\nvault> ");
        out.flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.trim().split_whitespace();
        let command = match parts.next() {
            Some(c) => c,
            None => continue,
        };
        let args: Vec<&str> = parts.collect();

        let result = match command {
            "ls" => nav.refresh(&mut out).await,
            "pwd" => nav.render_trail(&mut out),
            "cd" => change_dir(&mut nav, args.first().copied().unwrap_or("/"), &mut out).await,
            "mkdir" => {
                if args.is_empty() {
                    println!("usage: mkdir NAME");
                    Ok(())
                } else {
                    nav.create_folder_here(&args.join(" "), &mut out).await.map(|_| ())
                }
            }
            "put" => {
                if args.is_empty() {
                    println!("usage: put FILE...");
                    Ok(())
                } else {
                    let paths: Vec<PathBuf> = args.iter().map(PathBuf::from).collect();
                    nav.upload_batch(&paths, Some(make_progress_bar()), &mut out)
                        .await
                        .map(|_| ())
                }
            }
            "get" => match parse_id(args.first()) {
                Some(id) => nav.download(id, Path::new(".")).await.map(|path| {
                    println!("Saved to {}", path.display());
                }),
                None => {
                    println!("usage: get ID");
                    Ok(())
                }
            },
            "mv" => match parse_id(args.first()) {
                Some(id) => {
                    let target = parse_id(args.get(1));
                    nav.move_file(id, target, &mut out).await.map(|_| ())
                }
                None => {
                    println!("usage: mv ID [FOLDER_ID]");
                    Ok(())
                }
            },
            "rename-file" => match (parse_id(args.first()), args.get(1..)) {
                (Some(id), Some(rest)) if !rest.is_empty() => {
                    nav.rename_file(id, &rest.join(" "), &mut out).await.map(|_| ())
                }
                _ => {
                    println!("usage: rename-file ID NAME");
                    Ok(())
                }
            },
            "rename-dir" => match (parse_id(args.first()), args.get(1..)) {
                (Some(id), Some(rest)) if !rest.is_empty() => {
                    nav.rename_folder(id, &rest.join(" "), &mut out).await.map(|_| ())
                }
                _ => {
                    println!("usage: rename-dir ID NAME");
                    Ok(())
                }
            },
            "rm-file" => match parse_id(args.first()) {
                Some(id) => nav.delete_file(id, &mut out).await,
                None => {
                    println!("usage: rm-file ID");
                    Ok(())
                }
            },
            "rm-dir" => match parse_id(args.first()) {
                Some(id) => nav.delete_folder(id, &mut out).await,
                None => {
                    println!("usage: rm-dir ID");
                    Ok(())
                }
            },
            "help" => {
                println!("commands: ls, cd, pwd, mkdir, put, get, mv, rename-file, rename-dir, rm-file, rm-dir, quit");
                Ok(())
            }
            "quit" | "exit" => break,
            _ => {
                println!("Unknown command: {} (try help)", command);
                Ok(())
            }
        };

        // Errors surface once and the shell moves on; nothing is fatal.
        if let Err(e) = result {
            println!("error: {}", e);
        }
    }

    Ok(())
}
