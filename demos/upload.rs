//! Example: Upload one or more local files.
//!
//! Files upload sequentially; per-file failures are reported and the
//! rest of the batch continues.
//!
//! Usage:
//!   cargo run --example upload -- FILE... [--folder-id ID] [--server URL]

mod cli;

use std::path::PathBuf;

use cli::{take_id, usage_and_exit, ArgParser};
use vaultlib::progress::make_progress_bar;
use vaultlib::Navigator;

const USAGE: &str = "Usage: cargo run --example upload -- FILE... [--folder-id ID] [--server URL]";

#[tokio::main]
async fn main() -> vaultlib::Result<()> {
    let mut parser = ArgParser::new(USAGE);
    let folder_id = take_id(&mut parser, &["--folder-id"], USAGE);
    let (mut client, _config) = cli::connect_authenticated(&mut parser)?;

    let paths: Vec<PathBuf> = parser.remaining().into_iter().map(PathBuf::from).collect();
    if paths.is_empty() {
        usage_and_exit(USAGE);
    }

    client.set_current_folder(folder_id);
    let mut nav = Navigator::new(client);

    println!("Uploading {} file(s)...", paths.len());
    let mut out = std::io::stdout();
    let report = nav
        .upload_batch(&paths, Some(make_progress_bar()), &mut out)
        .await?;

    if report.failed > 0 {
        eprintln!("{} file(s) failed", report.failed);
        std::process::exit(1);
    }

    Ok(())
}
