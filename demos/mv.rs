//! Example: Move a file into another folder.
//!
//! Usage:
//!   cargo run --example mv -- FILE_ID [--to FOLDER_ID] [--server URL]
//!
//! Omitting `--to` moves the file to the root folder.

mod cli;

use cli::{take_id, usage_and_exit, ArgParser};

const USAGE: &str = "Usage: cargo run --example mv -- FILE_ID [--to FOLDER_ID] [--server URL]";

#[tokio::main]
async fn main() -> vaultlib::Result<()> {
    let mut parser = ArgParser::new(USAGE);
    let target = take_id(&mut parser, &["--to"], USAGE);
    let (client, _config) = cli::connect_authenticated(&mut parser)?;

    let positionals = parser.remaining();
    if positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let file_id: i64 = positionals[0].parse().unwrap_or_else(|_| usage_and_exit(USAGE));

    match client.move_file(file_id, target).await {
        Ok(file) => match file.folder_id {
            Some(folder) => println!("Moved {} into folder {}", file.name, folder),
            None => println!("Moved {} to root", file.name),
        },
        Err(e) => eprintln!("Move failed: {}", e),
    }

    Ok(())
}
