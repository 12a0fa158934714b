//! Example: Rename a file or folder.
//!
//! Usage:
//!   cargo run --example rename -- (--file ID | --folder ID) NEW_NAME [--server URL]

mod cli;

use cli::{take_id, usage_and_exit, ArgParser};

const USAGE: &str =
    "Usage: cargo run --example rename -- (--file ID | --folder ID) NEW_NAME [--server URL]";

#[tokio::main]
async fn main() -> vaultlib::Result<()> {
    let mut parser = ArgParser::new(USAGE);
    let file_id = take_id(&mut parser, &["--file"], USAGE);
    let folder_id = take_id(&mut parser, &["--folder"], USAGE);
    let (client, _config) = cli::connect_authenticated(&mut parser)?;

    let positionals = parser.remaining();
    if positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let new_name = &positionals[0];

    match (file_id, folder_id) {
        (Some(id), None) => match client.rename_file(id, new_name).await {
            Ok(file) => println!("Renamed to: {}", file.name),
            Err(e) => eprintln!("Rename failed: {}", e),
        },
        (None, Some(id)) => match client.rename_folder(id, new_name).await {
            Ok(folder) => println!("Renamed to: {}", folder.name),
            Err(e) => eprintln!("Rename failed: {}", e),
        },
        _ => usage_and_exit(USAGE),
    }

    Ok(())
}
