//! Example: Delete a file or folder.
//!
//! Deleting a folder removes all of its contents as well.
//!
//! Usage:
//!   cargo run --example rm -- (--file ID | --folder ID) [--server URL]

mod cli;

use cli::{take_id, usage_and_exit, ArgParser};

const USAGE: &str = "Usage: cargo run --example rm -- (--file ID | --folder ID) [--server URL]";

#[tokio::main]
async fn main() -> vaultlib::Result<()> {
    let mut parser = ArgParser::new(USAGE);
    let file_id = take_id(&mut parser, &["--file"], USAGE);
    let folder_id = take_id(&mut parser, &["--folder"], USAGE);
    let (client, _config) = cli::connect_authenticated(&mut parser)?;

    let result = match (file_id, folder_id) {
        (Some(id), None) => client.delete_file(id).await,
        (None, Some(id)) => client.delete_folder(id).await,
        _ => usage_and_exit(USAGE),
    };

    match result {
        Ok(response) => println!("{}", response.message),
        Err(e) => eprintln!("Delete failed: {}", e),
    }

    Ok(())
}
