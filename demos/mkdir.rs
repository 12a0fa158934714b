//! Example: Create a folder on the server.
//!
//! Usage:
//!   cargo run --example mkdir -- NAME [--parent-id ID] [--server URL]

mod cli;

use cli::{take_id, usage_and_exit, ArgParser};

const USAGE: &str = "Usage: cargo run --example mkdir -- NAME [--parent-id ID] [--server URL]";

#[tokio::main]
async fn main() -> vaultlib::Result<()> {
    let mut parser = ArgParser::new(USAGE);
    let parent_id = take_id(&mut parser, &["--parent-id"], USAGE);
    let (client, _config) = cli::connect_authenticated(&mut parser)?;

    let positionals = parser.remaining();
    if positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let name = &positionals[0];

    println!("Creating folder: {}", name);
    match client.create_folder(name, parent_id).await {
        Ok(folder) => {
            println!("Folder created successfully!");
            println!("  Name: {}", folder.name);
            println!("  ID: {}", folder.id);
        }
        Err(e) => {
            eprintln!("Failed to create folder: {}", e);
        }
    }

    Ok(())
}
