//! Example: List files and folders on the server.
//!
//! Usage:
//!   cargo run --example ls -- [--folder-id ID] [--server URL]

mod cli;

use cli::{take_id, ArgParser};
use vaultlib::format_file_size;

const USAGE: &str = "Usage: cargo run --example ls -- [--folder-id ID] [--server URL]";

#[tokio::main]
async fn main() {
    let mut parser = ArgParser::new(USAGE);
    let folder_id = take_id(&mut parser, &["--folder-id"], USAGE);
    let (client, _config) = cli::connect_authenticated(&mut parser).expect("Failed to load config");

    match client.list(folder_id).await {
        Ok(listing) => {
            match folder_id {
                Some(id) => println!("\nListing folder {}:\n", id),
                None => println!("\nListing root:\n"),
            }

            if listing.is_empty() {
                println!("  (empty)");
                return;
            }

            for folder in &listing.folders {
                println!("  [DIR]  {:<40} (id {})", folder.name, folder.id);
            }
            for file in &listing.files {
                println!(
                    "  [{:<4}] {:<40} {:>10}  (id {})",
                    file.kind().tag(),
                    file.name,
                    format_file_size(file.size),
                    file.id
                );
            }
        }
        Err(e) => {
            eprintln!("Failed to list: {}", e);
        }
    }
}
