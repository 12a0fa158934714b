//! Example: Download a file by id.
//!
//! The file lands in the output directory under the name the server
//! advertises via `Content-Disposition`.
//!
//! Usage:
//!   cargo run --example download -- FILE_ID [--out DIR] [--server URL]

mod cli;

use std::path::Path;

use cli::{usage_and_exit, ArgParser};

const USAGE: &str = "Usage: cargo run --example download -- FILE_ID [--out DIR] [--server URL]";

#[tokio::main]
async fn main() -> vaultlib::Result<()> {
    let mut parser = ArgParser::new(USAGE);
    let out_dir = parser.take_value(&["--out", "-o"]).unwrap_or_else(|| ".".to_string());
    let (client, _config) = cli::connect_authenticated(&mut parser)?;

    let positionals = parser.remaining();
    if positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let file_id: i64 = positionals[0].parse().unwrap_or_else(|_| usage_and_exit(USAGE));

    println!("Downloading file {}...", file_id);
    match client.download_to_file(file_id, Path::new(&out_dir)).await {
        Ok(path) => {
            println!("Download complete!");
            println!("  Saved to: {}", path.display());
        }
        Err(e) => {
            eprintln!("Failed to download file: {}", e);
        }
    }

    Ok(())
}
