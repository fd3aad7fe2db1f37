use anyhow::Result;
use clap::Parser;
use std::path::Path;

// Use the library modules
use gltfetch::commands;

#[derive(Parser)]
#[clap(name = "gltfetch")]
#[clap(about = "Downloads the Khronos glTF Sample Assets for local development")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    // Destination is fixed relative to the invocation's working directory
    let destination = Path::new(commands::fetch::DEFAULT_DESTINATION);
    let result = commands::fetch::fetch_assets(destination).map_err(|e| anyhow::anyhow!(e));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
