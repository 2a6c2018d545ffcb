use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

mod fixer;
mod scan;

use fixer::IncludeFixer;

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "incfix")]
#[command(version = VERSION)]
#[command(
    about = "Rewrites #include \"...\" lines that point at missing local files",
    long_about = "Scans *.cpp and *.h files in the current directory and rewrites any \
                  #include \"...\" directive whose target is missing, redirecting it to \
                  the fallback header when that header exists locally."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let dir = std::env::current_dir().context("Failed to resolve current directory")?;
    let fixer = IncludeFixer::new()?;

    for file in scan::source_files(&dir)? {
        let changes = fixer.fix_file(&dir, &file)?;
        if changes > 0 {
            eprintln!("{} {:?} ({} changes)", "fixed".green(), file, changes);
        }
    }

    Ok(())
}
