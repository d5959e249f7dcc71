//! treecat - concatenate pattern-matched files from a directory tree
//!
//! treecat provides:
//! - Recursive scanning with built-in and user-supplied exclusions
//! - Shell-style glob selection of files by bare name
//! - A single delimited text blob written to a file, the clipboard, or stdout

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod output;
mod prompt;
mod scanner;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
