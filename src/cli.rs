//! CLI module - Command-line surface and top-level flow

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::render;
use crate::output::clipboard;
use crate::output::sink::Sink;
use crate::prompt::{self, PromptError};
use crate::scanner::exclude::ExcludeSet;
use crate::scanner::patterns::PatternSet;
use crate::scanner::{scan, ScanRequest};

/// treecat - concatenate pattern-matched files from a directory tree.
#[derive(Parser, Debug)]
#[command(name = "treecat")]
#[command(
    author,
    version,
    about,
    long_about = r#"treecat walks a directory tree, collects every file whose bare name
matches one of the glob patterns you enter at the prompt, and joins their
contents into a single text blob with START/END delimiters around each file.

Built-in exclusions always prune dependency and version-control directories
(node_modules, .git, target, ...). Additional files or directories can be
excluded with --exclude; tokens match either a bare name (excluded anywhere
in the tree) or a path relative to DIRECTORY (excluded at that exact spot).

The result goes to a file (--output), the system clipboard (--copy), or
stdout, in that priority order.

Examples:
    treecat
    treecat src --output context.txt
    treecat --copy --exclude "tests,README.md"
"#
)]
pub struct Cli {
    /// The root directory to search in.
    #[arg(
        value_name = "DIRECTORY",
        default_value = ".",
        long_help = "The root directory to search in.\n\n\
Defaults to the current directory if not provided. Paths in delimiters and\n\
exclusion tokens are interpreted relative to this directory."
    )]
    pub directory: PathBuf,

    /// Write the result to a file.
    #[arg(
        short,
        long,
        value_name = "PATH",
        long_help = "Write the concatenated result to a file.\n\n\
Takes priority over --copy and stdout when several sinks are requested."
    )]
    pub output: Option<PathBuf>,

    /// Copy the result to the system clipboard.
    #[arg(
        short,
        long,
        long_help = "Copy the concatenated result to the system clipboard.\n\n\
Fails before any scanning when no clipboard mechanism is available on the\n\
platform (e.g. a headless session without a display server)."
    )]
    pub copy: bool,

    /// Comma-separated paths or filenames to exclude.
    #[arg(
        short,
        long,
        value_name = "TOKENS",
        default_value = "",
        long_help = "Comma-separated list of paths or filenames to exclude.\n\n\
A bare name excludes every file or directory with that name anywhere in the\n\
tree; a relative path excludes only the entry at that exact path under\n\
DIRECTORY. Excluded directories are pruned before descending.\n\n\
Example: --exclude \"tests/config.yaml,README.md\""
    )]
    pub exclude: String,

    /// Quiet mode (suppress progress reporting).
    #[arg(
        short,
        long,
        long_help = "Suppress the scan banner and per-file progress lines on stderr.\n\n\
The concatenated result and error messages are still emitted."
    )]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored status messages. This is useful when piping stderr to\n\
files or when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let sink = Sink::select(cli.output, cli.copy);

    // A missing clipboard must abort before the prompt and the scan.
    if sink == Sink::Clipboard {
        clipboard::probe()?;
    }

    let patterns = match prompt::ask_patterns() {
        Ok(patterns) => patterns,
        Err(PromptError::Cancelled) => {
            eprintln!("\n{}", "Operation cancelled by user.".yellow());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let patterns = PatternSet::compile(&patterns).context("invalid file pattern")?;
    let exclude = ExcludeSet::parse(&cli.exclude);

    // Get absolute root path
    let root = cli.directory.canonicalize().unwrap_or(cli.directory);

    let request = ScanRequest {
        root,
        patterns,
        exclude,
        quiet: cli.quiet,
    };
    let result = scan(&request);

    if result.is_empty() {
        eprintln!(
            "\nNo files matching any of the given patterns were found in '{}'.",
            request.root.display()
        );
        return Ok(());
    }

    let blob = render::render(&result);
    if let Some(message) = sink.deliver(&blob)? {
        eprintln!("\n{} {}", "Success!".green().bold(), message);
    }

    Ok(())
}
