/// CLI argument definitions for the `mcolor` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "mcolor",
    version,
    about = "Prepare plagiarism comparisons for rendering"
)]
pub struct Cli {
    /// Log debug details to stderr (MCOLOR_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every command that colors matches.
#[derive(Args)]
pub struct ColorArgs {
    /// Number of colors available (default: from mcolor.toml, else 7)
    #[arg(short, long)]
    pub palette_size: Option<usize>,

    /// Config file (default: ./mcolor.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Color the matches of a single comparison file
    #[command(long_about = "\
Color the matches of a single comparison file.

Every match gets a palette index. Matches that are neighbours when sorted
by position in the first file, by position in the second file, or by
size never share a color. Assignment is greedy: if some match finds every
color taken by its neighbours the command fails and asks for a larger
palette. A palette of 7 or more colors always succeeds.

Examples:
  mcolor color alice-bob.json                  # table output
  mcolor color alice-bob.json --palette-size 4
  mcolor color alice-bob.json --json           # machine-readable output")]
    Color {
        /// Comparison file (JSON)
        file: PathBuf,

        #[command(flatten)]
        color: ColorArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load and color a submission pair from an unpacked report directory
    #[command(long_about = "\
Load and color a submission pair from an unpacked report directory.

The comparison file is looked up in overview.json (either id order);
without an overview, <ID1>-<ID2>.json is used. Submission file lists are
read from submissionFileIndex.json and files/.

Examples:
  mcolor report ./result alice bob
  mcolor report ./result alice bob --json")]
    Report {
        /// Report directory
        dir: PathBuf,

        /// First submission id
        id1: String,

        /// Second submission id
        id2: String,

        #[command(flatten)]
        color: ColorArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Color every comparison in a report directory and report failures
    Check {
        /// Report directory
        dir: PathBuf,

        #[command(flatten)]
        color: ColorArgs,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
