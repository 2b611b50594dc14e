use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "skyline",
    about = "Skyline union: the silhouette of overlapping boxes",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with union settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Union every box and skyline in a JSON document
    Union(UnionArgs),
    /// Merge two skylines, each stored as a JSON point array
    Merge(MergeArgs),
    /// Report the union's height at a given x
    Height(HeightArgs),
}

#[derive(Args)]
pub struct UnionArgs {
    pub input: PathBuf,
}

#[derive(Args)]
pub struct MergeArgs {
    pub left: PathBuf,
    pub right: PathBuf,
}

#[derive(Args)]
pub struct HeightArgs {
    pub input: PathBuf,
    #[arg(long, allow_negative_numbers = true)]
    pub at: f64,
}
