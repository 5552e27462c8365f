use crate::models::DEFAULT_OUTPUT;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stackscan")]
#[command(version, about = "Map your deployment stack", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Parser, Debug)]
pub enum Commands {
    /// Scan a directory tree and write the stack report
    Scan(ScanArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directory to scan (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Report file to write (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Path to custom config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Additional directory names to prune from the walk (repeatable)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
