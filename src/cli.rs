use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "propsynth")]
#[command(about = "Recovers logical get/set/add properties from a class's method signatures")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize properties for one or more classes
    Analyze {
        /// A single class JSON file, or a directory to scan for them
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Number of threads to use when `path` is a directory (0 = rayon default)
        #[arg(short, long, default_value_t = 0)]
        jobs: usize,
    },
}
