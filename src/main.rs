use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;

use propsynth::cli::{Cli, Commands, OutputFormat};
use propsynth::{io, logging, output, synth};

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { path, format, jobs } => run_analyze(&path, format, jobs),
    }
}

fn run_analyze(path: &std::path::Path, format: OutputFormat, jobs: usize) -> Result<()> {
    if jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("failed to configure thread pool")?;
    }

    let classes = if path.is_dir() {
        io::load_batch(path).with_context(|| format!("loading class files under {}", path.display()))?
    } else {
        let class = io::load_class(path).with_context(|| format!("loading {}", path.display()))?;
        vec![(path.to_path_buf(), class)]
    };

    let reports: Vec<_> = classes
        .par_iter()
        .map(|(_, class)| {
            let properties = synth::synthesize(class);
            output::build_report(&properties, now())
        })
        .collect();

    for report in &reports {
        match format {
            OutputFormat::Text => println!("{}", output::render_text(report)),
            OutputFormat::Json => println!("{}", output::render_json(report)?),
        }
    }

    Ok(())
}

fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}
