//! relset CLI — build the trains relational task and inspect or export it.

use anyhow::Context;
use clap::Parser;
use relset_core::TrainsConfig;
use relset_core::trains;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Build the Michalski trains template and dataset.
#[derive(Parser, Debug)]
#[command(name = "relset", version, about, long_about = None)]
struct Cli {
    /// Write the template and dataset as JSON to this path instead of
    /// printing a summary
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print every rule and per-train fact counts in the summary
    #[arg(long)]
    details: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = TrainsConfig::default();
    let task = trains::build(trains::TRAIN_CARS, &config)?;

    match cli.output {
        Some(path) => {
            task.save_json(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote trains artifacts");
        }
        None => {
            println!("template: {} rules", task.template.len());
            if cli.details {
                for rule in task.template.rules() {
                    println!("  {rule}");
                }
            }
            println!(
                "dataset: {} examples, {} queries, {} facts",
                task.dataset.examples.len(),
                task.dataset.queries.len(),
                task.dataset.fact_count()
            );
            if cli.details {
                for (idx, (example, query)) in task
                    .dataset
                    .examples
                    .iter()
                    .zip(&task.dataset.queries)
                    .enumerate()
                {
                    println!(
                        "  train {:>2}: {:>2} facts, target {:+.1}",
                        idx + 1,
                        example.len(),
                        query.target
                    );
                }
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
