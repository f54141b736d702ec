mod cli;
mod config;
mod main_lib;

use anyhow::Context;
use clap::Parser;

use cli::Args;
use config::Config;
use main_lib::{init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env();
    init_tracing(&config.log_format);

    let report = run(&args, &config).await?;
    for failure in &report.failures {
        tracing::warn!(
            "Left '{}' at {} unconverted: {}",
            failure.symbol,
            failure.span.start,
            failure.message
        );
    }
    tracing::info!(
        "Converted {} amount(s) from {} to {}, {} left unchanged",
        report.converted,
        args.from_code(),
        args.to_code(),
        report.failures.len()
    );

    if args.stdout {
        println!("{}", report.text);
    } else {
        std::fs::write(&args.output_file, &report.text)
            .with_context(|| format!("Failed to write {}", args.output_file.display()))?;
        tracing::info!("Wrote {}", args.output_file.display());
    }
    Ok(())
}
