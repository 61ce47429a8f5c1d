use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::path::PathBuf;
use templight_extractor::{ExtractorConfig, TemplateExtractor, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_DIR};

#[derive(Parser)]
#[command(name = "templight")]
#[command(about = "Extract welcome-light template data into a TEMPLATES artifact", long_about = None)]
#[command(version)]
struct Cli {
    /// Template directory to scan (non-recursive)
    #[arg(default_value = DEFAULT_SOURCE_DIR)]
    source_dir: PathBuf,

    /// Output artifact path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for results)
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = ExtractorConfig::for_source(&cli.source_dir).with_output(&cli.output);
    let report = TemplateExtractor::new(config).run().with_context(|| {
        format!(
            "Failed to extract templates from {}",
            cli.source_dir.display()
        )
    })?;

    for failure in &report.failures {
        println!("Error parsing {}: {}", failure.filename, failure.detail);
    }
    println!("Written to {}", cli.output.display());

    Ok(())
}
