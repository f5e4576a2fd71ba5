use anyhow::{Context, Result};
use chunkdelta::chunked::{diff_with, DiffConfig, MAX_DIFFERENCE_PERCENT, MIN_CHUNK_LENGTH};
use chunkdelta::classifier::DifferenceRatio;
use chunkdelta::serialization::ToPatch;
use chunkdelta::stats::Stats;
use chunkdelta::text::to_symbols;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "chunkdelta",
    version,
    about = "Chunked delta encoding of two equal-length texts",
    long_about = "Compares SOURCE and TARGET position by position and prints an edit script \
    made of copy (C), remove (R) and add (A) chunks. Both texts must have the same number of chars."
)]
struct Cli {
    #[arg(index = 1, help = "The original text")]
    source: String,
    #[arg(index = 2, help = "The text to reach")]
    target: String,
    #[arg(
        long,
        default_value_t = MAX_DIFFERENCE_PERCENT,
        help = "Share of differing positions, in percent, a copy chunk tolerates"
    )]
    max_difference: f64,
    #[arg(
        long,
        default_value_t = MIN_CHUNK_LENGTH,
        help = "Length a copy chunk must exceed before it may end early"
    )]
    min_chunk_length: usize,
    #[arg(short, long, help = "Print size statistics after the script")]
    stats: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DiffConfig::default()
        .with_max_difference_percent(cli.max_difference)
        .with_min_chunk_length(cli.min_chunk_length);

    let source = to_symbols(&cli.source);
    let target = to_symbols(&cli.target);
    let script = diff_with(&source, &target, &config, &DifferenceRatio)
        .context("failed to diff source and target")?;

    println!("{}", script.to_patch());
    if cli.stats {
        println!("{}", Stats::measure(&script, source.len(), target.len()));
    }
    Ok(())
}
