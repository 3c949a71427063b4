use anyhow::bail;
use clap::Parser;
use int_sort_bench::{Config, harness};
use tracing_subscriber::EnvFilter;

/// Times several integer sorts on one random dataset and checks each result
/// against the standard library's sort.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = harness::run(&cli.config)?;

    let failed: Vec<_> = report.failures().map(|r| r.name).collect();
    if !failed.is_empty() {
        bail!("incorrect output from: {}", failed.join(", "));
    }
    Ok(())
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_flags() {
    use int_sort_bench::Algorithm;

    let cli = Cli::parse_from([
        "int-sort-bench",
        "-n",
        "1000",
        "--alphabet",
        "16",
        "-A",
        "heap",
        "-A",
        "lsb-radix",
        "--skip-library",
    ]);
    assert_eq!(cli.config.len, 1000);
    assert_eq!(cli.config.alphabet, 16);
    assert_eq!(cli.config.repeats, 1);
    assert!(cli.config.skip_library);
    assert_eq!(cli.config.algorithms(), vec![Algorithm::Heap, Algorithm::LsbRadix]);
}
