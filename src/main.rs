use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use reddit_client::RedditClient;
use tradewatch_core::{AppConfig, SortMode};

const USAGE: &str = "\
tradewatch - scan subreddits for posts matching configured search terms

Usage: tradewatch [OPTIONS]

Options:
  -c, --config <PATH>  Config file with Reddit credentials [default: tradewatch.toml]
  -i, --input <PATH>   Scan table CSV with columns source,items,flairs,post_limit
  -o, --output <PATH>  Output CSV path
  -s, --sort <MODE>    Listing order: new, hot or top
  -h, --help           Print this help

Paths and sort given on the command line override the [scan] section of the
config file.";

struct Cli {
    config: PathBuf,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    sort: Option<SortMode>,
}

fn parse_cli() -> Result<Cli> {
    let mut cli = Cli {
        config: PathBuf::from("tradewatch.toml"),
        input: None,
        output: None,
        sort: None,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                cli.config = PathBuf::from(args.next().context("Missing value for --config")?);
            }
            "-i" | "--input" => {
                cli.input =
                    Some(PathBuf::from(args.next().context("Missing value for --input")?));
            }
            "-o" | "--output" => {
                cli.output = Some(PathBuf::from(
                    args.next().context("Missing value for --output")?,
                ));
            }
            "-s" | "--sort" => {
                let value = args.next().context("Missing value for --sort")?;
                cli.sort = Some(value.parse::<SortMode>()?);
            }
            "-h" | "--help" => {
                eprintln!("{}", USAGE);
                std::process::exit(0);
            }
            other => bail!("Unknown argument: {}", other),
        }
    }

    Ok(cli)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Only warnings and errors by default; stdout stays clean for the
    // run summary.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_cli()?;

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    let sort = cli.sort.unwrap_or(config.scan.sort);
    let input_path = cli.input.unwrap_or(config.scan.input);
    let output_path = cli.output.unwrap_or(config.scan.output);

    let input_text = fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read scan table {}", input_path.display()))?;
    let specs = scanner::parse_source_specs(&input_text)
        .with_context(|| format!("Invalid scan table {}", input_path.display()))?;

    let mut client =
        RedditClient::new(config.reddit).context("Failed to build Reddit client")?;
    client
        .authenticate()
        .await
        .context("Reddit authentication failed")?;

    let table = scanner::scan_sources(&client, &specs, sort).await?;

    table
        .write_csv(&output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!(
        "Wrote {} match rows to {}",
        table.len(),
        output_path.display()
    );
    Ok(())
}
