//! Command-line adapter: pick a rule set, label numbers, write plain text.
//!
//! Diagnostics go to stderr via `RUST_LOG` (default `warn`):
//!
//! ```bash
//! RUST_LOG=u_fizzbuzz=debug u-fizzbuzz divisible-or-digits 30
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use u_fizzbuzz::engine::{Engine, RenderConfig};
use u_fizzbuzz::rule_set::{select, RuleSet};

#[derive(Parser)]
#[command(
    name = "u-fizzbuzz",
    version,
    about = "Label numbers with divisibility and digit rules"
)]
struct Cli {
    /// Rule set: divisible, extended-divisible, digits, divisible-or-digits.
    rule_set: String,

    /// Number to label. Read from stdin (whitespace separated) if omitted.
    #[arg(allow_hyphen_values = true)]
    number: Option<String>,

    /// Label a range starting here (requires --to).
    #[arg(long, requires = "to", conflicts_with = "number", allow_hyphen_values = true)]
    from: Option<i64>,

    /// Last number of the range (inclusive).
    #[arg(long, requires = "from", allow_hyphen_values = true)]
    to: Option<i64>,

    /// Label the range in parallel.
    #[arg(long)]
    parallel: bool,

    /// Refuse ranges with more numbers than this.
    #[arg(long, default_value_t = 10_000_000)]
    max_len: usize,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let rule_set: RuleSet = cli
        .rule_set
        .parse()
        .with_context(|| format!("select rule set '{}'", cli.rule_set))?;
    let engine = Engine::from_boxed(select(rule_set));

    let lines = match (cli.from, cli.to, cli.number.as_deref()) {
        (Some(start), Some(end), _) => {
            let config = RenderConfig::default()
                .with_range(start, end)
                .with_parallel(cli.parallel)
                .with_max_len(cli.max_len);
            engine
                .render(&config)
                .map_err(anyhow::Error::msg)
                .context("render range")?
        }
        (_, _, Some(raw)) => vec![engine.text(parse_number(raw)?)],
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("read numbers from stdin")?;
            let numbers = input
                .split_whitespace()
                .map(parse_number)
                .collect::<Result<Vec<_>>>()?;
            if numbers.is_empty() {
                bail!("no number given on the command line or stdin");
            }
            numbers.into_iter().map(|n| engine.text(n)).collect()
        }
    };

    tracing::debug!(count = lines.len(), rule = engine.rule_name(), "labelled");
    write_output(cli.output.as_ref(), &lines)
}

fn parse_number(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .with_context(|| format!("parse number '{}'", raw))
}

fn write_output(path: Option<&PathBuf>, lines: &[String]) -> Result<()> {
    let mut text = lines.join("\n");
    text.push('\n');
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
        }
        None => {
            io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .context("write stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 42 ").unwrap(), 42);
        assert_eq!(parse_number("-7").unwrap(), -7);
        let err = parse_number("4x2").unwrap_err();
        assert!(format!("{err:#}").contains("parse number '4x2'"));
    }

    #[test]
    fn test_cli_parses_range() {
        let cli = Cli::try_parse_from(["u-fizzbuzz", "digits", "--from", "1", "--to", "20"]).unwrap();
        assert_eq!(cli.from, Some(1));
        assert_eq!(cli.to, Some(20));
        assert!(cli.number.is_none());
        assert_eq!(cli.max_len, 10_000_000);
    }

    #[test]
    fn test_cli_range_requires_both_ends() {
        assert!(Cli::try_parse_from(["u-fizzbuzz", "digits", "--from", "1"]).is_err());
    }

    #[test]
    fn test_write_output_to_file() {
        let path = std::env::temp_dir().join(format!("u-fizzbuzz-{}.txt", std::process::id()));
        write_output(Some(&path), &["1".into(), "Fizz".into()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1\nFizz\n");
        fs::remove_file(&path).unwrap();
    }
}
