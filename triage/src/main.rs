use anyhow::Context;
use clap::Parser;
use generator::profile::{build_contact_feed, GeneratorConfig};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use threatcore::TriageError;
use workflow::config::{OutputFormat, TriageConfig};
use workflow::runner::Runner;

mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Rank sensor contacts by threat score")]
struct Args {
    /// Contact feed to rank [default: data/contacts.csv]
    input: Option<PathBuf>,
    /// Load run settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Print a synthetic feed of this many contacts instead of ranking
    #[arg(long, value_name = "COUNT")]
    synthesize: Option<usize>,
    /// Seed for --synthesize
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Debug, PartialEq)]
enum Outcome {
    Ranked,
    Empty { diagnostic: String },
}

fn run<W: Write>(args: Args, out: &mut W) -> anyhow::Result<Outcome> {
    if let Some(count) = args.synthesize {
        let feed = build_contact_feed(&GeneratorConfig {
            count,
            seed: args.seed,
            ..Default::default()
        })?;
        out.write_all(feed.as_bytes())
            .context("writing synthetic feed")?;
        out.flush().context("flushing synthetic feed")?;
        return Ok(Outcome::Ranked);
    }

    let config = match args.config {
        Some(path) => TriageConfig::load(path)?,
        None => TriageConfig::default(),
    }
    .with_overrides(args.input, args.format);

    let runner = Runner::new(config);
    let outcome = match runner.execute() {
        Ok(outcome) => outcome,
        Err(err @ TriageError::NoContacts { .. }) => {
            return Ok(Outcome::Empty {
                diagnostic: err.to_string(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    info!(
        "{} rows rejected ({})",
        outcome.rejected.len(),
        outcome.counters
    );

    report::render(out, &outcome.ranked, runner.config().format)?;
    out.flush().context("flushing report")?;
    Ok(Outcome::Ranked)
}

/// 0 ranked, 1 nothing usable in the feed, 2 unreadable source or other failure.
fn exit_status(result: &anyhow::Result<Outcome>) -> u8 {
    match result {
        Ok(Outcome::Ranked) => 0,
        Ok(Outcome::Empty { .. }) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(args, &mut out);
    match &result {
        Ok(Outcome::Ranked) => {}
        Ok(Outcome::Empty { diagnostic }) => eprintln!("{}", diagnostic),
        Err(err) => eprintln!("ERROR: {:#}", err),
    }
    ExitCode::from(exit_status(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn feed(contents: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(contents.as_bytes()).unwrap();
        temp
    }

    fn args_for(input: Option<PathBuf>) -> Args {
        Args {
            input,
            config: None,
            format: None,
            synthesize: None,
            seed: 0,
        }
    }

    #[test]
    fn valid_feed_prints_table_and_exits_zero() {
        let file = feed("A1,Friend,10,50,1000,5\nB2,Foe,10,150,500,20\n");
        let mut out = Vec::new();
        let result = run(args_for(Some(file.path().to_path_buf())), &mut out);
        assert_eq!(exit_status(&result), 0);
        assert_eq!(result.unwrap(), Outcome::Ranked);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("RANK"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn all_rejected_feed_exits_one_without_table() {
        let file = feed(
            "# sector empty\n\
             id,iff,range_km,closing_mps,altitude_m,rcs_m2\n\
             B2,Foe,10\n\
             X9,xyz,10,150,500,20\n",
        );
        let mut out = Vec::new();
        let result = run(args_for(Some(file.path().to_path_buf())), &mut out);
        assert_eq!(exit_status(&result), 1);
        match result.unwrap() {
            Outcome::Empty { diagnostic } => {
                assert!(diagnostic.starts_with("no contacts loaded from"))
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn missing_source_exits_two_without_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let result = run(args_for(Some(dir.path().join("absent.csv"))), &mut out);
        assert_eq!(exit_status(&result), 2);
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.starts_with("failed to open contact source"));
        assert_eq!(message.matches("absent.csv").count(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn json_format_from_config_file() {
        let file = feed("D4,Hostile,0.5,300,100,10\n");
        let config = feed(&format!("input: {}\nformat: json\n", file.path().display()));
        let mut out = Vec::new();
        let args = Args {
            config: Some(config.path().to_path_buf()),
            ..args_for(None)
        };
        let result = run(args, &mut out);
        assert_eq!(exit_status(&result), 0);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["suggestion"], "INTERCEPT");
    }

    #[test]
    fn synthesize_writes_feed_and_exits_zero() {
        let mut out = Vec::new();
        let args = Args {
            synthesize: Some(5),
            seed: 7,
            ..args_for(None)
        };
        let result = run(args, &mut out);
        assert_eq!(exit_status(&result), 0);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 6);
    }
}
