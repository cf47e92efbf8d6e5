use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use vote_tokens::cli::{dispatch, Args, Outcome};
use vote_tokens::{demo, Source, TokenLog, TokenRecord};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vote_tokens=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");
    let mut csrng = rand::rngs::OsRng;

    match dispatch(&args, &mut csrng)? {
        Outcome::Single(record) => {
            if args.json {
                println!("{}", serde_json::to_string(&record)?);
            } else {
                print_record(&record);
            }
        }
        Outcome::Demo(log) => {
            info!("ran the demonstration scenario");
            print_log(&log);
            write_log(&log, &args.output)?;
        }
    }

    Ok(())
}

fn print_record(record: &TokenRecord) {
    println!(
        "Token generated for {}:\n  vote={:02}\n  token={}\n  payload_hash={}\n  nonce={}",
        record.person_id, record.vote, record.token, record.payload_hash, record.nonce
    );
}

fn print_log(log: &TokenLog) {
    let mut last_person: Option<&str> = None;
    let mut in_random_section = false;

    for record in &log.tokens {
        let random = record.source == Some(Source::RandomTest);
        if random && !in_random_section {
            println!(
                "\nRandom test ({} tokens per person):",
                demo::TOKENS_PER_RANDOM_TEST
            );
            in_random_section = true;
            last_person = None;
        }
        if last_person != Some(record.person_id.as_str()) {
            println!("{}:", record.person_name);
            last_person = Some(record.person_id.as_str());
        }
        if random {
            println!(
                "  vote {:02} -> token={} | payload_hash={} | nonce={}",
                record.vote, record.token, record.payload_hash, record.nonce
            );
        } else {
            println!(
                "  token={}\n    payload_hash={}\n    nonce={}",
                record.token, record.payload_hash, record.nonce
            );
        }
    }
}

fn write_log(log: &TokenLog, path: &Path) -> Result<()> {
    let json = log.to_json_pretty()?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    let shown = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    info!(records = log.tokens.len(), path = %shown.display(), "token log written");
    println!("\nTokens saved to {}", shown.display());
    Ok(())
}
