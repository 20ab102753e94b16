//! # mailsieve
//!
//! Command-line front end for the Bloom filter core.
//!
//! Reads two newline-delimited email lists, each with a one-line header:
//! a known set and a candidate set. The known set is deduplicated, sized
//! into a filter, and inserted; every candidate is then checked, with one
//! verdict line per candidate on stdout:
//!
//! ```text
//! <email>,Probably in the DB
//! <email>,Not in the DB
//! ```
//!
//! The target false-positive probability defaults to 1e-7 and can be
//! overridden with the `MAILSIEVE_TARGET_FPR` environment variable. Logs go
//! to stderr so stdout stays machine-readable.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mailsieve_filter::{BloomFilter, FilterConfigBuilder};

/// Default target false-positive probability; more precision costs memory.
const DEFAULT_TARGET_FPR: f64 = 0.0000001;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: mailsieve <known_file> <candidates_file>");
        std::process::exit(1);
    }
    let known_path = &args[1];
    let candidates_path = &args[2];

    let target_fpr = target_fpr_from_env()?;

    // Known set: header skipped, deduplicated before sizing and insertion
    let known = read_email_set(known_path)
        .with_context(|| format!("failed to read known set from {}", known_path))?;

    let config = FilterConfigBuilder::new()
        .expected_items(known.len())
        .target_fpr(target_fpr)
        .build()?;
    let params = config.parameters()?;
    info!(
        known = known.len(),
        size_bits = params.size_bits,
        hash_count = params.hash_count,
        expected_fpr = params.expected_fpr,
        "sized filter"
    );

    let mut filter = BloomFilter::new(params.size_bits, params.hash_count)?;
    for email in &known {
        filter.insert(email.as_bytes());
    }
    info!(bits_set = filter.bits_set(), "filter populated");

    check_candidates(candidates_path, &filter, &mut io::stdout().lock())
        .with_context(|| format!("failed to check candidates from {}", candidates_path))?;

    Ok(())
}

/// Read the target false-positive probability override, if any.
fn target_fpr_from_env() -> Result<f64> {
    match std::env::var("MAILSIEVE_TARGET_FPR") {
        Ok(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("MAILSIEVE_TARGET_FPR is not a number: {}", raw)),
        Err(_) => Ok(DEFAULT_TARGET_FPR),
    }
}

/// Read a newline-delimited email list, skipping the header line and
/// deduplicating the rest.
fn read_email_set(path: &str) -> Result<HashSet<String>> {
    let file = File::open(path)?;
    let mut emails = HashSet::new();
    for line in BufReader::new(file).lines().skip(1) {
        emails.insert(line?.trim().to_string());
    }
    Ok(emails)
}

/// Check every candidate (header skipped) against the filter, writing one
/// verdict line per candidate.
fn check_candidates<W: Write>(path: &str, filter: &BloomFilter, out: &mut W) -> Result<()> {
    let file = File::open(path)?;
    for line in BufReader::new(file).lines().skip(1) {
        let email = line?.trim().to_string();
        let verdict = if filter.check(email.as_bytes()) {
            "Probably in the DB"
        } else {
            "Not in the DB"
        };
        writeln!(out, "{},{}", email, verdict)?;
    }
    Ok(())
}
