//! Prints the buzzer half-period table for the C3-C4 scale.
//!
//! Run with: cargo run --bin generate_half_period_table

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use table_generators::half_period::render_c_array;
use tones::{DUTY_CYCLE, MICROS_PER_SECOND, SCALE, half_periods};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Half-period table generator")]
#[command(about = "Generates buzzer half-period delays for each note", long_about = None)]
struct Args {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let _args = Args::parse();

    info!(notes = SCALE.len(), "Generating half-period table");

    let values = half_periods(&SCALE);

    for (note, value) in SCALE.iter().zip(values) {
        info!(
            note = note.name,
            frequency = note.frequency,
            exact = MICROS_PER_SECOND * DUTY_CYCLE / note.frequency,
            half_period_us = value,
            "Sanity check"
        );
    }

    let contents = render_c_array(&values);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", contents).context("failed to write table to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}
