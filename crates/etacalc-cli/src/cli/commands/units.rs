//! `etacalc units` – list the measurement table for a base.

use anyhow::{Context, Result};
use etacalc_core::{generate_measurements, Base};

use super::render::render_units;

pub fn run_units(base: Base, json: bool) -> Result<()> {
    let measurements = generate_measurements(base);
    if json {
        let json = serde_json::to_string_pretty(&measurements).context("serialize units")?;
        println!("{json}");
    } else {
        print!("{}", render_units(base, &measurements));
    }
    Ok(())
}
