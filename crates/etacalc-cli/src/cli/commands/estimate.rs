//! `etacalc estimate` – one-shot percent and ETA.

use anyhow::{Context, Result};
use etacalc_core::config::EtacalcConfig;
use etacalc_core::form::EtaForm;
use etacalc_core::Field;

use super::render::render_form;
use crate::cli::EstimateArgs;

/// Fill a form from config defaults and command-line overrides.
pub fn build_form(cfg: &EtacalcConfig, args: &EstimateArgs) -> Result<EtaForm> {
    let mut form = EtaForm::from_config(cfg);
    if let Some(base) = args.base {
        form.set_base(base);
    }

    let fields = [
        (Field::Total, Some(args.total), args.total_unit.as_deref()),
        (Field::Downloaded, args.downloaded, args.downloaded_unit.as_deref()),
        (Field::Speed, Some(args.speed), args.speed_unit.as_deref()),
    ];
    for (field, amount, unit) in fields {
        if let Some(unit) = unit {
            form.set_unit(field, unit)
                .with_context(|| format!("--{field}-unit"))?;
        }
        form.set_amount(field, amount);
    }
    Ok(form)
}

pub fn run_estimate(cfg: &EtacalcConfig, args: &EstimateArgs) -> Result<()> {
    let form = build_form(cfg, args)?;
    let report = form.report();
    tracing::info!(
        percent = report.percent,
        eta = %report.eta,
        issues = report.issues.len(),
        "estimate"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        print!("{}", render_form(&form, cfg.progress_bar_width));
    }
    Ok(())
}
