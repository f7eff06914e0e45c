//! Tests for the estimate subcommand.

use super::parse;
use crate::cli::commands::{build_form, render_form};
use crate::cli::{Cli, CliCommand, EstimateArgs};
use clap::Parser;
use etacalc_core::config::EtacalcConfig;
use etacalc_core::{Base, Field};

fn estimate_args(args: &[&str]) -> EstimateArgs {
    match parse(args) {
        CliCommand::Estimate(args) => args,
        _ => panic!("expected Estimate"),
    }
}

#[test]
fn cli_parse_estimate_minimal() {
    let args = estimate_args(&["etacalc", "estimate", "--total", "1.5", "--speed", "512"]);
    assert_eq!(args.total, 1.5);
    assert_eq!(args.speed, 512.0);
    assert!(args.downloaded.is_none());
    assert!(args.total_unit.is_none());
    assert!(args.base.is_none());
    assert!(!args.json);
}

#[test]
fn cli_parse_estimate_full() {
    let args = estimate_args(&[
        "etacalc",
        "estimate",
        "--total",
        "4",
        "--total-unit",
        "GB",
        "--downloaded",
        "256",
        "--downloaded-unit",
        "megabyte",
        "--speed",
        "10",
        "--speed-unit",
        "Mb/s",
        "--base",
        "2",
        "--json",
    ]);
    assert_eq!(args.total_unit.as_deref(), Some("GB"));
    assert_eq!(args.downloaded, Some(256.0));
    assert_eq!(args.speed_unit.as_deref(), Some("Mb/s"));
    assert_eq!(args.base, Some(Base::Two));
    assert!(args.json);
}

#[test]
fn cli_parse_estimate_negative_speed() {
    let args = estimate_args(&["etacalc", "estimate", "--total", "1", "--speed", "-2"]);
    assert_eq!(args.speed, -2.0);
}

#[test]
fn cli_parse_estimate_rejects_bad_base() {
    let res = Cli::try_parse_from([
        "etacalc", "estimate", "--total", "1", "--speed", "1", "--base", "8",
    ]);
    assert!(res.is_err());
}

#[test]
fn cli_parse_estimate_requires_speed() {
    assert!(Cli::try_parse_from(["etacalc", "estimate", "--total", "1"]).is_err());
}

#[test]
fn build_form_applies_units_and_base() {
    let args = estimate_args(&[
        "etacalc",
        "estimate",
        "--total",
        "3",
        "--total-unit",
        "Kb",
        "--speed",
        "2",
        "--speed-unit",
        "kilobit",
        "--base",
        "2",
    ]);
    let form = build_form(&EtacalcConfig::default(), &args).unwrap();
    assert_eq!(form.base(), Base::Two);
    assert_eq!(form.quantity(Field::Total).bits(), 3.0 * 1024.0);
    assert_eq!(form.quantity(Field::Downloaded).amount, None);
    let report = form.report();
    assert_eq!(report.eta, "2 secs");
    assert_eq!(report.percent, 0);
}

#[test]
fn build_form_reports_unknown_unit_flag() {
    let args = estimate_args(&[
        "etacalc",
        "estimate",
        "--total",
        "1",
        "--speed",
        "1",
        "--speed-unit",
        "parsec",
    ]);
    let err = build_form(&EtacalcConfig::default(), &args).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("--speed-unit"), "{msg}");
    assert!(msg.contains("parsec"), "{msg}");
}

#[test]
fn render_shows_status_and_issues() {
    let args = estimate_args(&["etacalc", "estimate", "--total", "1", "--speed", "0"]);
    let form = build_form(&EtacalcConfig::default(), &args).unwrap();
    let text = render_form(&form, 10);
    assert!(text.contains("Total size:"), "{text}");
    assert!(text.contains("1 gigabyte (GB)"), "{text}");
    assert!(text.contains("[----------]"), "{text}");
    assert!(text.contains("Percent Downloaded: 0%"), "{text}");
    assert!(text.contains("ETA: --"), "{text}");
    assert!(text.contains("! Speed: Speed must be positive"), "{text}");
}
