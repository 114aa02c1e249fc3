//! Day-accounting command handlers.
//!
//! Covers `stay report`, `stay schengen`, `stay cities`, `stay uk-tax` and
//! `stay days`. All of them read stays from a local file; nothing here
//! touches the network.

use anyhow::{Context, Result};

use stay_config::ConfigScope;
use stay_days::{city_limits, over_limit_days, schengen_days, uk_tax_year_stats};

use super::{load_app_config, load_trips_file};

/// Execute `stay report`.
pub fn report(config_paths: &[String], trips_path: &str) -> Result<()> {
    let cfg = load_app_config(config_paths, ConfigScope::Report)?;
    let stays = load_trips_file(trips_path)?;
    let rule = cfg.window_rule();

    let schengen = schengen_days(&stays, &rule);
    println!("schengen_total_days={}", schengen.total_days);
    println!(
        "schengen_over_limit_days={}",
        over_limit_days(&schengen).len()
    );

    for (city, limit) in city_limits(&stays, &rule) {
        println!(
            "city={} total_days={} max_in_any_window={} has_over_limit={} excess_days={}",
            city,
            limit.total_days,
            limit.max_in_any_window,
            limit.has_over_limit,
            limit.excess_days(rule.limit_days)
        );
    }

    let years = cfg.tax_years();
    for (name, stats) in uk_tax_year_stats(&stays, &years, &cfg.residency_rule()) {
        println!(
            "tax_year={} days_in_uk={} meets_requirement={} days_needed={}",
            name, stats.days_in_uk, stats.meets_requirement, stats.days_needed
        );
    }

    Ok(())
}

/// Execute `stay schengen`.
pub fn schengen(config_paths: &[String], trips_path: &str, json: bool) -> Result<()> {
    let cfg = load_app_config(config_paths, ConfigScope::Report)?;
    let stays = load_trips_file(trips_path)?;
    let report = schengen_days(&stays, &cfg.window_rule());

    if json {
        let out = serde_json::to_string_pretty(&report).context("serialize report json failed")?;
        println!("{}", out);
        return Ok(());
    }

    println!("schengen_total_days={}", report.total_days);
    for s in &report.samples {
        println!(
            "date={} days_in_window={} is_over_limit={} location={}",
            s.date, s.days_in_window, s.is_over_limit, s.location
        );
    }
    Ok(())
}

/// Execute `stay cities`.
pub fn cities(config_paths: &[String], trips_path: &str) -> Result<()> {
    let cfg = load_app_config(config_paths, ConfigScope::Report)?;
    let stays = load_trips_file(trips_path)?;
    let rule = cfg.window_rule();

    for (city, limit) in city_limits(&stays, &rule) {
        println!(
            "city={} total_days={} max_in_any_window={} has_over_limit={} excess_days={}",
            city,
            limit.total_days,
            limit.max_in_any_window,
            limit.has_over_limit,
            limit.excess_days(rule.limit_days)
        );
    }
    Ok(())
}

/// Execute `stay uk-tax`.
pub fn uk_tax(config_paths: &[String], trips_path: &str) -> Result<()> {
    let cfg = load_app_config(config_paths, ConfigScope::Report)?;
    let stays = load_trips_file(trips_path)?;

    let years = cfg.tax_years();
    for (name, stats) in uk_tax_year_stats(&stays, &years, &cfg.residency_rule()) {
        println!(
            "tax_year={} days_in_uk={} meets_requirement={} days_needed={}",
            name, stats.days_in_uk, stats.meets_requirement, stats.days_needed
        );
    }
    Ok(())
}

/// Execute `stay days`.
pub fn days(start: &str, end: &str) -> Result<()> {
    let n = stay_days::calculate_days_str(start, end).with_context(|| {
        format!(
            "invalid date range '{}'..'{}'. expected YYYY-MM-DD",
            start, end
        )
    })?;
    println!("days={}", n);
    Ok(())
}
