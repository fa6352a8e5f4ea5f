use anyhow::{Context, Result};
use calgrid_core::grid::build_grid_default;
use calgrid_core::{MonthKey, MonthView};
use chrono::{Local, NaiveDate};

use super::Overrides;
use crate::render::render_views;

pub fn run(month: Option<&str>, overrides: Overrides) -> Result<()> {
    let settings = overrides.resolve()?;
    let month = match month {
        Some(s) => parse_month(s)?,
        None => MonthKey::of(Local::now().date_naive()),
    };

    let grid = build_grid_default(month, &settings.options.locale, settings.options.week_start)?;
    let view = MonthView { grid, events: None };
    println!("{}", render_views(&[view], settings.format, settings.color)?);

    Ok(())
}

/// Parse YYYY-MM into a month key
fn parse_month(s: &str) -> Result<MonthKey> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}'. Expected YYYY-MM", s))?;
    Ok(MonthKey::of(date))
}
