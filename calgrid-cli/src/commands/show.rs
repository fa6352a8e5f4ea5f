use std::path::Path;

use anyhow::{Context, Result};
use calgrid_core::source::{EventFormat, parse_events};
use calgrid_core::{ChronoFormatter, calendar_list};
use tracing::info;

use super::Overrides;
use crate::render::render_views;

pub async fn run(file: &Path, overrides: Overrides) -> Result<()> {
    let settings = overrides.resolve()?;
    let format = EventFormat::from_path(file)?;

    let content = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Could not read event file '{}'", file.display()))?;
    let events = parse_events(&content, format)
        .with_context(|| format!("Could not load events from '{}'", file.display()))?;
    info!(count = events.len(), file = %file.display(), "loaded events");

    let views = calendar_list(&events, &settings.options, &ChronoFormatter)?;
    println!("{}", render_views(&views, settings.format, settings.color)?);

    Ok(())
}
