//! Rendering month views for the terminal and the web.
//!
//! A day with events is decorated from its first event only; the rest of
//! the bucket is left to the JSON output.

use anyhow::Result;
use calgrid_core::config::OutputFormat;
use calgrid_core::{Day, DayCell, Event, MonthView};
use owo_colors::OwoColorize;

/// Terminal rendering, optionally with colors.
pub trait TextRender {
    fn render_text(&self, color: bool) -> String;
}

/// HTML table rendering.
pub trait HtmlRender {
    fn render_html(&self) -> String;
}

/// Render all views in the requested output format.
pub fn render_views(views: &[MonthView], format: OutputFormat, color: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => views
            .iter()
            .map(|view| view.render_text(color))
            .collect::<Vec<_>>()
            .join("\n\n"),
        OutputFormat::Html => views
            .iter()
            .map(HtmlRender::render_html)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(views)?,
    };
    Ok(rendered)
}

/// Narrowest column that fits a two-digit day with a marker
const MIN_COLUMN_WIDTH: usize = 3;

impl TextRender for MonthView {
    fn render_text(&self, color: bool) -> String {
        let grid = &self.grid;
        let width = grid
            .weekday_headers
            .iter()
            .map(|h| h.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_COLUMN_WIDTH);
        let total_width = width * 7 + 6;

        let mut lines = Vec::with_capacity(grid.weeks.len() + 2);

        let label = format!("{:^total_width$}", grid.label);
        lines.push(if color { label.bold().to_string() } else { label });

        let header = grid
            .weekday_headers
            .iter()
            .map(|h| format!("{:>width$}", h))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(if color { header.dimmed().to_string() } else { header });

        for week in &grid.weeks {
            let row = week
                .cells
                .iter()
                .map(|cell| text_cell(self, cell, width, color))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(row.trim_end().to_string());
        }

        lines.join("\n")
    }
}

/// One right-aligned day column. Without colors, event days get a `*` marker.
fn text_cell(view: &MonthView, cell: &DayCell, width: usize, color: bool) -> String {
    let Day::Real(day) = cell.day else {
        return " ".repeat(width);
    };

    match view.primary_event(cell) {
        None => format!("{:>width$}", day),
        Some(event) if color => colorize(&format!("{:>width$}", day), event),
        Some(_) => format!("{:>width$}", format!("{}*", day)),
    }
}

/// Color a day by its event's style tag when it names a terminal color
fn colorize(text: &str, event: &Event) -> String {
    let tag = event.style_tag.as_deref().map(str::to_ascii_lowercase);
    match tag.as_deref() {
        Some("red") => text.red().bold().to_string(),
        Some("green") => text.green().bold().to_string(),
        Some("yellow") => text.yellow().bold().to_string(),
        Some("blue") => text.blue().bold().to_string(),
        Some("magenta") => text.magenta().bold().to_string(),
        Some("cyan") => text.cyan().bold().to_string(),
        _ => text.bold().underline().to_string(),
    }
}

impl HtmlRender for MonthView {
    fn render_html(&self) -> String {
        let grid = &self.grid;
        let mut html = String::from("<table>\n  <thead>\n");

        html.push_str(&format!(
            "    <tr><th colspan=\"7\">{}</th></tr>\n",
            escape_html(&grid.label)
        ));
        html.push_str("    <tr>");
        for header in &grid.weekday_headers {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("</tr>\n  </thead>\n  <tbody>\n");

        for week in &grid.weeks {
            html.push_str("    <tr>");
            for cell in &week.cells {
                html.push_str(&html_cell(self, cell));
            }
            html.push_str("</tr>\n");
        }

        html.push_str("  </tbody>\n</table>");
        html
    }
}

/// A `<td>`: a link when the day's first event has a url, bold otherwise
fn html_cell(view: &MonthView, cell: &DayCell) -> String {
    let Day::Real(day) = cell.day else {
        return "<td></td>".to_string();
    };

    let Some(event) = view.primary_event(cell) else {
        return format!("<td>{}</td>", day);
    };

    let class = event
        .style_tag
        .as_deref()
        .map(|c| format!(" class=\"{}\"", escape_html(c)))
        .unwrap_or_default();
    let content = match event.url.as_deref() {
        Some(url) => format!("<a href=\"{}\">{}</a>", escape_html(url), day),
        None => format!("<strong>{}</strong>", day),
    };
    format!("<td{}>{}</td>", class, content)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
