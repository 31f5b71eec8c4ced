// Terminal and SVG rendering of dashboard sections.

use std::fmt::Write as _;

use crate::chart::Dimensions;
use crate::dashboard::{Dashboard, Section};
use crate::format;
use crate::nav::Page;
use crate::views::{ALERT_COLOR, Card, ContainerCard, ContainerEntry};

const LABEL_WIDTH: usize = 14;
const VALUE_WIDTH: usize = 12;

/// Full text frame for one page: sections, then the container list and cards.
pub fn render_page(dashboard: &Dashboard, page: Page, dims: Dimensions, now_ms: i64) -> String {
    let mut out = String::new();
    for section in dashboard.sections(page) {
        render_section(&mut out, &section, dims);
    }
    let entries = dashboard.entries(page);
    if !entries.is_empty() {
        render_entries(&mut out, &entries);
    }
    for card in dashboard.container_cards(page, now_ms) {
        render_container(&mut out, &card, dims);
    }
    out
}

fn render_section(out: &mut String, section: &Section, dims: Dimensions) {
    let _ = writeln!(out, "== {} ==", section.title);
    for card in &section.cards {
        render_card_line(out, card, dims, "");
    }
    for fact in &section.facts {
        let _ = writeln!(out, "  {}: {}", fact.label, fact.value);
    }
    out.push('\n');
}

fn render_card_line(out: &mut String, card: &Card, dims: Dimensions, indent: &str) {
    let spark = card
        .series(dims)
        .map(|s| s.glyphs())
        .unwrap_or_default();
    let flag = if card.has_spike() { " !" } else { "" };
    let _ = writeln!(
        out,
        "{indent}{:<lw$} {:>vw$}  {spark}{flag}",
        card.label,
        card.display,
        lw = LABEL_WIDTH,
        vw = VALUE_WIDTH,
    );
}

fn render_entries(out: &mut String, entries: &[ContainerEntry]) {
    let _ = writeln!(out, "-- Containers --");
    for e in entries {
        let _ = writeln!(
            out,
            "  {:<24} {:<10} {:>8} {:>10}",
            e.name,
            e.status.as_str(),
            format::percent(e.cpu),
            e.ram
        );
    }
    out.push('\n');
}

fn render_container(out: &mut String, card: &ContainerCard, dims: Dimensions) {
    let marker = if card.offline { " (offline)" } else { "" };
    let _ = writeln!(
        out,
        "[{}] {}{} - {}",
        card.status.as_str(),
        card.name,
        marker,
        card.detail
    );
    for c in &card.cards {
        render_card_line(out, c, dims, "  ");
    }
    let _ = writeln!(
        out,
        "  rx {} / tx {} / read {} / write {}",
        format::bytes(card.total_rx_bytes as f64),
        format::bytes(card.total_tx_bytes as f64),
        format::bytes(card.block_read as f64),
        format::bytes(card.block_write as f64),
    );
}

/// Standalone SVG sparkline for a card; `None` until the card has two samples.
pub fn card_svg(card: &Card, dims: Dimensions) -> Option<String> {
    let series = card.series(dims)?;
    let stroke = series.stroke(card.color, ALERT_COLOR);
    Some(format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            r#"<path d="{area}" fill="{stroke}" fill-opacity="0.2" stroke="none"/>"#,
            r#"<path d="{line}" fill="none" stroke="{stroke}" stroke-width="1.5"/>"#,
            "</svg>"
        ),
        w = dims.width,
        h = dims.height,
        area = series.area_path,
        line = series.path,
        stroke = stroke,
    ))
}
