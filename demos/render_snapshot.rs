// Render one snapshot JSON file as a text dashboard frame.
//
// Usage: cargo run --example render_snapshot -- SNAPSHOT_JSON [PAGE]
//   PAGE  system | containers | coolify (default: system)

use homeboard::chart::Dimensions;
use homeboard::dashboard::{Dashboard, now_ms};
use homeboard::ingest::parse_frame;
use homeboard::nav::Page;
use homeboard::render::render_page;
use homeboard::window::DEFAULT_CAPACITY;
use std::env;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        anyhow::bail!("usage: render_snapshot SNAPSHOT_JSON [PAGE]");
    };
    let page = args
        .get(2)
        .map(|p| Page::from_name(p))
        .unwrap_or_default();

    let text = std::fs::read_to_string(path)?;
    let snapshot = parse_frame(&text)?;

    let now = now_ms();
    let mut board = Dashboard::new(DEFAULT_CAPACITY, now);
    board.apply(&snapshot, now);
    print!("{}", render_page(&board, page, Dimensions::default(), now));
    Ok(())
}
