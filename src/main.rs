//! Scripted walkthrough of the drag engine against a simulated list.
//!
//! Usage: `draglist [config.json]`. Set `RUST_LOG=draglist=trace` to see
//! every reorder.

use anyhow::{Context, bail};
use draglist::constants::DEMO_ITEM_COUNT;
use draglist::logging::init_tracing;
use draglist::{
    DragMoveEvent, DragStartEvent, LayoutMeasurement, ListConfig, ListEngine, ListHost,
    Orientation, Point, ScrollRequest,
};
use rand::Rng;
use std::time::Instant;
use tracing::info;

const ROW_LENGTH: f32 = 56.0;
const SEPARATOR_LENGTH: f32 = 4.0;
const VIEWPORT_LENGTH: f32 = 400.0;
const CROSS_LENGTH: f32 = 360.0;
const MOVE_STEP: f32 = 12.0;

#[derive(Debug, Clone)]
struct ExampleItem {
    id: String,
    value: usize,
    background_color: String,
}

fn random_color(rng: &mut impl Rng) -> String {
    format!("#{:06X}", rng.gen_range(0..=0xFF_FFFFu32))
}

fn example_items(count: usize) -> Vec<ExampleItem> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|index| ExampleItem {
            id: format!("item-{index}"),
            value: index + 1,
            background_color: random_color(&mut rng),
        })
        .collect()
}

/// Uniform rows laid out back to back, every row mounted.
struct SimulatedList {
    orientation: Orientation,
    len: usize,
    offset: f32,
}

impl SimulatedList {
    fn new(orientation: Orientation, len: usize) -> Self {
        Self {
            orientation,
            len,
            offset: 0.0,
        }
    }

    fn viewport_size(&self) -> (f32, f32) {
        match self.orientation {
            Orientation::Vertical => (CROSS_LENGTH, VIEWPORT_LENGTH),
            Orientation::Horizontal => (VIEWPORT_LENGTH, CROSS_LENGTH),
        }
    }

    fn max_offset(&self) -> f32 {
        let content = self.len as f32 * (ROW_LENGTH + SEPARATOR_LENGTH);
        (content - VIEWPORT_LENGTH).max(0.0)
    }

    fn point_at(&self, along: f32) -> Point {
        Point::from_axes(self.orientation, along, CROSS_LENGTH / 2.0)
    }
}

impl ListHost for SimulatedList {
    fn measure_row(&mut self, index: usize) -> Option<LayoutMeasurement> {
        if index >= self.len {
            return None;
        }
        let along = index as f32 * (ROW_LENGTH + SEPARATOR_LENGTH) - self.offset;
        Some(match self.orientation {
            Orientation::Vertical => LayoutMeasurement::new(0.0, along, CROSS_LENGTH, ROW_LENGTH),
            Orientation::Horizontal => LayoutMeasurement::new(along, 0.0, ROW_LENGTH, CROSS_LENGTH),
        })
    }

    fn scroll_to_offset(&mut self, request: ScrollRequest) {
        self.offset = request.offset.clamp(0.0, self.max_offset());
        info!(offset = self.offset, animated = request.animated, "Host scrolled");
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => ListConfig::load(&path).with_context(|| format!("Failed to load config from {path}"))?,
        None => ListConfig::default(),
    };

    let items = example_items(DEMO_ITEM_COUNT);
    for item in items.iter().take(3) {
        info!(id = %item.id, value = item.value, color = %item.background_color, "Seeded");
    }

    let mut engine = ListEngine::new(config.clone(), items, |item: &ExampleItem, _| item.id.clone());
    let mut host = SimulatedList::new(config.orientation, DEMO_ITEM_COUNT);

    // First layout pass
    let now = Instant::now();
    let (width, height) = host.viewport_size();
    engine.on_list_layout(width, height);
    engine.on_separator_layout(SEPARATOR_LENGTH);
    for index in 0..DEMO_ITEM_COUNT {
        engine.on_row_mounted(index, now);
        engine.on_row_layout(index, ROW_LENGTH);
    }
    let measured = engine.poll_measurements(now + config.measure_debounce(), &mut host);
    info!(measured, "Rows measured");

    // Long press on the second row, then drag toward the trailing edge
    let mut along = ROW_LENGTH * 1.5;
    let start = engine.handle_drag_start(&DragStartEvent {
        position: host.point_at(along),
        held_for: config.long_press_delay(),
    });
    if !start.is_started() {
        bail!("Long press was not accepted: {start:?}");
    }

    let limit = VIEWPORT_LENGTH - ROW_LENGTH / 2.0 + config.edge_margin;
    while along + MOVE_STEP < limit {
        along += MOVE_STEP;
        let outcome = engine.handle_drag_move(&DragMoveEvent { position: host.point_at(along) }, &mut host);
        engine.on_scroll(host.offset);
        if let Some((from, to)) = outcome.reorder() {
            info!(from, to, "Moved");
        }
    }
    engine.end_drag();

    info!(order = ?engine.keys(), "Final order");
    Ok(())
}
