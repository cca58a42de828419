//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestListBuilder` - Builder for engines whose rows are already measured
//! - `RecordingHost` - `ListHost` that records scroll requests and measure calls
//! - Event shorthands like `press_at()` and `move_to()`

#![allow(dead_code)]

use draglist::{
    DragMoveEvent, DragStartEvent, GesturePlatform, LayoutMeasurement, ListConfig, ListEngine,
    ListHost, MoveOutcome, Orientation, Point, ScrollRequest, StartOutcome,
};
use std::time::Duration;

/// Cross-axis offset and length every test row is measured with.
pub const CROSS_OFFSET: f32 = 20.0;
pub const CROSS_LENGTH: f32 = 80.0;

// ============================================================================
// TestListBuilder
// ============================================================================

/// Builder for an engine over `item-0 .. item-N` with uniform, measured rows.
///
/// # Example
/// ```ignore
/// let engine = TestListBuilder::new(5)
///     .with_row_length(100.0)
///     .with_viewport(600.0)
///     .build();
/// ```
pub struct TestListBuilder {
    len: usize,
    orientation: Orientation,
    platform: GesturePlatform,
    row_length: f32,
    separator_length: f32,
    viewport_length: f32,
    scroll_offset: f32,
    long_press: Duration,
    measure_rows: bool,
}

impl TestListBuilder {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            orientation: Orientation::Vertical,
            platform: GesturePlatform::Ios,
            row_length: 100.0,
            separator_length: 0.0,
            viewport_length: 600.0,
            scroll_offset: 0.0,
            long_press: LONG_PRESS,
            measure_rows: true,
        }
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    /// Platform without a distinct active phase: starts arm, moves confirm.
    pub fn armed_platform(mut self) -> Self {
        self.platform = GesturePlatform::Android;
        self
    }

    pub fn with_row_length(mut self, length: f32) -> Self {
        self.row_length = length;
        self
    }

    pub fn with_separator(mut self, length: f32) -> Self {
        self.separator_length = length;
        self
    }

    pub fn with_viewport(mut self, length: f32) -> Self {
        self.viewport_length = length;
        self
    }

    pub fn with_scroll_offset(mut self, offset: f32) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn with_long_press(mut self, delay: Duration) -> Self {
        self.long_press = delay;
        self
    }

    /// Skip the measurement pass; the engine starts with an empty cache.
    pub fn unmeasured(mut self) -> Self {
        self.measure_rows = false;
        self
    }

    pub fn config(&self) -> ListConfig {
        ListConfig {
            orientation: self.orientation,
            ..ListConfig::default()
        }
        .with_platform(self.platform)
        .with_long_press_delay(self.long_press)
    }

    pub fn build(self) -> ListEngine<String> {
        let items = (0..self.len).map(|i| format!("item-{i}")).collect();
        let mut engine = ListEngine::new(self.config(), items, |item: &String, _| item.clone());

        match self.orientation {
            Orientation::Vertical => engine.on_list_layout(CROSS_LENGTH, self.viewport_length),
            Orientation::Horizontal => engine.on_list_layout(self.viewport_length, CROSS_LENGTH),
        }
        engine.on_separator_layout(self.separator_length);
        engine.on_scroll(self.scroll_offset);

        if self.measure_rows {
            for index in 0..self.len {
                engine.on_row_measured(index, self.measurement(index));
                engine.on_row_layout(index, self.row_length);
            }
        }
        engine
    }

    fn measurement(&self, index: usize) -> LayoutMeasurement {
        row_measurement(self.orientation, index, self.row_length, self.separator_length)
    }
}

/// Measurement of row `index` in a list of uniform rows.
pub fn row_measurement(orientation: Orientation, index: usize, row_length: f32, separator: f32) -> LayoutMeasurement {
    let along = index as f32 * (row_length + separator);
    match orientation {
        Orientation::Vertical => LayoutMeasurement::new(CROSS_OFFSET, along, CROSS_LENGTH, row_length),
        Orientation::Horizontal => LayoutMeasurement::new(along, CROSS_OFFSET, row_length, CROSS_LENGTH),
    }
}

// ============================================================================
// RecordingHost
// ============================================================================

/// Host that records every command the engine issues.
///
/// Rows `0..mounted` can be measured; anything past that reports no live reference.
pub struct RecordingHost {
    pub orientation: Orientation,
    pub mounted: usize,
    pub row_length: f32,
    pub scroll_requests: Vec<ScrollRequest>,
    pub measured: Vec<usize>,
}

impl RecordingHost {
    pub fn new(mounted: usize) -> Self {
        Self {
            orientation: Orientation::Vertical,
            mounted,
            row_length: 100.0,
            scroll_requests: Vec::new(),
            measured: Vec::new(),
        }
    }
}

impl ListHost for RecordingHost {
    fn measure_row(&mut self, index: usize) -> Option<LayoutMeasurement> {
        self.measured.push(index);
        (index < self.mounted).then(|| row_measurement(self.orientation, index, self.row_length, 0.0))
    }

    fn scroll_to_offset(&mut self, request: ScrollRequest) {
        self.scroll_requests.push(request);
    }
}

// ============================================================================
// Event shorthands
// ============================================================================

pub const LONG_PRESS: Duration = Duration::from_millis(700);

/// Qualifying long press at `along` on the list axis.
pub fn press_at(orientation: Orientation, along: f32) -> DragStartEvent {
    DragStartEvent {
        position: Point::from_axes(orientation, along, CROSS_LENGTH / 2.0),
        held_for: LONG_PRESS,
    }
}

pub fn start_at(engine: &mut ListEngine<String>, along: f32) -> StartOutcome {
    let event = press_at(engine.config().orientation, along);
    engine.handle_drag_start(&event)
}

pub fn move_to(engine: &mut ListEngine<String>, host: &mut RecordingHost, along: f32) -> MoveOutcome {
    let position = Point::from_axes(engine.config().orientation, along, CROSS_LENGTH / 2.0);
    engine.handle_drag_move(&DragMoveEvent { position }, host)
}

/// Keys of the current order joined by spaces.
pub fn order_of(engine: &ListEngine<String>) -> String {
    engine.keys().join(" ")
}

pub fn keys(names: &[usize]) -> Vec<String> {
    names.iter().map(|i| format!("item-{i}")).collect()
}
