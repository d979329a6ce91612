//! Presentation seams between the engine and whatever draws it.

use crate::mapper::POINTER_ANGLE;

/// One participant as drawn on the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice<'a> {
    pub name: &'a str,
    pub color_index: usize,
}

/// Fixed pointer the wheel is read against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Screen angle (radians, clockwise from +x)
    pub angle: f64,
}

impl Default for Pointer {
    fn default() -> Self {
        Self { angle: POINTER_ANGLE }
    }
}

/// Everything needed to draw the wheel at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct WheelFrame<'a> {
    pub slices: Vec<Slice<'a>>,
    pub rotation: f64,
    pub pointer: Pointer,
}

impl<'a> WheelFrame<'a> {
    pub fn new(names: &'a [String], rotation: f64, palette_len: usize) -> Self {
        let palette_len = palette_len.max(1);
        Self {
            slices: names
                .iter()
                .enumerate()
                .map(|(i, name)| Slice {
                    name: name.as_str(),
                    color_index: i % palette_len,
                })
                .collect(),
            rotation,
            pointer: Pointer::default(),
        }
    }

    /// An empty wheel has no geometry and draws as a placeholder
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Receives the wheel every spin tick and after each change to the names.
pub trait RenderSink {
    fn render(&mut self, frame: &WheelFrame<'_>);
}

/// Receives spin results. The wheel stays blocked until
/// [`Wheel::acknowledge`](crate::Wheel::acknowledge) is called.
pub trait OutcomeSink {
    fn present_eliminated(&mut self, name: &str);

    /// `eliminated` is the name removed by the final spin, if any remained
    /// to be removed.
    fn present_winner(&mut self, winner: &str, eliminated: Option<&str>);
}

pub trait WheelView: RenderSink + OutcomeSink {}

impl<T: RenderSink + OutcomeSink> WheelView for T {}

/// View that ignores everything, for headless use
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl RenderSink for NullView {
    fn render(&mut self, _frame: &WheelFrame<'_>) {}
}

impl OutcomeSink for NullView {
    fn present_eliminated(&mut self, _name: &str) {}
    fn present_winner(&mut self, _winner: &str, _eliminated: Option<&str>) {}
}
