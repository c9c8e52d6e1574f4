//! Console: the drawing surface views render into.
//!
//! Views only ever see `&mut dyn Console`, so the same view code draws into an
//! in-memory [`FrameBuffer`](crate::fb::FrameBuffer) in tests and into the real
//! terminal at runtime.

use anyhow::Result;

use crate::fb::CellStyle;

/// Minimal drawing capability.
///
/// Coordinates are terminal cells; anything outside `width() x height()` is
/// clipped silently.
pub trait Console {
    /// Start a frame: clear the surface.
    fn begin(&mut self);

    /// Finish a frame and present it.
    fn end(&mut self) -> Result<()>;

    /// Style used by every following draw call.
    fn set_draw_color(&mut self, style: CellStyle);

    /// Write `text` starting at (x, y).
    fn draw(&mut self, x: u16, y: u16, text: &str);

    /// Fill a rectangle with `ch`.
    fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char);

    /// Draw a box outline.
    fn draw_rect_outline(&mut self, x: u16, y: u16, w: u16, h: u16);

    fn width(&self) -> u16;

    fn height(&self) -> u16;
}
