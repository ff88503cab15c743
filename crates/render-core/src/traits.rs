use crate::error::CanvasError;
use inkpress_types::{LineCap, LineJoin};
use std::io::Write;

/// A page-sized drawing surface that accumulates stroked lines.
///
/// Style calls affect every line drawn after them. Coordinates are in page
/// space: origin at the top-left corner, y growing downward.
pub trait VectorCanvas {
    fn set_line_cap(&mut self, cap: LineCap) -> Result<(), CanvasError>;

    fn set_line_join(&mut self, join: LineJoin) -> Result<(), CanvasError>;

    fn set_line_width(&mut self, width: f32) -> Result<(), CanvasError>;

    fn line(&mut self, from: (f32, f32), to: (f32, f32)) -> Result<(), CanvasError>;

    /// Consumes the canvas, writing the finished page description.
    fn finish(self, writer: &mut dyn Write) -> Result<(), CanvasError>
    where
        Self: Sized;
}
