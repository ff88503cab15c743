//! Stroke composition: layered scene geometry to canvas draw calls.
//!
//! Traversal is strictly sequential (layers, then lines, then points), so
//! the order of draw calls reaching the canvas is the paint order of the
//! scene.

use crate::error::ExportError;
use inkpress_render_core::VectorCanvas;
use inkpress_types::{LineCap, LineJoin, Point, Scene};
use log::debug;
use serde::{Deserialize, Serialize};

/// Fixed width multiplier applied to every segment by default.
pub const DEFAULT_SCALE_FACTOR: f32 = 1.0;

/// Full-scale pressure reading used by [`WidthScaling::Pressure`].
pub const PRESSURE_DIVISOR: f32 = 204.8;

/// How a segment's stroke width is derived from its leading point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum WidthScaling {
    /// `width * factor`; pressure is ignored.
    Fixed { factor: f32 },
    /// `width * pressure / divisor`.
    Pressure { divisor: f32 },
}

impl Default for WidthScaling {
    fn default() -> Self {
        WidthScaling::Fixed {
            factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl WidthScaling {
    pub fn pressure() -> Self {
        WidthScaling::Pressure {
            divisor: PRESSURE_DIVISOR,
        }
    }

    pub fn stroke_width(&self, leading: &Point) -> f32 {
        match *self {
            WidthScaling::Fixed { factor } => leading.width * factor,
            WidthScaling::Pressure { divisor } => leading.width * (leading.pressure / divisor),
        }
    }
}

/// Line style applied uniformly to a whole page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrokeStyle {
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub width_scaling: WidthScaling,
}

/// Maps scene coordinates (x centered on the page) to page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransform {
    offset_x: f32,
}

impl PageTransform {
    pub fn for_page_width(page_width: f32) -> Self {
        Self {
            offset_x: page_width / 2.0,
        }
    }

    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.offset_x, y)
    }

    pub fn invert(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.offset_x, y)
    }
}

pub struct StrokeComposer {
    style: StrokeStyle,
    transform: PageTransform,
}

impl StrokeComposer {
    pub fn new(style: StrokeStyle, page_width: f32) -> Self {
        Self {
            style,
            transform: PageTransform::for_page_width(page_width),
        }
    }

    pub fn transform(&self) -> PageTransform {
        self.transform
    }

    /// Draws every segment of `scene` onto `canvas` and returns the number
    /// of segments drawn.
    pub fn compose<C: VectorCanvas + ?Sized>(
        &self,
        scene: &Scene,
        canvas: &mut C,
    ) -> Result<usize, ExportError> {
        canvas.set_line_cap(self.style.line_cap)?;
        canvas.set_line_join(self.style.line_join)?;

        let mut segments = 0;
        for (layer_idx, layer) in scene.layers.iter().enumerate() {
            for line in &layer.lines {
                let mut previous: Option<&Point> = None;
                for point in &line.points {
                    if let Some(prev) = previous {
                        canvas.set_line_width(self.style.width_scaling.stroke_width(prev))?;
                        let from = self.transform.apply(prev.x, prev.y);
                        let to = self.transform.apply(point.x, point.y);
                        canvas.line(from, to)?;
                        segments += 1;
                    }
                    previous = Some(point);
                }
            }
            debug!("Composed layer #{} ({} lines).", layer_idx, layer.lines.len());
        }
        Ok(segments)
    }
}
