//! Decoded page content: layers of lines of points.
//!
//! Coordinates are scene-local: the x origin sits on the horizontal midpoint
//! of the page, the y origin on its top edge, and y grows downward. Ordering
//! at every level is paint order.

/// A single sampled pen position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub pressure: f32,
}

impl Point {
    pub fn new(x: f32, y: f32, width: f32, pressure: f32) -> Self {
        Self {
            x,
            y,
            width,
            pressure,
        }
    }
}

/// One continuous pen gesture, drawn as an open polyline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Pen tool code as reported by the decoder.
    pub tool: u32,
    /// Pen color code as reported by the decoder.
    pub color: u32,
    pub points: Vec<Point>,
}

impl Line {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            tool: 0,
            color: 0,
            points,
        }
    }

    /// Number of segments this line contributes when drawn.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layer {
    pub lines: Vec<Line>,
}

impl Layer {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub layers: Vec<Layer>,
}

impl Scene {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    pub fn segment_count(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|layer| layer.lines.iter())
            .map(Line::segment_count)
            .sum()
    }
}
