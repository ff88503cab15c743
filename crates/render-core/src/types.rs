use inkpress_types::{LineCap, LineJoin, Size};

/// One recorded canvas operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    SetLineCap(LineCap),
    SetLineJoin(LineJoin),
    SetLineWidth(f32),
    Line { from: (f32, f32), to: (f32, f32) },
}

impl DrawCommand {
    pub fn is_line(&self) -> bool {
        matches!(self, DrawCommand::Line { .. })
    }
}

/// Creation parameters for a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    pub page_size: Size,
    /// Upper bound on recorded commands; `None` means unbounded.
    pub max_commands: Option<usize>,
}

impl CanvasConfig {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            max_commands: None,
        }
    }

    pub fn with_max_commands(mut self, limit: usize) -> Self {
        self.max_commands = Some(limit);
        self
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(Size::device())
    }
}

/// The complete drawing of one page, ready to be encoded by a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub size: Size,
    pub commands: Vec<DrawCommand>,
}

impl PageContent {
    pub fn blank(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_line()).count()
    }
}
