use crate::document::PdfDocumentBuilder;
use inkpress_render_core::utils::all_finite;
use inkpress_render_core::{CanvasConfig, CanvasError, DrawCommand, PageContent, VectorCanvas};
use inkpress_types::{LineCap, LineJoin};
use std::io::Write;

/// A single-page canvas that records draw commands and renders them to PDF
/// on `finish`.
#[derive(Debug)]
pub struct PdfCanvas {
    config: CanvasConfig,
    commands: Vec<DrawCommand>,
}

impl PdfCanvas {
    pub fn new(config: CanvasConfig) -> Result<Self, CanvasError> {
        if !config.page_size.is_drawable() {
            return Err(CanvasError::Rejected(format!(
                "page size {}x{} is not drawable",
                config.page_size.width, config.page_size.height
            )));
        }
        Ok(Self {
            config,
            commands: Vec::new(),
        })
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Commands recorded so far, in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_page(self) -> PageContent {
        PageContent {
            size: self.config.page_size,
            commands: self.commands,
        }
    }

    /// Renders the page into an in-memory PDF.
    pub fn finish_into_buffer(self) -> Result<Vec<u8>, CanvasError> {
        let mut buffer = Vec::new();
        self.finish(&mut buffer)?;
        Ok(buffer)
    }

    fn push(&mut self, command: DrawCommand) -> Result<(), CanvasError> {
        if let Some(limit) = self.config.max_commands
            && self.commands.len() >= limit
        {
            return Err(CanvasError::CapacityExceeded { limit });
        }
        self.commands.push(command);
        Ok(())
    }
}

impl VectorCanvas for PdfCanvas {
    fn set_line_cap(&mut self, cap: LineCap) -> Result<(), CanvasError> {
        self.push(DrawCommand::SetLineCap(cap))
    }

    fn set_line_join(&mut self, join: LineJoin) -> Result<(), CanvasError> {
        self.push(DrawCommand::SetLineJoin(join))
    }

    fn set_line_width(&mut self, width: f32) -> Result<(), CanvasError> {
        if !width.is_finite() || width < 0.0 {
            return Err(CanvasError::Rejected(format!("invalid line width {}", width)));
        }
        self.push(DrawCommand::SetLineWidth(width))
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32)) -> Result<(), CanvasError> {
        if !all_finite(&[from.0, from.1, to.0, to.1]) {
            return Err(CanvasError::Rejected(format!(
                "non-finite line coordinates {:?} -> {:?}",
                from, to
            )));
        }
        self.push(DrawCommand::Line { from, to })
    }

    fn finish(self, writer: &mut dyn Write) -> Result<(), CanvasError> {
        let mut builder = PdfDocumentBuilder::new();
        builder.add_page(&self.into_page())?;
        builder.save_to(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpress_types::Size;

    #[test]
    fn rejects_undrawable_page_size() {
        let err = PdfCanvas::new(CanvasConfig::new(Size::new(0.0, 10.0))).unwrap_err();
        assert!(matches!(err, CanvasError::Rejected(_)));
    }

    #[test]
    fn rejects_non_finite_geometry() {
        let mut canvas = PdfCanvas::new(CanvasConfig::default()).unwrap();
        assert!(canvas.set_line_width(f32::NAN).is_err());
        assert!(canvas.set_line_width(-1.0).is_err());
        assert!(canvas.line((0.0, 0.0), (f32::INFINITY, 1.0)).is_err());
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn command_limit_is_enforced() {
        let config = CanvasConfig::default().with_max_commands(2);
        let mut canvas = PdfCanvas::new(config).unwrap();
        assert_eq!(canvas.config().max_commands, Some(2));
        canvas.line((0.0, 0.0), (1.0, 1.0)).unwrap();
        canvas.line((1.0, 1.0), (2.0, 2.0)).unwrap();
        let err = canvas.line((2.0, 2.0), (3.0, 3.0)).unwrap_err();
        assert!(matches!(err, CanvasError::CapacityExceeded { limit: 2 }));
        assert_eq!(canvas.commands().len(), 2);
    }

    #[test]
    fn finish_writes_single_page_pdf_with_configured_media_box() {
        let mut canvas = PdfCanvas::new(CanvasConfig::new(Size::new(100.0, 50.0))).unwrap();
        canvas.set_line_width(3.0).unwrap();
        canvas.line((10.0, 10.0), (20.0, 10.0)).unwrap();
        let bytes = canvas.finish_into_buffer().unwrap();

        assert!(bytes.starts_with(b"%PDF-1.7"));
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);
        let page_id = *pages.values().next().unwrap();
        let media_box = doc
            .get_dictionary(page_id)
            .unwrap()
            .get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o.as_float().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(media_box, vec![0.0, 0.0, 100.0, 50.0]);
    }
}
