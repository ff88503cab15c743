use super::config::ExportConfig;
use super::orchestrator::RenderOrchestrator;
use super::renderer::{FullDocumentRenderer, NotebookRenderer};
use crate::compose::{StrokeStyle, WidthScaling};
use crate::error::ExportError;
use crate::scene::{LinesDecoder, SceneDecoder};
use inkpress_types::Size;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `RenderOrchestrator`.
#[derive(Default)]
pub struct ExporterBuilder {
    config: ExportConfig,
    decoder: Option<Arc<dyn SceneDecoder>>,
    backend: Option<Arc<dyn FullDocumentRenderer>>,
}

impl ExporterBuilder {
    /// Creates a new `ExporterBuilder` with the device page size and round strokes.
    pub fn new() -> Self { Default::default() }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: ExportConfig) -> Self { self.config = config; self }

    /// Loads the configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ExportError> {
        self.config = ExportConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_page_size(mut self, size: Size) -> Self { self.config.page_size = size; self }

    pub fn with_stroke_style(mut self, style: StrokeStyle) -> Self { self.config.stroke = style; self }

    pub fn with_width_scaling(mut self, scaling: WidthScaling) -> Self {
        self.config.stroke.width_scaling = scaling;
        self
    }

    /// Limits how many draw commands a single page may record.
    pub fn with_max_draw_commands(mut self, limit: usize) -> Self {
        self.config.max_draw_commands = Some(limit);
        self
    }

    /// Replaces the built-in `.lines` decoder.
    pub fn with_decoder<D: SceneDecoder + 'static>(mut self, decoder: D) -> Self {
        self.decoder = Some(Arc::new(decoder));
        self
    }

    /// Replaces the built-in multi-page renderer used by the full-document strategy.
    pub fn with_full_document_renderer<B: FullDocumentRenderer + 'static>(mut self, backend: B) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    /// Consumes the builder and creates the `RenderOrchestrator`.
    /// Defaults are filled in here, so the built-in renderer always shares the
    /// orchestrator's decoder and configuration.
    pub fn build(self) -> Result<RenderOrchestrator, ExportError> {
        self.config.validate()?;
        let config = Arc::new(self.config);

        let decoder = self.decoder.unwrap_or_else(|| {
            Arc::new(LinesDecoder::with_page_width(config.page_size.width)) as Arc<dyn SceneDecoder>
        });
        let backend: Arc<dyn FullDocumentRenderer> = match self.backend {
            Some(backend) => backend,
            None => {
                log::debug!("Using the built-in notebook renderer for full-document exports.");
                Arc::new(NotebookRenderer::new(Arc::clone(&config), Arc::clone(&decoder)))
            }
        };

        Ok(RenderOrchestrator::new(config, decoder, backend))
    }
}
