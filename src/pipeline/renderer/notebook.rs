use super::{FullDocumentRenderer, RenderOptions};
use crate::compose::StrokeComposer;
use crate::container::NotebookArchive;
use crate::error::BoxError;
use crate::pipeline::config::ExportConfig;
use crate::scene::{SceneDecoder, ingest};
use inkpress_render_core::PageContent;
use inkpress_render_lopdf::{PdfCanvas, PdfDocumentBuilder};
use log::{debug, info, warn};
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

/// The default full-document renderer: every selected page goes through the
/// same decode and compose steps as the custom path, then all pages are
/// assembled into one PDF in selection order.
#[derive(Clone)]
pub struct NotebookRenderer {
    config: Arc<ExportConfig>,
    decoder: Arc<dyn SceneDecoder>,
}

impl NotebookRenderer {
    pub fn new(config: Arc<ExportConfig>, decoder: Arc<dyn SceneDecoder>) -> Self {
        Self { config, decoder }
    }

    fn render_page(
        &self,
        archive: &mut NotebookArchive,
        index: usize,
    ) -> Result<PageContent, BoxError> {
        let entry = archive.page(index)?;
        if entry.is_blank() {
            debug!("Page #{} ('{}') has no strokes; emitting a blank page.", index, entry.id);
            return Ok(PageContent::blank(self.config.page_size));
        }

        let raw = archive.page_bytes(index)?;
        let scene = ingest(&raw, self.decoder.as_ref())?;
        let mut canvas = PdfCanvas::new(self.config.canvas_config())?;
        let segments = StrokeComposer::new(self.config.stroke, self.config.page_size.width)
            .compose(&scene, &mut canvas)?;
        debug!("Page #{}: {} segments.", index, segments);
        Ok(canvas.into_page())
    }
}

impl FullDocumentRenderer for NotebookRenderer {
    fn render(
        &self,
        archive: &mut NotebookArchive,
        sink: &mut dyn Write,
        options: &RenderOptions,
    ) -> Result<(), BoxError> {
        let start = Instant::now();
        let selected = options.selected(archive.page_count());
        if selected.is_empty() {
            warn!("No pages selected; writing an empty document.");
        }

        let pages = selected
            .iter()
            .map(|&index| self.render_page(archive, index))
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = PdfDocumentBuilder::new();
        builder.add_pages(&pages)?;
        builder.save_to(sink)?;

        info!(
            "Rendered {} pages in {:.2?}.",
            pages.len(),
            start.elapsed()
        );
        Ok(())
    }
}
