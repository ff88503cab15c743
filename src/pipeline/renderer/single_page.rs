use crate::compose::StrokeComposer;
use crate::error::ExportError;
use crate::pipeline::config::ExportConfig;
use crate::scene::{SceneDecoder, ingest_reader};
use inkpress_render_lopdf::PdfCanvas;
use log::{debug, info};
use std::io::Read;

/// Progress of one custom render. Stages only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderStage {
    Idle,
    Ingesting,
    Composing,
    Finalizing,
    Done,
    Failed,
}

impl RenderStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, RenderStage::Done | RenderStage::Failed)
    }
}

/// A single-use custom render of one page record.
pub struct SinglePageRender<'a> {
    config: &'a ExportConfig,
    decoder: &'a dyn SceneDecoder,
    stage: RenderStage,
}

impl<'a> SinglePageRender<'a> {
    pub fn new(config: &'a ExportConfig, decoder: &'a dyn SceneDecoder) -> Self {
        Self {
            config,
            decoder,
            stage: RenderStage::Idle,
        }
    }

    pub fn stage(&self) -> RenderStage {
        self.stage
    }

    /// Runs the render to completion and returns the finished PDF bytes.
    ///
    /// A render that already ran is refused without touching `input`.
    pub fn run<R: Read + ?Sized>(&mut self, input: &mut R) -> Result<Vec<u8>, ExportError> {
        if self.stage != RenderStage::Idle {
            return Err(ExportError::InvalidArguments(format!(
                "render already ran (stage {:?})",
                self.stage
            )));
        }

        let result = self.run_stages(input);
        match &result {
            Ok(bytes) => {
                self.advance(RenderStage::Done);
                info!("[CUSTOM] Finished single-page render ({} bytes).", bytes.len());
            }
            Err(e) => {
                self.advance(RenderStage::Failed);
                debug!("[CUSTOM] Render failed: {}", e);
            }
        }
        result
    }

    fn run_stages<R: Read + ?Sized>(&mut self, input: &mut R) -> Result<Vec<u8>, ExportError> {
        self.advance(RenderStage::Ingesting);
        let scene = ingest_reader(input, self.decoder)?;

        self.advance(RenderStage::Composing);
        let mut canvas = PdfCanvas::new(self.config.canvas_config())?;
        let composer = StrokeComposer::new(self.config.stroke, self.config.page_size.width);
        let segments = composer.compose(&scene, &mut canvas)?;
        debug!("[CUSTOM] Composed {} segments.", segments);

        self.advance(RenderStage::Finalizing);
        Ok(canvas.finish_into_buffer()?)
    }

    fn advance(&mut self, next: RenderStage) {
        debug_assert!(next > self.stage, "stage {:?} -> {:?}", self.stage, next);
        debug!("[CUSTOM] {:?} -> {:?}", self.stage, next);
        self.stage = next;
    }
}
