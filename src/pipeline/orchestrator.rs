use super::config::{ExportConfig, Strategy};
use super::renderer::{FullDocumentRenderer, RenderOptions, SinglePageRender};
use crate::container::NotebookArchive;
use crate::error::ExportError;
use crate::output::{FileOutput, ReadSeekClose, SeekCloser};
use crate::scene::SceneDecoder;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Entry point for notebook exports.
///
/// All state is immutable after construction, so one orchestrator can be
/// shared across threads and serve concurrent exports.
#[derive(Clone)]
pub struct RenderOrchestrator {
    config: Arc<ExportConfig>,
    decoder: Arc<dyn SceneDecoder>,
    backend: Arc<dyn FullDocumentRenderer>,
}

impl RenderOrchestrator {
    pub(crate) fn new(
        config: Arc<ExportConfig>,
        decoder: Arc<dyn SceneDecoder>,
        backend: Arc<dyn FullDocumentRenderer>,
    ) -> Self {
        Self {
            config,
            decoder,
            backend,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Renders every page of the container at `input` into a PDF at
    /// `output` and returns the file rewound to its start.
    pub fn render_full_document<P, Q>(&self, input: P, output: Q) -> Result<FileOutput, ExportError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let output = output.as_ref();
        info!(
            "[FULL] Exporting '{}' to '{}'.",
            input.as_ref().display(),
            output.display()
        );
        let mut archive = NotebookArchive::open(input)?;
        let file = File::options()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(output)
            .map_err(ExportError::output("create output file"))?;
        self.render_into_file(&mut archive, file, Some(output.to_path_buf()))
    }

    /// Like [`render_full_document`](Self::render_full_document), but into an
    /// anonymous temporary file that disappears once the handle is closed.
    #[cfg(feature = "native")]
    pub fn render_full_document_to_temp<P: AsRef<Path>>(
        &self,
        input: P,
    ) -> Result<FileOutput, ExportError> {
        info!("[FULL] Exporting '{}' to a temporary file.", input.as_ref().display());
        let mut archive = NotebookArchive::open(input)?;
        let file = tempfile::tempfile().map_err(ExportError::output("create temporary file"))?;
        self.render_into_file(&mut archive, file, None)
    }

    /// Hands an already opened container to the full-document renderer.
    pub fn render_archive(
        &self,
        archive: &mut NotebookArchive,
        sink: &mut dyn Write,
    ) -> Result<(), ExportError> {
        debug!("[FULL] Delegating {} pages to the renderer.", archive.page_count());
        self.backend
            .render(archive, sink, &RenderOptions::all_pages())
            .map_err(ExportError::RenderBackendFailed)
    }

    fn render_into_file(
        &self,
        archive: &mut NotebookArchive,
        file: File,
        path: Option<PathBuf>,
    ) -> Result<FileOutput, ExportError> {
        let start = Instant::now();
        let mut writer = BufWriter::new(file);
        self.render_archive(archive, &mut writer)?;

        let mut file = writer.into_inner().map_err(|e| ExportError::OutputIOFailed {
            action: "flush output file",
            source: e.into_error(),
        })?;
        file.seek(SeekFrom::Start(0))
            .map_err(ExportError::output("rewind output file"))?;

        info!("[FULL] Finished in {:.2?}.", start.elapsed());
        Ok(FileOutput::new(file, path))
    }

    /// Renders one page record from `input` with the built-in composer and
    /// writes the finished PDF to `output`.
    ///
    /// Both arguments are required; a missing one is rejected before any
    /// I/O happens.
    pub fn render_custom<R, W>(&self, input: Option<R>, output: Option<W>) -> Result<(), ExportError>
    where
        R: Read,
        W: Write,
    {
        let (mut input, mut output) = match (input, output) {
            (Some(input), Some(output)) => (input, output),
            (input, output) => {
                return Err(ExportError::InvalidArguments(format!(
                    "custom render needs both an input and an output (input: {}, output: {})",
                    presence(input.is_some()),
                    presence(output.is_some())
                )));
            }
        };

        let bytes = self.render_page(&mut input)?;
        output
            .write_all(&bytes)
            .map_err(ExportError::output("write document"))?;
        output.flush().map_err(ExportError::output("flush document"))?;
        Ok(())
    }

    /// Renders one page record from `input` into an in-memory stream
    /// positioned at offset 0.
    pub fn render_custom_to_stream<R: Read>(&self, input: Option<R>) -> Result<SeekCloser, ExportError> {
        let Some(mut input) = input else {
            return Err(ExportError::InvalidArguments(
                "custom render needs an input".to_string(),
            ));
        };
        Ok(SeekCloser::new(self.render_page(&mut input)?))
    }

    fn render_page<R: Read + ?Sized>(&self, input: &mut R) -> Result<Vec<u8>, ExportError> {
        info!("[CUSTOM] Starting single-page render.");
        SinglePageRender::new(&self.config, self.decoder.as_ref()).run(input)
    }

    /// Exports the container at `input` to `output` with the chosen strategy
    /// and returns the finished document, readable from its start.
    pub fn export<P, Q>(
        &self,
        strategy: Strategy,
        input: P,
        output: Q,
    ) -> Result<Box<dyn ReadSeekClose + Send>, ExportError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        debug!("Selected strategy {:?}.", strategy);
        match strategy {
            Strategy::FullDocument => Ok(Box::new(self.render_full_document(input, output)?)),
            Strategy::CustomSinglePage { page } => {
                let mut archive = NotebookArchive::open(input)?;
                let stream = self.render_custom_to_stream(Some(archive.page_reader(page)?))?;
                fs::write(output.as_ref(), stream.as_bytes())
                    .map_err(ExportError::output("write output file"))?;
                Ok(Box::new(stream))
            }
        }
    }
}

fn presence(present: bool) -> &'static str {
    if present { "present" } else { "missing" }
}
