pub mod fixtures;
pub mod pdf_assertions;

use inkpress::{ExportError, ExporterBuilder, RenderOrchestrator};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    #[allow(dead_code)]
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// An orchestrator with default settings.
#[allow(dead_code)]
pub fn default_orchestrator() -> RenderOrchestrator {
    ExporterBuilder::new()
        .build()
        .expect("default configuration is valid")
}

/// Runs the custom path over an in-memory page record.
#[allow(dead_code)]
pub fn render_custom_page(
    orchestrator: &RenderOrchestrator,
    record: &[u8],
) -> Result<GeneratedPdf, ExportError> {
    let mut output = Vec::new();
    orchestrator.render_custom(Some(record), Some(&mut output))?;
    Ok(GeneratedPdf::from_bytes(output).expect("custom render produced a loadable PDF"))
}
