//! PDF canvas backed by the lopdf library.
//!
//! `PdfCanvas` records the drawing of a single page; `PdfDocumentBuilder`
//! assembles one or more recorded pages into a complete PDF file.

mod canvas;
mod content;
mod document;

pub use canvas::PdfCanvas;
pub use content::encode_page_content;
pub use document::{PDF_VERSION, PdfDocumentBuilder};
