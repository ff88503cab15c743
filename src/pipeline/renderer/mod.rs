//! Page rendering strategies.
//!
//! - [`SinglePageRender`]: the built-in custom path. Decodes one page record,
//!   composes its strokes onto a fresh canvas and finalizes a one-page PDF in
//!   memory.
//! - [`FullDocumentRenderer`]: the substitutable multi-page backend. The
//!   crate ships [`NotebookRenderer`] as its default implementation.

use crate::container::NotebookArchive;
use crate::error::BoxError;
use std::io::Write;

mod notebook;
mod single_page;

pub use notebook::NotebookRenderer;
pub use single_page::{RenderStage, SinglePageRender};

/// Which pages of a container a full-document render should include.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub all_pages: bool,
    /// Page indices to render when `all_pages` is unset, in output order.
    pub pages: Vec<usize>,
}

impl RenderOptions {
    pub fn all_pages() -> Self {
        Self {
            all_pages: true,
            pages: Vec::new(),
        }
    }

    pub fn pages(pages: impl Into<Vec<usize>>) -> Self {
        Self {
            all_pages: false,
            pages: pages.into(),
        }
    }

    /// Resolves the selection against a container of `page_count` pages.
    pub fn selected(&self, page_count: usize) -> Vec<usize> {
        if self.all_pages {
            (0..page_count).collect()
        } else {
            self.pages.clone()
        }
    }
}

/// Renders a whole notebook container into one document on `sink`.
///
/// Implementations report failures as opaque causes; the orchestrator wraps
/// them as `RenderBackendFailed`.
pub trait FullDocumentRenderer: Send + Sync {
    fn render(
        &self,
        archive: &mut NotebookArchive,
        sink: &mut dyn Write,
        options: &RenderOptions,
    ) -> Result<(), BoxError>;
}
