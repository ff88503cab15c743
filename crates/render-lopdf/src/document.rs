use crate::content::encode_page_content;
use inkpress_render_core::{CanvasError, PageContent};
use inkpress_types::Size;
use log::debug;
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::io::Write;

#[cfg(feature = "parallel-render")]
use rayon::prelude::*;

pub const PDF_VERSION: &str = "1.7";

/// Builds a PDF document in memory from recorded pages, then writes it out.
pub struct PdfDocumentBuilder {
    document: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl Default for PdfDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocumentBuilder {
    pub fn new() -> Self {
        let mut document = Document::with_version(PDF_VERSION);
        let pages_id = document.new_object_id();
        Self {
            document,
            pages_id,
            page_ids: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Appends one page after all previously added pages.
    pub fn add_page(&mut self, page: &PageContent) -> Result<ObjectId, CanvasError> {
        let stream = encode_page_content(page)?;
        Ok(self.insert_page(page.size, stream))
    }

    /// Appends pages in slice order. With `parallel-render` the content
    /// streams are encoded concurrently; page order is unaffected.
    pub fn add_pages(&mut self, pages: &[PageContent]) -> Result<(), CanvasError> {
        #[cfg(feature = "parallel-render")]
        let encoded: Vec<Result<Vec<u8>, CanvasError>> =
            pages.par_iter().map(encode_page_content).collect();
        #[cfg(not(feature = "parallel-render"))]
        let encoded: Vec<Result<Vec<u8>, CanvasError>> =
            pages.iter().map(encode_page_content).collect();

        for (page, stream) in pages.iter().zip(encoded) {
            self.insert_page(page.size, stream?);
        }
        Ok(())
    }

    fn insert_page(&mut self, size: Size, compressed_content: Vec<u8>) -> ObjectId {
        let content_stream =
            Stream::new(dictionary! {"Filter" => "FlateDecode"}, compressed_content);
        let content_id = self.document.add_object(content_stream);

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), size.width.into(), size.height.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {},
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        debug!("Added PDF page #{} ({}x{} pt).", self.page_ids.len(), size.width, size.height);
        page_id
    }

    /// Writes the finished document to `writer`.
    pub fn save_to(mut self, mut writer: &mut dyn Write) -> Result<(), CanvasError> {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);

        self.document.save_to(&mut writer)?;
        Ok(())
    }

    /// Convenience for callers that want the finished bytes in memory.
    pub fn finish_into_buffer(self) -> Result<Vec<u8>, CanvasError> {
        let mut buffer = Vec::new();
        self.save_to(&mut buffer)?;
        Ok(buffer)
    }
}
