//! Notebook container access.
//!
//! A notebook is a zip archive holding a `<doc>.content` JSON manifest and
//! one `<doc>/<page-id>.rm` record per page that has ink. The manifest
//! decides page order; pages it lists without a record are blank.

use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;
use thiserror::Error;
use zip::ZipArchive;

/// A helper trait for creating a `Box<dyn ...>` that requires multiple non-auto traits.
pub trait ReadSeekSend: Read + Seek + Send {}
impl<T: Read + Seek + Send> ReadSeekSend for T {}

const MANIFEST_SUFFIX: &str = ".content";
const PAGE_SUFFIX: &str = ".rm";

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Manifest '{name}' is not valid: {source}")]
    Manifest {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Page index {index} is out of range: the notebook has {count} pages")]
    PageOutOfRange { index: usize, count: usize },

    #[error("Page '{id}' has no stroke record")]
    MissingPageData { id: String },
}

/// One page of a notebook, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub id: String,
    /// Archive path of the page record; `None` for a blank page.
    pub path: Option<String>,
}

impl PageEntry {
    pub fn is_blank(&self) -> bool {
        self.path.is_none()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ContentManifest {
    pages: Vec<String>,
    c_pages: Option<ManifestPages>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ManifestPages {
    pages: Vec<ManifestPage>,
}

#[derive(Debug, Deserialize)]
struct ManifestPage {
    id: String,
    #[serde(default)]
    deleted: Option<serde_json::Value>,
}

impl ContentManifest {
    fn page_ids(self) -> Vec<String> {
        match self.c_pages {
            Some(c_pages) if !c_pages.pages.is_empty() => c_pages
                .pages
                .into_iter()
                .filter(|page| page.deleted.is_none())
                .map(|page| page.id)
                .collect(),
            _ => self.pages,
        }
    }
}

/// Read access to the pages of a zipped notebook.
pub struct NotebookArchive {
    archive: ZipArchive<Box<dyn ReadSeekSend>>,
    pages: Vec<PageEntry>,
}

impl NotebookArchive {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ContainerError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ContainerError::Io(io::Error::new(
                e.kind(),
                format!("Failed to open notebook '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R>(reader: R) -> Result<Self, ContainerError>
    where
        R: Read + Seek + Send + 'static,
    {
        let boxed: Box<dyn ReadSeekSend> = Box::new(reader);
        let mut archive = ZipArchive::new(boxed)?;
        let pages = index_pages(&mut archive)?;
        debug!("Indexed notebook with {} pages.", pages.len());
        Ok(Self { archive, pages })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Result<&PageEntry, ContainerError> {
        self.pages.get(index).ok_or(ContainerError::PageOutOfRange {
            index,
            count: self.pages.len(),
        })
    }

    /// Streams the raw record of page `index`.
    pub fn page_reader(&mut self, index: usize) -> Result<impl Read + '_, ContainerError> {
        let entry = self.page(index)?;
        let path = entry.path.clone().ok_or_else(|| ContainerError::MissingPageData {
            id: entry.id.clone(),
        })?;
        Ok(self.archive.by_name(&path)?)
    }

    /// Reads the raw record of page `index` into memory.
    pub fn page_bytes(&mut self, index: usize) -> Result<Vec<u8>, ContainerError> {
        let mut reader = self.page_reader(index)?;
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        Ok(raw)
    }
}

fn index_pages(
    archive: &mut ZipArchive<Box<dyn ReadSeekSend>>,
) -> Result<Vec<PageEntry>, ContainerError> {
    let names: Vec<String> = archive.file_names().map(str::to_owned).collect();

    let mut records: Vec<(String, String)> = names
        .iter()
        .filter(|name| name.ends_with(PAGE_SUFFIX))
        .filter_map(|name| {
            let stem = Path::new(name).file_stem()?.to_str()?;
            Some((stem.to_owned(), name.clone()))
        })
        .collect();
    records.sort_by(|a, b| a.1.cmp(&b.1));

    let manifest_name = names.iter().find(|name| name.ends_with(MANIFEST_SUFFIX));
    let manifest_ids = match manifest_name {
        Some(name) => {
            let mut json = String::new();
            archive.by_name(name)?.read_to_string(&mut json)?;
            let manifest: ContentManifest =
                serde_json::from_str(&json).map_err(|source| ContainerError::Manifest {
                    name: name.clone(),
                    source,
                })?;
            manifest.page_ids()
        }
        None => Vec::new(),
    };

    if manifest_ids.is_empty() {
        if manifest_name.is_some() && !records.is_empty() {
            warn!("Notebook manifest lists no pages; falling back to record name order.");
        }
        return Ok(records
            .into_iter()
            .map(|(id, path)| PageEntry {
                id,
                path: Some(path),
            })
            .collect());
    }

    let by_id: HashMap<String, String> = records.into_iter().collect();
    Ok(manifest_ids
        .into_iter()
        .map(|id| {
            let path = by_id.get(&id).cloned();
            PageEntry { id, path }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;

    fn notebook(entries: &[(&str, &[u8])]) -> NotebookArchive {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            zip.start_file(*name, FileOptions::default()).unwrap();
            zip.write_all(data).unwrap();
        }
        let cursor = zip.finish().unwrap();
        NotebookArchive::from_reader(Cursor::new(cursor.into_inner())).unwrap()
    }

    #[test]
    fn manifest_pages_decide_order_and_blanks() {
        let mut archive = notebook(&[
            ("doc.content", br#"{"pages": ["b", "missing", "a"]}"#),
            ("doc/a.rm", b"AAAA"),
            ("doc/b.rm", b"BBBB"),
        ]);
        let ids: Vec<_> = archive.pages().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "missing", "a"]);
        assert!(archive.pages()[1].is_blank());
        assert_eq!(archive.page_bytes(0).unwrap(), b"BBBB");
        assert!(matches!(
            archive.page_bytes(1),
            Err(ContainerError::MissingPageData { .. })
        ));
    }

    #[test]
    fn c_pages_skip_deleted_entries() {
        let archive = notebook(&[
            (
                "doc.content",
                br#"{"cPages": {"pages": [{"id": "x"}, {"id": "y", "deleted": {"value": 1}}, {"id": "z"}]}}"#,
            ),
            ("doc/x.rm", b""),
            ("doc/z.rm", b""),
        ]);
        let ids: Vec<_> = archive.pages().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "z"]);
    }

    #[test]
    fn without_manifest_records_are_sorted_by_name() {
        let archive = notebook(&[("doc/2.rm", b""), ("doc/1.rm", b""), ("doc/1-metadata.json", b"{}")]);
        let ids: Vec<_> = archive.pages().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn out_of_range_page_is_reported() {
        let mut archive = notebook(&[("doc/1.rm", b"")]);
        assert!(matches!(
            archive.page_bytes(3),
            Err(ContainerError::PageOutOfRange { index: 3, count: 1 })
        ));
    }

    #[test]
    fn invalid_manifest_is_an_error() {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("doc.content", FileOptions::default()).unwrap();
        zip.write_all(b"{not json").unwrap();
        let bytes = zip.finish().unwrap().into_inner();
        let err = NotebookArchive::from_reader(Cursor::new(bytes)).err().unwrap();
        assert!(matches!(err, ContainerError::Manifest { .. }));
    }

    #[test]
    fn not_a_zip_is_an_error() {
        let err = NotebookArchive::from_reader(Cursor::new(b"plain bytes".to_vec()))
            .err()
            .unwrap();
        assert!(matches!(err, ContainerError::Zip(_)));
    }
}
