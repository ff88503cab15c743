//! Page record ingestion.
//!
//! A raw page record is a fixed-length preamble followed by an encoded
//! scene body. The preamble is skipped without inspection; the body is
//! handed to a [`SceneDecoder`].

mod lines;

pub use lines::LinesDecoder;

use crate::container::ContainerError;
use crate::error::{BoxError, ExportError};
use inkpress_types::Scene;
use log::debug;
use std::io::Read;
use thiserror::Error;

/// Length of the page record preamble, in bytes.
pub const PREAMBLE_LEN: usize = 0x2b;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unexpected end of scene body at offset {offset}: {needed} more bytes needed")]
    UnexpectedEof { offset: usize, needed: usize },

    #[error("implausible {what} count {count} at offset {offset}")]
    ImplausibleCount {
        what: &'static str,
        count: i64,
        offset: usize,
    },

    #[error("{0}")]
    Custom(#[source] BoxError),
}

/// Turns a scene body (the bytes after the preamble) into layered strokes.
pub trait SceneDecoder: Send + Sync {
    fn decode(&self, body: &[u8]) -> Result<Scene, DecodeError>;
}

impl<F> SceneDecoder for F
where
    F: Fn(&[u8]) -> Result<Scene, DecodeError> + Send + Sync,
{
    fn decode(&self, body: &[u8]) -> Result<Scene, DecodeError> {
        self(body)
    }
}

/// Strips the preamble from `raw` and decodes the remainder.
pub fn ingest(raw: &[u8], decoder: &dyn SceneDecoder) -> Result<Scene, ExportError> {
    if raw.len() < PREAMBLE_LEN {
        return Err(ExportError::TruncatedInput {
            expected: PREAMBLE_LEN,
            actual: raw.len(),
        });
    }

    let scene = decoder.decode(&raw[PREAMBLE_LEN..])?;
    debug!(
        "Decoded scene: {} layers, {} lines, {} segments.",
        scene.layers.len(),
        scene.line_count(),
        scene.segment_count()
    );
    Ok(scene)
}

/// Reads one whole page record from `reader`, then ingests it.
///
/// Read failures are not retried: a closed or failing source surfaces as
/// `InputUnavailable` on the first error.
pub fn ingest_reader<R: Read + ?Sized>(
    reader: &mut R,
    decoder: &dyn SceneDecoder,
) -> Result<Scene, ExportError> {
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|e| ExportError::InputUnavailable(ContainerError::Io(e)))?;
    ingest(&raw, decoder)
}
