//! Uniform handles over finished exports.
//!
//! The full-document path produces a file and the custom path produces an
//! in-memory buffer; both are handed to callers as a [`ReadSeekClose`].

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// A readable, seekable result that the caller releases with `close`.
pub trait ReadSeekClose: Read + Seek {
    /// Releases the underlying resource. Calling it again is a no-op.
    fn close(&mut self) -> io::Result<()>;
}

/// An in-memory document whose `close` does nothing.
#[derive(Debug, Clone)]
pub struct SeekCloser {
    inner: Cursor<Vec<u8>>,
}

impl SeekCloser {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.get_ref().is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.get_ref()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

impl Read for SeekCloser {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Seek for SeekCloser {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

impl ReadSeekClose for SeekCloser {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A file-backed document. `close` releases the handle; any later read or
/// seek fails instead of blocking.
#[derive(Debug)]
pub struct FileOutput {
    file: Option<File>,
    path: Option<PathBuf>,
}

impl FileOutput {
    pub(crate) fn new(file: File, path: Option<PathBuf>) -> Self {
        Self {
            file: Some(file),
            path,
        }
    }

    /// Path of the backing file; `None` for anonymous temp files.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.file.is_none()
    }

    fn file_mut(&mut self) -> io::Result<&mut File> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "output already closed"))
    }
}

impl Read for FileOutput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file_mut()?.read(buf)
    }
}

impl Seek for FileOutput {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file_mut()?.seek(pos)
    }
}

impl ReadSeekClose for FileOutput {
    fn close(&mut self) -> io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_closer_reads_from_start_and_closes_repeatedly() {
        let mut stream = SeekCloser::new(b"%PDF-1.7".to_vec());
        assert_eq!(stream.stream_position().unwrap(), 0);

        let mut out = String::new();
        stream.read_to_string(&mut out).unwrap();
        assert_eq!(out, "%PDF-1.7");

        stream.close().unwrap();
        stream.close().unwrap();
        stream.seek(SeekFrom::Start(5)).unwrap();
        let mut tail = String::new();
        stream.read_to_string(&mut tail).unwrap();
        assert_eq!(tail, "1.7");
    }

    #[test]
    fn file_output_fails_after_close() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"data").unwrap();
        file.rewind().unwrap();
        let mut output = FileOutput::new(file, None);

        let mut buf = [0u8; 4];
        output.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"data");

        output.close().unwrap();
        output.close().unwrap();
        assert!(output.is_closed());
        let err = output.read(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
    }
}
