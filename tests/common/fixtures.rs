#![allow(dead_code)]

use inkpress::scene::PREAMBLE_LEN;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::FileOptions;

/// One sampled pen position as stored on the device: x from the left page
/// edge, y from the top edge.
#[derive(Debug, Clone, Copy)]
pub struct RawPoint {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub pressure: f32,
}

pub fn pt(x: f32, y: f32, width: f32) -> RawPoint {
    RawPoint {
        x,
        y,
        width,
        pressure: 0.0,
    }
}

/// The 43-byte header every page record starts with.
pub fn preamble() -> Vec<u8> {
    let mut header = b"reMarkable .lines file, version=5".to_vec();
    header.resize(PREAMBLE_LEN, b' ');
    header
}

/// Encodes layers of strokes into a version 5 page record.
pub fn lines_record(layers: &[Vec<Vec<RawPoint>>]) -> Vec<u8> {
    let mut record = preamble();
    push_i32(&mut record, layers.len() as i32);
    for layer in layers {
        push_i32(&mut record, layer.len() as i32);
        for stroke in layer {
            push_i32(&mut record, 2); // tool
            push_i32(&mut record, 0); // color
            push_i32(&mut record, 0);
            push_f32(&mut record, 2.0); // base size
            push_i32(&mut record, 0);
            push_i32(&mut record, stroke.len() as i32);
            for point in stroke {
                push_f32(&mut record, point.x);
                push_f32(&mut record, point.y);
                push_f32(&mut record, 0.0); // speed
                push_f32(&mut record, 0.0); // direction
                push_f32(&mut record, point.width);
                push_f32(&mut record, point.pressure);
            }
        }
    }
    record
}

/// A single layer holding the given strokes.
pub fn single_layer_record(strokes: Vec<Vec<RawPoint>>) -> Vec<u8> {
    lines_record(&[strokes])
}

/// A record whose layer count claims far more data than is present.
pub fn implausible_record() -> Vec<u8> {
    let mut record = preamble();
    push_i32(&mut record, 1_000_000);
    record
}

/// A record of `segments` horizontal segments on one stroke.
pub fn stroke_with_segments(segments: usize) -> Vec<RawPoint> {
    (0..=segments)
        .map(|i| pt(100.0 + i as f32 * 10.0, 200.0, 2.0))
        .collect()
}

fn push_i32(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn push_f32(buf: &mut Vec<u8>, value: f32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// A notebook archive written to a temporary directory.
pub struct NotebookFixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl NotebookFixture {
    /// A path inside the fixture directory for outputs.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Writes a notebook whose manifest lists `pages` in order. Pages with
/// `None` data get no record, which makes them blank.
pub fn notebook_with_manifest(pages: &[(&str, Option<Vec<u8>>)]) -> NotebookFixture {
    let ids: Vec<&str> = pages.iter().map(|(id, _)| *id).collect();
    let manifest = serde_json::json!({ "fileType": "notebook", "pages": ids });
    write_notebook(Some(manifest.to_string()), pages)
}

/// Writes a notebook without a `.content` manifest.
pub fn notebook_without_manifest(pages: &[(&str, Option<Vec<u8>>)]) -> NotebookFixture {
    write_notebook(None, pages)
}

fn write_notebook(manifest: Option<String>, pages: &[(&str, Option<Vec<u8>>)]) -> NotebookFixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("notebook.zip");
    let file = File::create(&path).expect("create notebook file");
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default();

    if let Some(manifest) = manifest {
        zip.start_file("doc.content", options).expect("start manifest");
        zip.write_all(manifest.as_bytes()).expect("write manifest");
    }
    for (id, data) in pages {
        if let Some(data) = data {
            zip.start_file(format!("doc/{}.rm", id), options)
                .expect("start page");
            zip.write_all(data).expect("write page");
        }
    }
    zip.finish().expect("finish notebook");

    NotebookFixture { dir, path }
}
