#![allow(dead_code)]

use lopdf::Document as LopdfDocument;
use lopdf::content::Operation;

/// One stroked `m`/`l`/`S` path, in PDF user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub width: Option<f32>,
}

/// Decoded content-stream operations of page `page_num` (1-based).
pub fn page_operations(doc: &LopdfDocument, page_num: u32) -> Vec<Operation> {
    let pages = doc.get_pages();
    let page_id = pages
        .get(&page_num)
        .unwrap_or_else(|| panic!("PDF has no page {}", page_num));
    doc.get_and_decode_page_content(*page_id)
        .expect("decode page content")
        .operations
}

/// Operator names of a page, in order.
pub fn page_operators(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    page_operations(doc, page_num)
        .into_iter()
        .map(|op| op.operator)
        .collect()
}

/// Reconstructs the stroked segments of a page, with the line width in
/// effect when each was drawn.
pub fn stroked_segments(doc: &LopdfDocument, page_num: u32) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut width = None;
    let mut start = None;
    for op in page_operations(doc, page_num) {
        let coords = || -> (f32, f32) {
            (
                op.operands[0].as_float().expect("numeric x"),
                op.operands[1].as_float().expect("numeric y"),
            )
        };
        match op.operator.as_str() {
            "w" => width = Some(op.operands[0].as_float().expect("numeric width")),
            "m" => start = Some(coords()),
            "l" => {
                let from = start.expect("lineto without moveto");
                let to = coords();
                segments.push(Segment { from, to, width });
                start = Some(to);
            }
            _ => {}
        }
    }
    segments
}

/// Asserts two coordinates agree to within float noise.
pub fn assert_point_eq(actual: (f32, f32), expected: (f32, f32)) {
    assert!(
        (actual.0 - expected.0).abs() < 1e-3 && (actual.1 - expected.1).abs() < 1e-3,
        "expected point {:?}, got {:?}",
        expected,
        actual
    );
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert the number of stroked segments on one page (1-based)
#[macro_export]
macro_rules! assert_page_segment_count {
    ($pdf:expr, $page:expr, $count:expr) => {
        let segments = $crate::common::pdf_assertions::stroked_segments(&$pdf.doc, $page);
        assert_eq!(
            segments.len(),
            $count,
            "Expected {} segments on page {}, got {:?}",
            $count,
            $page,
            segments
        );
    };
}
