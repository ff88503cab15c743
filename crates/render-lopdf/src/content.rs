use flate2::Compression;
use flate2::write::ZlibEncoder;
use inkpress_render_core::utils::flip_y;
use inkpress_render_core::{CanvasError, DrawCommand, PageContent};
use lopdf::Object;
use lopdf::content::{Content, Operation};
use std::io::Write;

/// Translates recorded commands into PDF content-stream operations.
///
/// Each line becomes its own `m`/`l`/`S` path. Width changes are emitted only
/// when the width actually differs from the one currently in effect.
fn build_operations(page: &PageContent) -> Vec<Operation> {
    let height = page.size.height;
    let mut operations = Vec::with_capacity(page.commands.len() * 3);
    let mut active_width: Option<f32> = None;
    let mut pending_width: Option<f32> = None;

    for command in &page.commands {
        match *command {
            DrawCommand::SetLineCap(cap) => {
                operations.push(Operation::new("J", vec![Object::Integer(cap.pdf_value())]));
            }
            DrawCommand::SetLineJoin(join) => {
                operations.push(Operation::new("j", vec![Object::Integer(join.pdf_value())]));
            }
            DrawCommand::SetLineWidth(width) => pending_width = Some(width),
            DrawCommand::Line { from, to } => {
                if let Some(width) = pending_width.take()
                    && active_width != Some(width)
                {
                    operations.push(Operation::new("w", vec![width.into()]));
                    active_width = Some(width);
                }
                operations.push(Operation::new(
                    "m",
                    vec![from.0.into(), flip_y(from.1, height).into()],
                ));
                operations.push(Operation::new(
                    "l",
                    vec![to.0.into(), flip_y(to.1, height).into()],
                ));
                operations.push(Operation::new("S", vec![]));
            }
        }
    }
    operations
}

/// Encodes and Flate-compresses the content stream of one page.
pub fn encode_page_content(page: &PageContent) -> Result<Vec<u8>, CanvasError> {
    let content = Content {
        operations: build_operations(page),
    };
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&content.encode()?)?;
    Ok(encoder.finish()?)
}
