//! Export handwritten tablet notebooks to PDF.
//!
//! A notebook is a zip container of per-page stroke records. Pages are
//! decoded into layered scenes, composed onto a vector canvas and finalized
//! as a seekable, closable byte stream. Two strategies exist: the
//! full-document renderer for whole notebooks, and a minimal single-page
//! path built on the stroke composer.

pub mod compose;
pub mod container;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod scene;

pub use compose::{PageTransform, StrokeComposer, StrokeStyle, WidthScaling};
pub use container::{ContainerError, NotebookArchive, PageEntry};
pub use error::{BoxError, ExportError};
pub use output::{FileOutput, ReadSeekClose, SeekCloser};
pub use pipeline::{
    ExportConfig, ExporterBuilder, FullDocumentRenderer, NotebookRenderer, RenderOptions,
    RenderOrchestrator, RenderStage, SinglePageRender, Strategy,
};
pub use scene::{DecodeError, LinesDecoder, SceneDecoder, ingest, ingest_reader};

pub use inkpress_render_core as render_core;
pub use inkpress_render_lopdf as render_lopdf;
pub use inkpress_types as types;
