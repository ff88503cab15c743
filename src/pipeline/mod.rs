//! Export orchestration.
//!
//! - [`ExporterBuilder`]: fluent builder for a [`RenderOrchestrator`]
//! - [`Strategy`]: full-document export or the custom single-page path
//! - [`ExportConfig`]: page geometry and stroke style, loadable from JSON
//!
//! # Example
//!
//! ```ignore
//! use inkpress::{ExporterBuilder, Strategy};
//!
//! let orchestrator = ExporterBuilder::new()
//!     .with_config_file("inkpress.json")?
//!     .build()?;
//!
//! let mut document = orchestrator.export(Strategy::FullDocument, "notes.zip", "notes.pdf")?;
//! document.close()?;
//! ```

mod builder;
pub mod config;
mod orchestrator;
pub mod renderer;

pub use builder::ExporterBuilder;
pub use config::{ExportConfig, Strategy};
pub use orchestrator::RenderOrchestrator;
pub use renderer::{
    FullDocumentRenderer, NotebookRenderer, RenderOptions, RenderStage, SinglePageRender,
};
