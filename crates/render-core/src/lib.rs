//! Core rendering abstractions for notebook export.
//!
//! This crate provides the contract a drawing surface has to satisfy:
//! - `VectorCanvas` trait for line-style state and line-draw commands
//! - `DrawCommand`/`PageContent` as the backend-neutral record of a page
//! - Error types for canvas operations
//! - Coordinate helpers shared by PDF backends

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::CanvasError;
pub use traits::VectorCanvas;
pub use types::{CanvasConfig, DrawCommand, PageContent};
