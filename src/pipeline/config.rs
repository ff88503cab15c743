use crate::compose::{StrokeStyle, WidthScaling};
use crate::error::ExportError;
use inkpress_render_core::CanvasConfig;
use inkpress_types::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Selects how a notebook is turned into a PDF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Every page of the container, through the full-document renderer. (Default)
    #[default]
    FullDocument,
    /// One page record, through the built-in stroke composer.
    CustomSinglePage { page: usize },
}

/// Settings shared by every export an orchestrator performs.
///
/// Absent JSON fields fall back to their defaults, so `{}` is a valid
/// configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    pub page_size: Size,
    pub stroke: StrokeStyle,
    /// Caps the draw commands a single page may record.
    pub max_draw_commands: Option<usize>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            page_size: Size::device(),
            stroke: StrokeStyle::default(),
            max_draw_commands: None,
        }
    }
}

impl ExportConfig {
    pub fn from_json_str(source: &str) -> Result<Self, ExportError> {
        let config: ExportConfig = serde_json::from_str(source)
            .map_err(|e| ExportError::Config(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            ExportError::Config(format!(
                "Failed to read configuration from '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&source)
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        if !self.page_size.is_drawable() {
            return Err(ExportError::Config(format!(
                "Page size must be finite and positive, got {}x{}",
                self.page_size.width, self.page_size.height
            )));
        }
        match self.stroke.width_scaling {
            WidthScaling::Fixed { factor } if !factor.is_finite() || factor < 0.0 => {
                Err(ExportError::Config(format!(
                    "Width scale factor must be finite and non-negative, got {}",
                    factor
                )))
            }
            WidthScaling::Pressure { divisor } if !divisor.is_finite() || divisor <= 0.0 => {
                Err(ExportError::Config(format!(
                    "Pressure divisor must be finite and positive, got {}",
                    divisor
                )))
            }
            _ => Ok(()),
        }
    }

    /// Parameters for a fresh canvas covering one page.
    pub fn canvas_config(&self) -> CanvasConfig {
        let config = CanvasConfig::new(self.page_size);
        match self.max_draw_commands {
            Some(limit) => config.with_max_commands(limit),
            None => config,
        }
    }
}
