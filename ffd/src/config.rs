use crate::io::cli::Cli;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use sheet_nest::collision_detection::OverlapMode;
use sheet_nest::entities::Sheet;
use sheet_nest::io::svg::SvgDrawOptions;

/// Configuration for the FFD optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct FFDConfig {
    pub sheet_width: f64,
    pub sheet_height: f64,
    /// Degrees between two consecutive candidate rotations
    pub rotation_step: f64,
    /// Distance between two consecutive candidate positions, along both axes
    pub translation_step: f64,
    /// How candidates are checked against the outlines already placed
    pub overlap_test: OverlapMode,
    /// Optional SVG drawing options
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for FFDConfig {
    fn default() -> Self {
        Self {
            sheet_width: 1000.0,
            sheet_height: 1000.0,
            rotation_step: 1.0,
            translation_step: 10.0,
            overlap_test: OverlapMode::BBox,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

impl FFDConfig {
    pub fn validate(&self) -> Result<()> {
        self.sheet()?;
        ensure!(
            self.rotation_step.is_finite() && self.rotation_step > 0.0 && self.rotation_step <= 360.0,
            "rotation step must be in (0, 360], got {}",
            self.rotation_step
        );
        ensure!(
            self.translation_step.is_finite() && self.translation_step > 0.0,
            "translation step must be positive and finite, got {}",
            self.translation_step
        );
        Ok(())
    }

    /// Command line arguments take precedence over the values of the config file
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(width) = cli.sheet_width {
            self.sheet_width = width;
        }
        if let Some(height) = cli.sheet_height {
            self.sheet_height = height;
        }
        if let Some(step) = cli.rotation_step {
            self.rotation_step = step;
        }
        if let Some(step) = cli.translation_step {
            self.translation_step = step;
        }
    }

    pub fn sheet(&self) -> Result<Sheet> {
        Sheet::try_new(self.sheet_width, self.sheet_height)
    }
}
