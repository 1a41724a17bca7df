use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Rect;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Fixed rectangular sheet with its origin at (0, 0). Placed outlines must lie within `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    width: f64,
    height: f64,
}

impl Sheet {
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        ensure!(
            width.is_finite() && width > 0.0,
            "sheet width must be positive and finite, got {width}"
        );
        ensure!(
            height.is_finite() && height > 0.0,
            "sheet height must be positive and finite, got {height}"
        );
        Ok(Sheet { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }

    pub fn area(&self) -> f64 {
        self.bbox().area()
    }
}
