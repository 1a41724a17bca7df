use std::fmt::Display;

use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

/// Placement transformation, decomposed into a rotation about the bounding-box centre of the
/// original outline followed by a translation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy, Serialize, Deserialize)]
pub struct DTransformation {
    /// The rotation in degrees
    pub rotation: NotNan<f64>,
    /// The translation in the x and y-axis
    pub translation: (NotNan<f64>, NotNan<f64>),
}

impl DTransformation {
    pub fn new(rotation: f64, translation: (f64, f64)) -> Self {
        Self {
            rotation: NotNan::new(rotation).expect("rotation is NaN"),
            translation: (
                NotNan::new(translation.0).expect("translation.0 is NaN"),
                NotNan::new(translation.1).expect("translation.1 is NaN"),
            ),
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation.into()
    }

    pub fn translation(&self) -> (f64, f64) {
        (self.translation.0.into(), self.translation.1.into())
    }
}

impl Display for DTransformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "r: {:.3}°, t: ({:.3}, {:.3})",
            self.rotation.into_inner(),
            self.translation.0.into_inner(),
            self.translation.1.into_inner()
        )
    }
}
