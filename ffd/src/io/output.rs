use crate::config::FFDConfig;
use serde::{Deserialize, Serialize};
use sheet_nest::io::ext_repr::ExtSolution;

#[derive(Serialize, Deserialize, Clone)]
pub struct FFDOutput {
    /// Name of the drawing the outlines were read from
    pub input: String,
    #[serde(flatten)]
    pub solution: ExtSolution,
    pub config: FFDConfig,
}
