use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// DXF drawing containing the outlines to nest
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Overrides the sheet width of the config
    #[arg(long)]
    pub sheet_width: Option<f64>,
    /// Overrides the sheet height of the config
    #[arg(long)]
    pub sheet_height: Option<f64>,
    /// Overrides the rotation step (degrees) of the config
    #[arg(long)]
    pub rotation_step: Option<f64>,
    /// Overrides the translation step of the config
    #[arg(long)]
    pub translation_step: Option<f64>,
    /// Fail without writing any output if an outline cannot be placed
    #[arg(long)]
    pub reject_partial: bool,
}
