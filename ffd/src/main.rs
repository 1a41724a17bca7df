use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ffd::config::FFDConfig;
use ffd::io;
use ffd::io::cli::Cli;
use ffd::io::output::FFDOutput;
use ffd::opt::ffd_optimizer::FFDOptimizer;
use log::{info, warn};
use sheet_nest::io::export;
use sheet_nest::io::svg::layout_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFDConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    config.apply_overrides(&args);
    config.validate().context("invalid configuration")?;

    info!("Successfully parsed FFDConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {}", args.input_file.display()))?;

    let instance = io::read_dxf_instance(&args.input_file)?;
    let solution = FFDOptimizer::new(instance.clone(), config)?.solve();

    if args.reject_partial {
        io::reject_partial(&solution)?;
    }

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    {
        let dxf = export::export_dxf(&solution, &instance);
        let dxf_path = args.solution_folder.join(format!("nested_{input_stem}.dxf"));
        io::write_dxf(&dxf, Path::new(&dxf_path))?;
    }

    {
        let svg = layout_to_svg(
            &solution.layout,
            &instance,
            config.svg_draw_options,
            input_stem,
        );
        let svg_path = args.solution_folder.join(format!("nested_{input_stem}.svg"));
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    {
        let output = FFDOutput {
            input: args.input_file.display().to_string(),
            solution: export::export_solution(&solution, &instance),
            config,
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    Ok(())
}
