use crate::EPOCH;
use anyhow::{Context, Result, bail};
use log::{LevelFilter, info};
use serde::Serialize;
use sheet_nest::entities::{Instance, NestSolution};
use sheet_nest::io::dxf::Dxf;
use sheet_nest::io::import;
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::LazyLock;
use svg::Document;

pub mod cli;
pub mod output;

pub fn read_dxf_instance(path: &Path) -> Result<Instance> {
    let dxf = Dxf::parse_file(path)?;
    let instance = import::import_instance(&dxf)
        .with_context(|| format!("could not import drawing: {}", path.display()))?;
    Ok(instance)
}

/// Fails if the run left any item unplaced, either because no feasible position exists or because it was cancelled
pub fn reject_partial(solution: &NestSolution) -> Result<()> {
    if !solution.unplaced.is_empty() {
        let n_items = solution.placed_outlines().len() + solution.unplaced.len();
        bail!(
            "{} of {} outlines could not be placed: {:?}",
            solution.unplaced.len(),
            n_items,
            solution.unplaced
        );
    }
    Ok(())
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("Solution JSON written to file://{}", canonical(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("Solution SVG written to file://{}", canonical(path)?);
    Ok(())
}

pub fn write_dxf(dxf: &Dxf, path: &Path) -> Result<()> {
    fs::write(path, dxf.to_dxf_string())
        .with_context(|| format!("could not write dxf file: {}", path.display()))?;
    info!("Nested DXF written to file://{}", canonical(path)?);
    Ok(())
}

fn canonical(path: &Path) -> Result<String> {
    let path = fs::canonicalize(path)
        .with_context(|| format!("could not canonicalize path: {}", path.display()))?;
    Ok(path.to_string_lossy().into_owned())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    LazyLock::force(&EPOCH);
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<25}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("Epoch: {}", jiff::Timestamp::now());
    Ok(())
}
