//! pageprof - text-line layout analysis over ASCII grid files
//!
//! Reads a binarized document grid, runs the projection-profile
//! pipeline, and writes two files: the box-annotated grid, and the
//! stage artifacts (profiles, thresholded and closed forms, reading
//! direction, extracted boxes).

use clap::Parser;
use pageprof_core::Grid;
use pageprof_io::{
    IoError, read_grid, write_box_listing, write_direction, write_grid_pretty,
    write_profile_listing,
};
use pageprof_layout::{DIRECTION_RUN_FACTOR, LayoutAnalysis, LayoutError, analyze};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Structural layout analysis on a binarized document-image grid.
#[derive(Parser, Debug)]
#[command(name = "pageprof")]
#[command(author, version, about)]
struct Args {
    /// Input grid file: a `rows cols min max` header, then row-major
    /// cell values
    input: PathBuf,

    /// Threshold for profile binarization
    threshold: u32,

    /// Output path for the box-annotated grid
    output: PathBuf,

    /// Output path for the stage-artifact listing
    debug_output: PathBuf,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("I/O error: {0}")]
    File(#[from] std::io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pageprof: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut grid = read_grid(&args.input)?;
    let analysis = analyze(&grid, args.threshold, DIRECTION_RUN_FACTOR)?;

    let mut debug = BufWriter::new(File::create(&args.debug_output)?);
    write_artifacts(&mut debug, &grid, &analysis)?;

    grid.draw_boxes(&analysis.boxes);
    let mut out = BufWriter::new(File::create(&args.output)?);
    write_grid_pretty(&mut out, &grid, "with bounding boxes")?;
    out.flush()?;

    write_box_listing(&mut debug, &analysis.boxes)?;
    debug.flush()?;
    Ok(())
}

fn write_artifacts(
    w: &mut impl Write,
    grid: &Grid,
    analysis: &LayoutAnalysis,
) -> Result<(), CliError> {
    write_profile_listing(w, grid, analysis.hpp.values(), analysis.hpp.extrema(), "HPP")?;
    write_profile_listing(w, grid, analysis.vpp.values(), analysis.vpp.extrema(), "VPP")?;
    write_profile_listing(
        w,
        grid,
        analysis.hpp_bin.values(),
        analysis.hpp_bin.extrema(),
        "HPPbin",
    )?;
    write_profile_listing(
        w,
        grid,
        analysis.vpp_bin.values(),
        analysis.vpp_bin.extrema(),
        "VPPbin",
    )?;
    write_profile_listing(
        w,
        grid,
        analysis.hpp_closed.values(),
        analysis.hpp_closed.extrema(),
        "HPPmorph",
    )?;
    write_profile_listing(
        w,
        grid,
        analysis.vpp_closed.values(),
        analysis.vpp_closed.extrema(),
        "VPPmorph",
    )?;
    write_direction(w, &analysis.direction)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_positional() {
        let args =
            Args::try_parse_from(["pageprof", "page.grid", "2", "out.txt", "debug.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("page.grid"));
        assert_eq!(args.threshold, 2);
        assert_eq!(args.output, PathBuf::from("out.txt"));
        assert_eq!(args.debug_output, PathBuf::from("debug.txt"));
    }

    #[test]
    fn test_args_reject_non_numeric_threshold() {
        let result =
            Args::try_parse_from(["pageprof", "page.grid", "high", "out.txt", "debug.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_reject_missing_arguments() {
        assert!(Args::try_parse_from(["pageprof", "page.grid", "2", "out.txt"]).is_err());
    }
}
