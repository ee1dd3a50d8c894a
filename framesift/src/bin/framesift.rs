use std::{
    ffi::OsString,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use color_eyre::eyre::{self, Context};
use framesift::summary::{self, Summary};
use framesift_common::{
    bin_common::{
        args::preproc::PreprocCli,
        init::{init_eyre, init_logger},
    },
    preprocess::runner::Preprocessor,
    utils::fsutils::{self, read_optional_file},
};

#[derive(Parser, Debug)]
#[command()]
/// Cleans up frames extracted from a timelapse video.
///
/// Blurry frames are moved to `cleaned_frames` and near-duplicates are removed into
/// `deduplicated_frames`, both inside the output directory. The frames in the last of
/// them are what should be annotated.
struct Cli {
    #[command(flatten)]
    preproc_args: PreprocCli,

    /// Folder with the extracted frames
    #[arg(long, short = 'f')]
    frames_dir: PathBuf,

    /// Where to place the preprocessed frames
    #[arg(long, short = 'o')]
    output_dir: PathBuf,

    /// Write a summary of the run for the report to this file. Defaults to a file in the
    /// output directory.
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Don't write a summary file at all
    #[arg(long, conflicts_with = "summary")]
    no_summary: bool,

    /// A file to additionally write the logs to
    #[arg(long)]
    logfile: Option<PathBuf>,

    /// Also print debug logs, e.g., every skipped frame
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn cli_arguments() -> eyre::Result<Cli> {
    const ARGS_FILE: &str = ".framesiftrc";
    let mut args: Vec<OsString> = std::env::args_os().collect();

    if args.len() == 1 {
        if let Some(flags) = read_optional_file(ARGS_FILE)
            .wrap_err_with(|| format!("Could not read config file at: {ARGS_FILE}"))?
        {
            args.extend(
                flags
                    .split_whitespace()
                    .map(|s| std::ffi::OsStr::new(s).to_owned()),
            );
        }
    }

    Ok(Cli::parse_from(args))
}

fn main() -> eyre::Result<()> {
    init_eyre()?;
    let cli = cli_arguments()?;
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    init_logger(cli.logfile.as_deref(), level)?;

    log::debug!("CLI arguments: {cli:#?}");

    fsutils::ensure_dir(&cli.output_dir).wrap_err_with(|| {
        format!(
            "failed to create the output directory at: {}",
            cli.output_dir.display()
        )
    })?;

    let preprocessor = Preprocessor::new(cli.preproc_args.to_args());
    let session = preprocessor
        .run(&cli.frames_dir, &cli.output_dir)
        .wrap_err("preprocessing failed")?;

    let summary = Summary::new(session);
    for line in summary.time_breakdown() {
        log::info!("{line}");
    }

    if !cli.no_summary {
        let path = cli
            .summary
            .unwrap_or_else(|| summary::default_path(&cli.output_dir));
        let file = File::create(&path).wrap_err_with(|| {
            format!("failed to create the summary file at: {}", path.display())
        })?;
        let mut writer = BufWriter::new(file);
        summary::save_to(&mut writer, &summary).wrap_err("failed to write the summary")?;
        writer.flush().wrap_err("failed to write the summary")?;
        log::info!("Summary saved to {}", path.display());
    }

    println!("{}", summary.preprocessing.final_dir.display());

    Ok(())
}
