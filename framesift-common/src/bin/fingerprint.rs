use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{self, Context};
use framesift_common::bin_common::{args::dedup::DedupCli, init::init_eyre};

#[derive(Parser)]
#[command()]
/// Prints the perceptual fingerprints of pictures. With exactly two pictures, also prints
/// their distance and whether they are duplicates.
struct Cli {
    #[command(flatten)]
    dedup_args: DedupCli,

    /// The image files to use
    inputs: Vec<PathBuf>,
}

fn main() -> eyre::Result<()> {
    init_eyre()?;
    let cli = Cli::parse();
    let dedup_args = cli.dedup_args.to_args();
    let hasher = dedup_args.hasher()?;

    let mut fingerprints = Vec::with_capacity(cli.inputs.len());
    for input in &cli.inputs {
        let fp = hasher
            .hash_from_path(input)
            .wrap_err_with(|| format!("Could not open {:?}", input))?;
        println!("{}: {fp}", input.display());
        fingerprints.push(fp);
    }

    if let [a, b] = fingerprints.as_slice() {
        let dist = a.distance_to(b);
        let dup = dedup_args.is_within(dist);
        println!("distance={dist}(duplicates={dup})");
    }

    Ok(())
}
