use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{self, Context};
use framesift_common::{
    bin_common::{args::blur::BlurCli, init::init_eyre},
    imghash::sharpness::sharpness_from_path,
};

#[derive(Parser)]
#[command()]
/// Calculates how sharp pictures are, and whether they would be filtered out as blurry
struct Cli {
    #[command(flatten)]
    blur_args: BlurCli,

    /// The image files to use
    inputs: Vec<PathBuf>,
}

fn main() -> eyre::Result<()> {
    init_eyre()?;
    let cli = Cli::parse();
    let blur_args = cli.blur_args.to_args();

    for input in cli.inputs {
        let score = sharpness_from_path(&input)
            .wrap_err_with(|| format!("Could not open {:?}", input))?;
        let is_blurry = blur_args.is_blurry(score);

        let input = input.display();
        println!("{input}: sharpness={score}(blurry={is_blurry})");
    }

    Ok(())
}
