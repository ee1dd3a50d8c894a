use std::{path::Path, time::Duration};

use crate::{
    bin_common::args::blur::BlurArgs,
    imghash::sharpness,
    utils::{
        fsutils::{self, Existing},
        time::{timed, Every},
    },
};

use super::{frame::Frame, FilterResult, PreprocError, Result, BLUR_STAGE};

/// Copies the frames that are sharp enough into `dest`, keeping their order. Frames that
/// can't be decoded are skipped and not counted as blurry.
pub fn filter_blurry(frames: &[Frame], dest: &Path, args: &BlurArgs) -> Result<FilterResult> {
    let (res, timing) = timed(BLUR_STAGE, || filter(frames, dest, args));
    let (survivors, removed) = res?;
    Ok(FilterResult {
        survivors,
        removed,
        timing,
    })
}

fn filter(frames: &[Frame], dest: &Path, args: &BlurArgs) -> Result<(Vec<Frame>, usize)> {
    log::info!(
        "Starting blur detection on {} frames with threshold {}",
        frames.len(),
        args.threshold()
    );

    let mut sharp = Vec::new();
    let mut blurry = 0;
    let mut progress = Every::new(Duration::from_secs(10));

    for (i, frame) in frames.iter().enumerate() {
        progress.perform(|| log::info!("Blur progress: {}/{} frames", i, frames.len()));

        let score = match sharpness::sharpness_from_path(frame.path()) {
            Ok(score) => score,
            Err(e) => {
                log::warn!("Unreadable frame {}: {}", frame.path().display(), e.source);
                continue;
            }
        };

        if args.is_sharp(score) {
            let copy = fsutils::copy_into(frame.path(), dest, Existing::Overwrite)
                .map_err(|source| PreprocError::Copy {
                    frame: frame.path().to_owned(),
                    dir: dest.to_owned(),
                    source,
                })?;
            sharp.push(frame.moved_to(copy));
        } else {
            log::debug!("Skipping blurry frame: {frame} (score={score})");
            blurry += 1;
        }
    }

    log::info!(
        "Blur detection complete: {} sharp frames kept, {} blurry frames removed",
        sharp.len(),
        blurry
    );
    Ok((sharp, blurry))
}
