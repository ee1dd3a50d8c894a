use std::path::{Path, PathBuf};

use crate::{
    bin_common::args::preproc::PreprocArgs,
    utils::{fsutils, time::StageTiming},
};

use super::{
    blur, dedup, frame::Frame, FilterResult, PreprocError, Result, CLEANED_DIR, DEDUPED_DIR,
};

/// The bookkeeping of one executed stage
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageSummary {
    pub kept: usize,
    pub removed: usize,
    pub dir: PathBuf,
    pub timing: StageTiming,
}

impl StageSummary {
    fn new(res: &FilterResult, dir: &Path) -> Self {
        Self {
            kept: res.survivors.len(),
            removed: res.removed,
            dir: dir.to_owned(),
            timing: res.timing.clone(),
        }
    }
}

/// The outcome of a whole preprocessing run, everything the report needs.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreprocessingSession {
    pub input_dir: PathBuf,
    pub input_frames: usize,
    pub blur: Option<StageSummary>,
    pub dedup: Option<StageSummary>,
    /// Where the frames that survived every enabled stage are
    pub final_dir: PathBuf,
    pub final_frames: usize,
}

impl PreprocessingSession {
    /// Number of blurry frames removed
    pub fn cleaned(&self) -> usize {
        self.blur.as_ref().map_or(0, |stage| stage.removed)
    }

    /// Number of duplicate frames removed
    pub fn deduped(&self) -> usize {
        self.dedup.as_ref().map_or(0, |stage| stage.removed)
    }

    /// Stage name to seconds, for the stages that actually ran, in execution order
    pub fn timings(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.blur
            .iter()
            .chain(self.dedup.iter())
            .map(|stage| (stage.timing.label.as_str(), stage.timing.seconds()))
    }
}

pub struct Preprocessor {
    args: PreprocArgs,
}

impl Preprocessor {
    pub fn new(args: PreprocArgs) -> Self {
        Self { args }
    }

    pub fn args(&self) -> &PreprocArgs {
        &self.args
    }

    /// Runs the enabled stages on the frames in `input_dir`, writing the results into
    /// subdirectories of `output_dir`. If no stage is enabled, the frames are left where
    /// they are and `input_dir` is the final directory.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<PreprocessingSession> {
        if self.args.is_dedup_enabled() {
            self.args.dedup_conf().validate()?;
        }

        let frames: Vec<Frame> =
            fsutils::list_images(input_dir, self.args.source_conf().extensions())
                .map_err(|source| PreprocError::ReadDir {
                    dir: input_dir.to_owned(),
                    source,
                })?
                .into_iter()
                .map(Frame::new)
                .collect();
        let input_frames = frames.len();
        log::info!("Found {input_frames} frames in {}", input_dir.display());

        let mut current_dir = input_dir.to_owned();
        let mut current = frames;

        let blur = if self.args.is_blur_enabled() {
            log::info!("Removing blurry frames...");
            let dir = stage_dir(output_dir, CLEANED_DIR)?;
            let res = blur::filter_blurry(&current, &dir, self.args.blur_conf())?;
            let summary = StageSummary::new(&res, &dir);
            current = res.survivors;
            current_dir = dir;
            Some(summary)
        } else {
            None
        };

        let dedup = if self.args.is_dedup_enabled() {
            log::info!("Deduplicating frames...");
            let dir = stage_dir(output_dir, DEDUPED_DIR)?;
            let res = dedup::deduplicate(&current, &dir, self.args.dedup_conf())?;
            let summary = StageSummary::new(&res, &dir);
            current = res.survivors;
            current_dir = dir;
            Some(summary)
        } else {
            None
        };

        let session = PreprocessingSession {
            input_dir: input_dir.to_owned(),
            input_frames,
            blur,
            dedup,
            final_dir: current_dir,
            final_frames: current.len(),
        };
        log::info!(
            "Preprocessing complete: {} blurry frames removed, {} duplicate frames removed, \
             {} frames left in {}",
            session.cleaned(),
            session.deduped(),
            session.final_frames,
            session.final_dir.display()
        );
        Ok(session)
    }
}

fn stage_dir(output_dir: &Path, name: &str) -> Result<PathBuf> {
    let dir = output_dir.join(name);
    fsutils::ensure_dir(&dir).map_err(|source| PreprocError::CreateDir {
        dir: dir.clone(),
        source,
    })?;
    Ok(dir)
}
