//! Blur filtering and near-duplicate removal of extracted frames.
//!
//! Both stages read frames, decide which ones survive and copy the survivors into a
//! directory of their own. The source frames are never modified.

use std::{io, path::PathBuf};

use crate::{imghash::HashSizeError, utils::time::StageTiming};

use self::frame::Frame;

pub mod blur;
pub mod dedup;
pub mod frame;
pub mod runner;

pub const BLUR_STAGE: &str = "blur_detection";
pub const DEDUP_STAGE: &str = "deduplication";

pub const CLEANED_DIR: &str = "cleaned_frames";
pub const DEDUPED_DIR: &str = "deduplicated_frames";

/// Errors that stop a whole run. Problems with single frames are logged and skipped
/// instead.
#[derive(Debug, thiserror::Error)]
pub enum PreprocError {
    #[error("could not read the frame directory {}", .dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not create the output directory {}", .dir.display())]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not copy {} into {}", .frame.display(), .dir.display())]
    Copy {
        frame: PathBuf,
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    HashSize(#[from] HashSizeError),
}

pub type Result<T> = std::result::Result<T, PreprocError>;

/// What survived one filtering stage
#[derive(Debug)]
pub struct FilterResult {
    /// The surviving frames at their new location, in the order they were processed
    pub survivors: Vec<Frame>,
    /// How many readable frames the stage filtered out
    pub removed: usize,
    pub timing: StageTiming,
}
