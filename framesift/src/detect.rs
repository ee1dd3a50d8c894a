//! The seam to an object detection model. The preprocessing only hands over the final
//! frame directory, the model itself lives elsewhere.

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use framesift_common::{bin_common::args::frame_source::FrameSourceArgs, utils::fsutils};

pub type ClassId = u32;
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub confidence: f32,
    pub class: ClassId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetectionResult {
    pub boxes: Vec<BoundingBox>,
    pub width: u32,
    pub height: u32,
}

/// Something that can find objects in an image, like a local model or a hosted one.
pub trait Detector {
    fn predict(&self, image: &Path) -> Result<DetectionResult, BoxedError>;

    /// Human readable names of the classes `predict` can return
    fn class_names(&self) -> &BTreeMap<ClassId, String>;

    fn class_name(&self, class: ClassId) -> String {
        self.class_names()
            .get(&class)
            .cloned()
            .unwrap_or_else(|| format!("class_{class}"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("could not read the frame directory {}", .dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DetectionStats {
    pub image_count: usize,
    pub annotation_count: usize,
    pub class_distribution: BTreeMap<String, usize>,
}

/// Runs `detector` on every frame in `frames_dir` and tallies the detections with at
/// least `confidence`. Frames the detector fails on are logged and skipped.
///
/// This is the entry point for a detection model embedding framesift. The `framesift`
/// binary ships no [`Detector`] and never calls it, so its summaries have no detection
/// part.
pub fn run_detection(
    detector: &dyn Detector,
    frames_dir: &Path,
    frame_source: &FrameSourceArgs,
    confidence: f32,
) -> Result<DetectionStats, DetectError> {
    let frames = fsutils::list_images(frames_dir, frame_source.extensions()).map_err(|source| {
        DetectError::ReadDir {
            dir: frames_dir.to_owned(),
            source,
        }
    })?;
    log::info!("Running detection on {} frames", frames.len());

    let mut stats = DetectionStats::default();
    for frame in frames {
        let res = match detector.predict(&frame) {
            Ok(res) => res,
            Err(e) => {
                log::warn!("Detection failed on {}: {e}", frame.display());
                continue;
            }
        };

        stats.image_count += 1;
        for bbox in res.boxes.iter().filter(|bbox| bbox.confidence >= confidence) {
            stats.annotation_count += 1;
            *stats
                .class_distribution
                .entry(detector.class_name(bbox.class))
                .or_insert(0) += 1;
        }
    }

    log::info!(
        "Tagged {} images with {} annotations",
        stats.image_count,
        stats.annotation_count
    );
    Ok(stats)
}
