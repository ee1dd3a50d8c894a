use std::path::Path;

use framesift_common::preprocess::runner::PreprocessingSession;

use crate::detect::DetectionStats;

pub const SUMMARY_FILENAME: &str = "preprocessing_summary.ron";

/// Everything the report is generated from
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    pub preprocessing: PreprocessingSession,
    /// Filled in by whoever runs [`run_detection`](crate::detect::run_detection)
    pub detection: Option<DetectionStats>,
}

impl Summary {
    pub fn new(preprocessing: PreprocessingSession) -> Self {
        Self {
            preprocessing,
            detection: None,
        }
    }

    /// One line per executed stage, like `blur_detection: 1.23 sec`
    pub fn time_breakdown(&self) -> Vec<String> {
        self.preprocessing
            .timings()
            .map(|(label, secs)| format!("{label}: {secs:.2} sec"))
            .collect()
    }
}

pub fn save_to(writer: impl std::io::Write, summary: &Summary) -> ron::Result<()> {
    let conf = ron::ser::PrettyConfig::new().struct_names(true);
    ron::ser::to_writer_pretty(writer, summary, conf)
}

pub fn read_from(reader: impl std::io::Read) -> ron::error::SpannedResult<Summary> {
    ron::de::from_reader(reader)
}

/// The default location of the summary for a run writing to `output_dir`
pub fn default_path(output_dir: &Path) -> std::path::PathBuf {
    output_dir.join(SUMMARY_FILENAME)
}

#[cfg(test)]
mod test {
    use std::{path::PathBuf, time::Duration};

    use framesift_common::{preprocess::runner::StageSummary, utils::time::StageTiming};

    use super::*;

    fn session() -> PreprocessingSession {
        PreprocessingSession {
            input_dir: PathBuf::from("frames"),
            input_frames: 10,
            blur: Some(StageSummary {
                kept: 7,
                removed: 3,
                dir: PathBuf::from("out/cleaned_frames"),
                timing: StageTiming {
                    label: "blur_detection".to_owned(),
                    duration: Duration::from_millis(1500),
                },
            }),
            dedup: None,
            final_dir: PathBuf::from("out/cleaned_frames"),
            final_frames: 7,
        }
    }

    #[test]
    fn written_summary_can_be_read() {
        let mut summary = Summary::new(session());
        summary.detection = Some(DetectionStats {
            image_count: 7,
            annotation_count: 2,
            class_distribution: [("person".to_owned(), 2)].into_iter().collect(),
        });

        let mut buf = Vec::new();
        save_to(&mut buf, &summary).unwrap();
        assert_eq!(summary, read_from(buf.as_slice()).unwrap());
    }

    #[test]
    fn breakdown() {
        let summary = Summary::new(session());
        assert_eq!(vec!["blur_detection: 1.50 sec"], summary.time_breakdown());
    }
}
