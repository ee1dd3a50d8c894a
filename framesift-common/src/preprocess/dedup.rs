use std::{path::Path, time::Duration};

use crate::{
    bin_common::args::dedup::DedupArgs,
    imghash::fingerprint::Fingerprint,
    utils::{
        fsutils::{self, Existing},
        time::{timed, Every},
    },
};

use super::{frame::Frame, FilterResult, PreprocError, Result, DEDUP_STAGE};

/// Fingerprints of every frame kept so far, in the order they were kept.
struct Seen {
    fingerprints: Vec<Fingerprint>,
}

impl Seen {
    fn new() -> Self {
        Self {
            fingerprints: Vec::new(),
        }
    }

    fn is_duplicate(&self, args: &DedupArgs, fp: &Fingerprint) -> bool {
        self.fingerprints
            .iter()
            .any(|seen| args.are_duplicates(seen, fp))
    }

    fn insert(&mut self, fp: Fingerprint) {
        self.fingerprints.push(fp);
    }
}

/// Keeps the first frame, in path order, of every group of near-duplicates and copies it
/// into `dest`. A copy that already exists in `dest` is left as is. Frames that can't be
/// hashed are skipped and not counted as duplicates.
pub fn deduplicate(frames: &[Frame], dest: &Path, args: &DedupArgs) -> Result<FilterResult> {
    let (res, timing) = timed(DEDUP_STAGE, || dedup(frames, dest, args));
    let (survivors, removed) = res?;
    Ok(FilterResult {
        survivors,
        removed,
        timing,
    })
}

fn dedup(frames: &[Frame], dest: &Path, args: &DedupArgs) -> Result<(Vec<Frame>, usize)> {
    log::info!(
        "Starting deduplication on {} frames with threshold {} and hash size {}",
        frames.len(),
        args.threshold(),
        args.hash_size()
    );

    let mut sorted: Vec<&Frame> = frames.iter().collect();
    sorted.sort_by(|a, b| a.path().cmp(b.path()));

    let hasher = args.hasher()?;
    let mut seen = Seen::new();
    let mut unique = Vec::new();
    let mut duplicates = 0;
    let mut progress = Every::new(Duration::from_secs(10));

    for (i, frame) in sorted.into_iter().enumerate() {
        progress.perform(|| log::info!("Dedup progress: {}/{} frames", i, frames.len()));

        let fp = match hasher.hash_from_path(frame.path()) {
            Ok(fp) => fp,
            Err(e) => {
                log::warn!(
                    "Skipping {}: cannot compute fingerprint ({})",
                    frame.path().display(),
                    e.source
                );
                continue;
            }
        };

        if seen.is_duplicate(args, &fp) {
            log::debug!("Duplicate frame detected: {frame}");
            duplicates += 1;
            continue;
        }

        seen.insert(fp);
        let copy = fsutils::copy_into(frame.path(), dest, Existing::Keep).map_err(|source| {
            PreprocError::Copy {
                frame: frame.path().to_owned(),
                dir: dest.to_owned(),
                source,
            }
        })?;
        unique.push(frame.moved_to(copy));
    }

    log::info!(
        "Deduplication complete: {} unique frames kept, {} duplicates removed",
        unique.len(),
        duplicates
    );
    Ok((unique, duplicates))
}

#[cfg(test)]
mod test {
    use crate::utils::imgutils::filled;

    use super::*;

    fn strict() -> DedupArgs {
        DedupArgs::default()
            .dedup_hash_size(8)
            .dedup_threshold(0)
    }

    #[test]
    fn unsorted_input_is_processed_in_path_order() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        for name in ["a.png", "b.png"] {
            filled(64, 64, 255, 255, 255)
                .save(src.path().join(name))
                .unwrap();
        }

        let frames = vec![
            Frame::new(src.path().join("b.png")),
            Frame::new(src.path().join("a.png")),
        ];
        let res = deduplicate(&frames, dest.path(), &strict()).unwrap();

        assert_eq!(1, res.removed);
        assert_eq!(vec![Frame::new(dest.path().join("a.png"))], res.survivors);
        assert!(!dest.path().join("b.png").exists());
        assert_eq!(DEDUP_STAGE, res.timing.label);
    }

    #[test]
    fn existing_copies_are_kept() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        filled(64, 64, 0, 0, 0).save(src.path().join("a.png")).unwrap();
        std::fs::write(dest.path().join("a.png"), "already here").unwrap();

        let frames = vec![Frame::new(src.path().join("a.png"))];
        let res = deduplicate(&frames, dest.path(), &strict()).unwrap();

        assert_eq!(0, res.removed);
        assert_eq!(1, res.survivors.len());
        assert_eq!(
            "already here",
            std::fs::read_to_string(dest.path().join("a.png")).unwrap()
        );
    }

    #[test]
    fn too_large_hash_size() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        filled(64, 64, 0, 0, 0).save(src.path().join("a.png")).unwrap();

        let frames = vec![Frame::new(src.path().join("a.png"))];
        let args = strict().dedup_hash_size(70000);
        let err = deduplicate(&frames, dest.path(), &args).unwrap_err();

        assert!(matches!(err, PreprocError::HashSize(_)));
        assert!(!dest.path().join("a.png").exists());
    }

    #[test]
    fn unreadable_frames_are_not_counted() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        std::fs::write(src.path().join("a.png"), "garbage").unwrap();
        filled(64, 64, 0, 0, 0).save(src.path().join("b.png")).unwrap();

        let frames = vec![
            Frame::new(src.path().join("a.png")),
            Frame::new(src.path().join("b.png")),
        ];
        let res = deduplicate(&frames, dest.path(), &strict()).unwrap();

        assert_eq!(0, res.removed);
        assert_eq!(vec![Frame::new(dest.path().join("b.png"))], res.survivors);
    }
}
