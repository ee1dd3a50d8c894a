use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Where in the video a frame came from, as encoded in the extractor's filenames, e.g.,
/// `frame_000042_20240101_120000_123456.jpg`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence {
    pub index: u64,
    /// Wall clock time of the capture, `YYYYmmdd_HHMMSS_micros`
    pub captured: String,
}

impl Sequence {
    const PREFIX: &'static str = "frame_";

    /// Parses a file stem like `frame_000042_20240101_120000_123456`.
    pub fn parse(stem: &str) -> Option<Self> {
        let rest = stem.strip_prefix(Self::PREFIX)?;
        let (index, captured) = rest.split_once('_')?;

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(index) {
            return None;
        }

        let mut parts = captured.split('_');
        let (Some(date), Some(time), Some(micros), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        if date.len() != 8 || time.len() != 6 || ![date, time, micros].into_iter().all(all_digits)
        {
            return None;
        }

        Some(Self {
            index: index.parse().ok()?,
            captured: captured.to_owned(),
        })
    }
}

/// The stable identity of a frame: its filename, and its position in the video if the
/// filename says so.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId {
    pub name: String,
    pub sequence: Option<Sequence>,
}

impl FrameId {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let sequence = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(Sequence::parse);
        Self { name, sequence }
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sequence {
            Some(seq) => write!(f, "{} (#{})", self.name, seq.index),
            None => f.write_str(&self.name),
        }
    }
}

/// An extracted frame persisted on disk. The pixels are read on demand.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    id: FrameId,
    path: PathBuf,
}

impl Frame {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            id: FrameId::from_path(&path),
            path,
        }
    }

    pub fn id(&self) -> &FrameId {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The same frame persisted at another location
    pub fn moved_to(&self, path: impl Into<PathBuf>) -> Self {
        Self {
            id: self.id.clone(),
            path: path.into(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}
