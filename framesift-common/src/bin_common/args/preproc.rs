use super::{
    args_helper::args,
    blur::{BlurArgs, BlurCli},
    dedup::{DedupArgs, DedupCli},
    frame_source::{FrameSourceArgs, FrameSourceCli},
};

args! {
    #[derive(Clone, Debug)]
    Preproc {
        "Remove blurry frames before deduplication"
        blur: bool = false;

        "Remove near-duplicate frames"
        dedup: bool = false;

        blur_args: Blur;
        dedup_args: Dedup;
        source_args: FrameSource;
    }
}

impl PreprocArgs {
    pub fn is_blur_enabled(&self) -> bool {
        self.blur
    }

    pub fn is_dedup_enabled(&self) -> bool {
        self.dedup
    }

    pub fn blur_conf(&self) -> &BlurArgs {
        &self.blur_args
    }

    pub fn dedup_conf(&self) -> &DedupArgs {
        &self.dedup_args
    }

    pub fn source_conf(&self) -> &FrameSourceArgs {
        &self.source_args
    }
}
