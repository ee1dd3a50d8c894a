use crate::imghash::sharpness::Sharpness;

use super::args_helper::args;

args! {
    #[derive(Copy, Clone, Debug)]
    Blur {
        "Frames with a sharpness (variance of the Laplacian) below this are considered \
         blurry and are filtered out"
        blur_threshold: f64 = 100.0;
    }
}

impl BlurArgs {
    pub fn threshold(&self) -> f64 {
        self.blur_threshold
    }

    /// The boundary is inclusive, a score exactly at the threshold is sharp enough.
    pub fn is_sharp(&self, score: Sharpness) -> bool {
        score.as_f64() >= self.blur_threshold
    }

    pub fn is_blurry(&self, score: Sharpness) -> bool {
        !self.is_sharp(score)
    }
}
