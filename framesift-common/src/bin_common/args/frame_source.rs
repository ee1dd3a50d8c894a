use std::path::Path;

use crate::utils::fsutils;

use super::args_helper::args;

args! {
    #[derive(Clone, Debug)]
    FrameSource {
        [] "File extensions of the frame images to read, case insensitive"
        image_extensions: Vec<String> = vec!["jpg".to_owned(), "png".to_owned()];
    }
}

impl FrameSourceArgs {
    pub fn extensions(&self) -> &[String] {
        &self.image_extensions
    }

    pub fn is_frame(&self, path: impl AsRef<Path>) -> bool {
        fsutils::has_extension(path, self.image_extensions.as_slice())
    }
}
