// NOTE: every test will complain about the functions it doesn't use
#![allow(unused)]

use std::path::{Path, PathBuf};

use framesift_common::{
    preprocess::frame::Frame,
    utils::imgutils::{checkerboard, filled},
};
use image::{imageops, GrayImage, RgbImage};
use tempfile::TempDir;

/// A temporary directory for frames
pub fn tmp_dir() -> TempDir {
    tempfile::tempdir().expect("could not create temporary dir")
}

pub fn white() -> RgbImage {
    filled(100, 100, 255, 255, 255)
}

pub fn black() -> RgbImage {
    filled(100, 100, 0, 0, 0)
}

/// Left half white, right half black
pub fn split() -> RgbImage {
    RgbImage::from_fn(100, 100, |x, _| {
        if x < 50 {
            image::Rgb([255, 255, 255])
        } else {
            image::Rgb([0, 0, 0])
        }
    })
}

/// A checkerboard with single pixel squares, about as sharp as it gets
pub fn sharp() -> GrayImage {
    checkerboard(100, 100, 1)
}

pub fn blurred() -> GrayImage {
    imageops::blur(&sharp(), 2.0)
}

/// Saves `img` as `name` in `dir` and returns it as a frame
pub fn save<I>(dir: &Path, name: &str, img: &I) -> Frame
where
    I: SaveAs,
{
    let path = dir.join(name);
    img.save_as(&path);
    Frame::new(path)
}

pub trait SaveAs {
    fn save_as(&self, path: &Path);
}

impl SaveAs for RgbImage {
    fn save_as(&self, path: &Path) {
        self.save(path).expect("could not save the image");
    }
}

impl SaveAs for GrayImage {
    fn save_as(&self, path: &Path) {
        self.save(path).expect("could not save the image");
    }
}

/// The filenames of the frames, in order
pub fn names(frames: &[Frame]) -> Vec<String> {
    frames.iter().map(|f| f.id().name.clone()).collect()
}

/// The filenames in a directory, sorted
pub fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("could not read dir")
        .map(|entry| {
            entry
                .expect("could not read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
