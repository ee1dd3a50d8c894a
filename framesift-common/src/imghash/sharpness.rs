use std::{fmt, path::Path};

use image::{DynamicImage, GenericImageView, GrayImage, Luma};

use crate::utils::math::Variance;

use super::DecodeError;

/// Edge energy of an image, higher is sharper.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Sharpness(f64);

impl Sharpness {
    pub fn new(score: f64) -> Self {
        assert!(score.is_finite() && score >= 0.0, "invalid sharpness: {score}");
        Self(score)
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Sharpness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Mirrors `i` into `0..len` without repeating the edge pixel, i.e., `-1` maps to `1`.
fn reflect101(i: i64, len: u32) -> u32 {
    let len = i64::from(len);
    if len == 1 {
        return 0;
    }
    let i = i.abs();
    let i = if i >= len { 2 * (len - 1) - i } else { i };
    i.try_into().expect("is within 0..len")
}

/// The response of the 4-neighbour Laplacian kernel `[[0,1,0],[1,-4,1],[0,1,0]]` at
/// `(x, y)`.
fn laplacian_at<I>(img: &I, x: u32, y: u32) -> i32
where
    I: GenericImageView<Pixel = Luma<u8>>,
{
    let (width, height) = img.dimensions();
    let at = |dx: i64, dy: i64| {
        let nx = reflect101(i64::from(x) + dx, width);
        let ny = reflect101(i64::from(y) + dy, height);
        i32::from(img.get_pixel(nx, ny)[0])
    };

    at(0, -1) + at(0, 1) + at(-1, 0) + at(1, 0) - 4 * at(0, 0)
}

/// Variance of the Laplacian over all pixels of a grayscale image. Empty images have a
/// sharpness of zero.
pub fn sharpness_gray<I>(img: &I) -> Sharpness
where
    I: GenericImageView<Pixel = Luma<u8>>,
{
    let mut var = Variance::new();
    for y in 0..img.height() {
        for x in 0..img.width() {
            var.add(laplacian_at(img, x, y));
        }
    }
    Sharpness::new(var.population_variance().max(0.0))
}

pub fn sharpness(img: &DynamicImage) -> Sharpness {
    let gray: GrayImage = img.to_luma8();
    sharpness_gray(&gray)
}

pub fn sharpness_from_path(path: impl AsRef<Path>) -> Result<Sharpness, DecodeError> {
    let img = super::open(path)?;
    Ok(sharpness(&img))
}
