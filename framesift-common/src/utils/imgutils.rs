use image::{GrayImage, ImageBuffer, Luma, RgbImage};

pub const WHITE: u8 = u8::MAX;
pub const BLACK: u8 = u8::MIN;

pub fn filled(width: u32, height: u32, red: u8, green: u8, blue: u8) -> RgbImage {
    let mut buf = ImageBuffer::new(width, height);
    buf.enumerate_pixels_mut()
        .for_each(|(_, _, pixel)| *pixel = image::Rgb([red, green, blue]));
    buf
}

pub fn construct_gray(raw: &[&[u8]]) -> GrayImage {
    assert!(raw.windows(2).all(|w| w[0].len() == w[1].len()));
    let height = raw.len() as u32;
    let width = raw.iter().next().map(|row| row.len()).unwrap_or(0) as u32;
    GrayImage::from_fn(width, height, |x, y| Luma([raw[y as usize][x as usize]]))
}

/// A black and white checkerboard where each square is `cell` pixels wide. The top left
/// square is white.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> GrayImage {
    assert_ne!(cell, 0);
    GrayImage::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Luma([WHITE])
        } else {
            Luma([BLACK])
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn checkerboard_cells() {
        let board = checkerboard(4, 2, 2);
        assert_eq!(
            construct_gray(&[
                &[WHITE, WHITE, BLACK, BLACK],
                &[WHITE, WHITE, BLACK, BLACK],
            ]),
            board
        );
    }

    #[test]
    fn filled_color() {
        let img = filled(3, 3, 1, 2, 3);
        assert!(img.pixels().all(|p| p.0 == [1, 2, 3]));
    }
}
