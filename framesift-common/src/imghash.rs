use std::path::{Path, PathBuf};

use image::DynamicImage;
use image_hasher::{HashAlg, HasherConfig};

use self::fingerprint::Fingerprint;

pub mod fingerprint;
pub mod sharpness;

#[derive(Debug, thiserror::Error)]
#[error("could not read {} as an image", .path.display())]
pub struct DecodeError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}

/// Opens and decodes the image at `path`.
pub fn open(path: impl AsRef<Path>) -> Result<DynamicImage, DecodeError> {
    let path = path.as_ref();
    image::open(path).map_err(|source| DecodeError {
        path: path.to_owned(),
        source,
    })
}

pub const MIN_HASH_SIZE: u32 = 1;
pub const MAX_HASH_SIZE: u32 = 256;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("the hash size must be between {MIN_HASH_SIZE} and {MAX_HASH_SIZE}, got {0}")]
pub struct HashSizeError(pub u32);

pub fn check_hash_size(hash_size: u32) -> Result<u32, HashSizeError> {
    if (MIN_HASH_SIZE..=MAX_HASH_SIZE).contains(&hash_size) {
        Ok(hash_size)
    } else {
        Err(HashSizeError(hash_size))
    }
}

/// Perceptual hasher producing fingerprints of `hash_size * hash_size` bits.
pub struct Hasher {
    hasher: image_hasher::Hasher,
    hash_size: u32,
}

impl Hasher {
    pub fn new(hash_size: u32) -> Result<Self, HashSizeError> {
        let hash_size = check_hash_size(hash_size)?;
        Ok(Self {
            // DCT followed by a mean threshold is the classic pHash
            hasher: HasherConfig::new()
                .hash_size(hash_size, hash_size)
                .hash_alg(HashAlg::Mean)
                .preproc_dct()
                .to_hasher(),
            hash_size,
        })
    }

    pub fn hash_size(&self) -> u32 {
        self.hash_size
    }

    pub fn bits(&self) -> u32 {
        self.hash_size * self.hash_size
    }

    pub fn hash<I>(&self, img: &I) -> Fingerprint
    where
        I: image_hasher::Image,
    {
        let hash = self.hasher.hash_image(img);
        Fingerprint::from_slice(hash.as_bytes(), self.bits())
    }

    pub fn hash_from_path(&self, path: impl AsRef<Path>) -> Result<Fingerprint, DecodeError> {
        let img = open(path)?;
        Ok(self.hash(&img))
    }
}

/// Fingerprints a single image. Prefer a [`Hasher`] when hashing many images.
pub fn fingerprint<I>(img: &I, hash_size: u32) -> Result<Fingerprint, HashSizeError>
where
    I: image_hasher::Image,
{
    Ok(Hasher::new(hash_size)?.hash(img))
}
