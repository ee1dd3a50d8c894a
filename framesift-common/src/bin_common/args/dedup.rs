use crate::imghash::{
    check_hash_size,
    fingerprint::{Distance, Fingerprint},
    HashSizeError, Hasher, MAX_HASH_SIZE, MIN_HASH_SIZE,
};

use super::args_helper::args;

pub const DEFAULT_HASH_SIZE: u32 = 8;

args! {
    #[derive(Copy, Clone, Debug)]
    Dedup {
        #[arg(value_parser = clap::value_parser!(u32)
              .range(i64::from(MIN_HASH_SIZE)..=i64::from(MAX_HASH_SIZE)))]
        "Side length of the perceptual hash, the fingerprint will be this many bits \
         squared. Larger values discriminate better between frames"
        dedup_hash_size: u32 = DEFAULT_HASH_SIZE;

        "Maximum distance for two frames to be considered duplicates"
        dedup_threshold: Distance = 5;
    }
}

impl DedupArgs {
    pub fn hash_size(&self) -> u32 {
        self.dedup_hash_size
    }

    /// Fails if the hash size was set outside of what the flag accepts.
    pub fn validate(&self) -> Result<(), HashSizeError> {
        check_hash_size(self.dedup_hash_size).map(|_| ())
    }

    pub fn hasher(&self) -> Result<Hasher, HashSizeError> {
        Hasher::new(self.dedup_hash_size)
    }

    pub fn threshold(&self) -> Distance {
        self.dedup_threshold
    }

    pub fn is_within(&self, dist: Distance) -> bool {
        dist <= self.dedup_threshold
    }

    pub fn are_duplicates(&self, a: &Fingerprint, b: &Fingerprint) -> bool {
        self.is_within(a.distance_to(b))
    }
}
