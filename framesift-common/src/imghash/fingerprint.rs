use std::fmt;

pub type Distance = u32;

/// A perceptual hash of a fixed number of bits. Unused bits in the last byte are zero.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    bits: u32,
    bytes: Box<[u8]>,
}

impl Fingerprint {
    pub fn from_slice(bytes: &[u8], bits: u32) -> Self {
        assert_eq!(
            Self::bytes_needed(bits),
            bytes.len(),
            "the slice is of the incorrect length"
        );
        Self {
            bits,
            bytes: bytes.into(),
        }
    }

    fn bytes_needed(bits: u32) -> usize {
        let bits: usize = bits.try_into().expect("u32 fits in usize");
        bits.div_ceil(8)
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_base64(&self) -> String {
        base64::Engine::encode(&base64::prelude::BASE64_STANDARD_NO_PAD, &self.bytes)
    }

    /// The Hamming distance, i.e., the number of differing bits. Both fingerprints must
    /// come from hashers with the same hash size.
    pub fn distance_to(&self, other: &Self) -> Distance {
        assert_eq!(
            self.bits, other.bits,
            "can only compare fingerprints of equal length"
        );
        self.bytes
            .iter()
            .zip(other.bytes.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }

    pub fn distance(a: &Self, b: &Self) -> Distance {
        a.distance_to(b)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    use super::*;

    impl Fingerprint {
        pub fn random<R>(rng: &mut R, bits: u32) -> Self
        where
            R: Rng + ?Sized,
        {
            let mut bytes = vec![0u8; Self::bytes_needed(bits)];
            rng.fill(bytes.as_mut_slice());
            let rem = bits % 8;
            if rem != 0 {
                if let Some(last) = bytes.last_mut() {
                    *last &= (1u8 << rem) - 1;
                }
            }
            Self::from_slice(&bytes, bits)
        }

        pub fn random_at_distance<R>(&self, rng: &mut R, dist: Distance) -> Self
        where
            R: Rng + ?Sized,
        {
            assert!(dist <= self.bits);
            let mut bytes = self.bytes.clone();
            for i in rand::seq::index::sample(
                rng,
                self.bits.try_into().unwrap(),
                dist.try_into().unwrap(),
            ) {
                bytes[i / 8] ^= 1 << (i % 8);
            }
            Self {
                bits: self.bits,
                bytes,
            }
        }
    }

    #[test]
    fn hamming_distances() {
        let zero = Fingerprint::from_slice(&[0, 0], 16);
        let ones = Fingerprint::from_slice(&[0xff, 0xff], 16);
        assert_eq!(0, zero.distance_to(&zero));
        assert_eq!(0, ones.distance_to(&ones));
        assert_eq!(16, zero.distance_to(&ones));

        let a = Fingerprint::from_slice(&[0b101], 3);
        let b = Fingerprint::from_slice(&[0b010], 3);
        assert_eq!(3, a.distance_to(&b));
    }

    #[test]
    fn symmetric_and_reflexive() {
        let mut rng = SmallRng::seed_from_u64(1337);
        for bits in [9, 64, 256] {
            for _ in 0..100 {
                let a = Fingerprint::random(&mut rng, bits);
                let b = Fingerprint::random(&mut rng, bits);
                assert_eq!(0, a.distance_to(&a));
                assert_eq!(a.distance_to(&b), b.distance_to(&a));
                assert_eq!(a.distance_to(&b), Fingerprint::distance(&a, &b));
            }
        }
    }

    #[test]
    fn triangle_inequality() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            let a = Fingerprint::random(&mut rng, 64);
            let b = Fingerprint::random(&mut rng, 64);
            let c = Fingerprint::random(&mut rng, 64);
            assert!(a.distance_to(&c) <= a.distance_to(&b) + b.distance_to(&c));
        }
    }

    #[test]
    fn random_at_distance() {
        let mut rng = SmallRng::seed_from_u64(7);
        let a = Fingerprint::random(&mut rng, 64);
        for dist in [0, 1, 5, 64] {
            assert_eq!(dist, a.distance_to(&a.random_at_distance(&mut rng, dist)));
        }
    }

    #[test]
    #[should_panic]
    fn different_lengths() {
        let a = Fingerprint::from_slice(&[0; 8], 64);
        let b = Fingerprint::from_slice(&[0; 32], 256);
        a.distance_to(&b);
    }
}
