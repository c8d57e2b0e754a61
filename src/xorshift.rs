//! The xorshift128+ random number generator. Fast, and very random.

use rand::{Error, RngCore};

/// A stream of pseudo-random numbers generated using the xorshift+ technique
/// described here:
///
/// Vigna, Sebastiano (2014). "Further scramblings of Marsaglia's xorshift
/// generators". arXiv:1404.0390 (http://arxiv.org/abs/1404.0390)
///
/// The stream of numbers produced by this method repeats every 2**128 - 1 calls
/// (i.e. never, for all practical purposes).
///
/// This generator is not suitable as a cryptographically secure random number
/// generator. We use it so that a random graph can be rebuilt exactly from the
/// seed that produced it.
#[derive(Debug, Hash, Clone, Serialize, Deserialize)]
pub struct XorShift128Plus {
    state: [u64; 2]
}

impl XorShift128Plus {
    /// Construct a generator from `seed`. An all-zero state would produce
    /// nothing but zeros, so that seed is replaced with a fixed nonzero one.
    pub fn new(seed: [u64; 2]) -> XorShift128Plus {
        if seed == [0, 0] {
            XorShift128Plus { state: [0x9e37_79b9_7f4a_7c15, 1] }
        } else {
            XorShift128Plus { state: seed }
        }
    }

    /// Construct a generator from a single number, as typed on a command line.
    pub fn from_u64(seed: u64) -> XorShift128Plus {
        XorShift128Plus::new([seed, seed.rotate_left(32) ^ 0x2545_f491_4f6c_dd1d])
    }
}

impl RngCore for XorShift128Plus {
    fn next_u64(&mut self) -> u64 {
        let mut s1 = self.state[0];
        let s0 = self.state[1];
        self.state[0] = s0;
        s1 ^= s1 << 23;
        self.state[1] = s1 ^ s0 ^ (s1 >> 17) ^ (s0 >> 26);
        self.state[1].wrapping_add(s0)
    }

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() & 0xffff_ffff) as u32
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[test]
fn simple() {
    let mut rng = XorShift128Plus::new([1, 4]);

    // Calculated by hand following the algorithm given in the paper. The upper
    // bits are mostly zero because we started with a poor seed; once it has run
    // for a while, we'll get an even mix of ones and zeros in all 64 bits.
    assert_eq!(rng.next_u64(), 0x800049);
    assert_eq!(rng.next_u64(), 0x3000186);
    assert_eq!(rng.next_u64(), 0x400003001145);
}

#[test]
fn zero_seed() {
    let mut rng = XorShift128Plus::new([0, 0]);
    assert!((0..4).any(|_| rng.next_u64() != 0));
}

#[test]
fn fill_bytes_matches_words() {
    let mut words = XorShift128Plus::new([1, 4]);
    let mut bytes = XorShift128Plus::new([1, 4]);
    let mut buf = [0u8; 11];
    bytes.fill_bytes(&mut buf);
    assert_eq!(&buf[..8], &words.next_u64().to_le_bytes()[..]);
    assert_eq!(&buf[8..], &words.next_u64().to_le_bytes()[..3]);
}

#[test]
fn serde_round_trip_resumes_stream() {
    let mut rng = XorShift128Plus::from_u64(1234);
    rng.next_u64();
    let saved = ::serde_json::to_string(&rng).unwrap();
    let mut restored: XorShift128Plus = ::serde_json::from_str(&saved).unwrap();
    assert_eq!(rng.next_u64(), restored.next_u64());
}
