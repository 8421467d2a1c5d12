//! String-seeded ARC4 keystream
//!
//! Reproduces the ARC4 generator popularised by the `seedrandom` scheme so that
//! a seed string yields the same sequence of doubles and 32-bit integers on
//! every platform: the seed's UTF-16 code units are smeared into a key, the
//! ARC4 state is scheduled from it, and the first 256 bytes are discarded.

use rand::RngCore;

const WIDTH: usize = 256;
const MASK: usize = WIDTH - 1;
/// Bytes drawn up front for every double
const CHUNKS: usize = 6;
/// 256^6
const START_DENOMINATOR: f64 = 281_474_976_710_656.0;
/// 2^52
const SIGNIFICANCE: f64 = 4_503_599_627_370_496.0;
/// 2^53
const OVERFLOW: f64 = 9_007_199_254_740_992.0;

/// ARC4 keystream seeded from a string
#[derive(Debug, Clone)]
pub struct Arc4 {
    i: u8,
    j: u8,
    state: [u8; WIDTH],
}

impl Arc4 {
    /// Create a keystream from a seed string
    pub fn from_seed(seed: &str) -> Self {
        Self::from_key(&mix_key(seed))
    }

    /// Create a keystream from raw key bytes (an empty key acts as `[0]`)
    pub fn from_key(key: &[u8]) -> Self {
        let key: &[u8] = if key.is_empty() { &[0] } else { key };

        let mut state = [0u8; WIDTH];
        for (value, slot) in (0..=u8::MAX).zip(state.iter_mut()) {
            *slot = value;
        }

        let mut j: u8 = 0;
        for (i, &key_byte) in (0..WIDTH).zip(key.iter().cycle()) {
            let t = state.get(i).copied().unwrap_or_default();
            j = j.wrapping_add(key_byte).wrapping_add(t);
            state.swap(i, usize::from(j));
        }

        let mut arc4 = Self { i: 0, j: 0, state };
        for _ in 0..WIDTH {
            arc4.next_byte();
        }
        arc4
    }

    /// Next keystream byte
    pub fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.read(self.i);
        self.j = self.j.wrapping_add(t);
        self.state.swap(usize::from(self.i), usize::from(self.j));
        let sum = self.read(self.i).wrapping_add(self.read(self.j));
        self.read(sum)
    }

    /// Big-endian accumulation of `count` bytes (at most 7)
    pub fn take(&mut self, count: usize) -> u64 {
        (0..count).fold(0u64, |acc, _| acc * WIDTH as u64 + u64::from(self.next_byte()))
    }

    /// Uniform double in `[0, 1)` with 53 bits of precision
    pub fn next_f64(&mut self) -> f64 {
        let mut n = self.take(CHUNKS) as f64;
        let mut d = START_DENOMINATOR;
        let mut x: u64 = 0;

        while n < SIGNIFICANCE {
            n = (n + x as f64) * WIDTH as f64;
            d *= WIDTH as f64;
            x = self.take(1);
        }
        while n >= OVERFLOW {
            n /= 2.0;
            d /= 2.0;
            x >>= 1;
        }

        (n + x as f64) / d
    }

    /// Signed 32-bit draw from four keystream bytes
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    // u8 indices never exceed the 256-entry state
    fn read(&self, index: u8) -> u8 {
        self.state
            .get(usize::from(index))
            .copied()
            .unwrap_or_default()
    }
}

impl RngCore for Arc4 {
    fn next_u32(&mut self) -> u32 {
        self.take(4) as u32
    }

    fn next_u64(&mut self) -> u64 {
        (self.take(4) << 32) | self.take(4)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = self.next_byte();
        }
    }
}

/// Smear a seed string into an ARC4 key
///
/// Each UTF-16 code unit lands at `j mod 256`; once the key wraps, the byte
/// already there is folded into a running XOR before being overwritten.
pub fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear: u32 = 0;

    for (j, unit) in seed.encode_utf16().enumerate() {
        let slot = j & MASK;
        if let Some(&existing) = key.get(slot) {
            smear ^= u32::from(existing) * 19;
        }
        let mixed = (smear + u32::from(unit)) as u8;
        match key.get_mut(slot) {
            Some(byte) => *byte = mixed,
            None => key.push(mixed),
        }
    }

    key
}
