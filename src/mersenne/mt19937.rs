//! Implementation of Mersenne Twister MT19937 based on libc++ and Wikipedia pseudo-code:
//!
//! https://github.com/llvm/llvm-project/blob/master/libcxx/include/random#L2075
//! https://en.wikipedia.org/wiki/Mersenne_Twister
//!
//! Regeneration computes every word from the previous array, then swaps the
//! fresh array in.

pub const W: u32 = 32;
pub const N: usize = 624;
pub const M: usize = 397;

pub const A: u32 = 0x9908_b0df;

pub const U: u32 = 11;
pub const D: u32 = 0xffff_ffff;

pub const S: u32 = 7;
pub const B: u32 = 0x9d2c_5680;

pub const T: u32 = 15;
pub const C: u32 = 0xefc6_0000;

pub const L: u32 = 18;

pub const F: u32 = 1812433253;

pub const LOWER_MASK: u32 = 0x7fff_ffff;
pub const UPPER_MASK: u32 = 0x8000_0000;

/// MT19937 PRNG (32-bit)
#[derive(Clone, Debug, PartialEq)]
pub struct Mt19937 {
    pub(crate) state: [u32; N],
    pub(crate) index: usize,
}

impl Mt19937 {
    /// Create a MT19937 PRNG initialized from a 32-bit seed
    ///
    /// The cursor starts exhausted, so the first extraction regenerates the state
    pub fn new(seed: u32) -> Self {
        let mut state = [0_u32; N];
        state[0] = seed;

        for i in 1..N {
            Self::k_distribute(&mut state, i);
        }

        Self { state, index: N }
    }

    /// Create a PRNG from a raw state array and cursor position
    ///
    /// A cursor at or past N forces a regeneration before the next output
    pub fn from_state(state: [u32; N], index: usize) -> Self {
        Self {
            state,
            index: core::cmp::min(index, N),
        }
    }

    /// Raw (untempered) state words
    pub fn state(&self) -> &[u32; N] {
        &self.state
    }

    /// Position of the next word to be tempered
    pub fn index(&self) -> usize {
        self.index
    }

    /// Perform k-distribution step to generate initial state from seed value
    pub(crate) fn k_distribute(state: &mut [u32; N], i: usize) {
        // xi = f × (xi−1 ⊕ (xi−1 >> (w−2))) + i
        let prev = state[i - 1];
        state[i] = F.wrapping_mul(prev ^ (prev >> (W - 2))).wrapping_add(i as u32);
    }

    /// Extract a tempered value based on MT[index]
    /// calling twist() every n numbers
    pub fn extract_number(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }

        let res = temper(self.state[self.index]);
        self.index += 1;

        res
    }

    /// Regenerate all N words and reset the cursor
    pub(crate) fn twist(&mut self) {
        let mut next = [0_u32; N];

        for (i, word) in next.iter_mut().enumerate() {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut y_a = y >> 1;
            if y & 1 != 0 {
                y_a ^= A;
            }

            *word = self.state[(i + M) % N] ^ y_a;
        }

        self.state = next;
        self.index = 0;
    }
}

impl Iterator for Mt19937 {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.extract_number())
    }
}

/// Apply the MT19937 output transform to a raw state word
pub fn temper(word: u32) -> u32 {
    let mut z = word ^ ((word >> U) & D);
    z ^= (z << S) & B;
    z ^= (z << T) & C;

    z ^ (z >> L)
}
