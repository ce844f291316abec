use alloc::vec::Vec;

use crate::Error;

/// Linear Congruential Generator parameters
///
/// Xi+1 = (a × Xi + c) mod m
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    modulus: u64,
    multiplier: u64,
    increment: u64,
}

impl Params {
    /// Create validated LCG parameters
    ///
    /// Requires 0 < m, 0 < a < m, and 0 <= c < m
    pub fn new(modulus: u64, multiplier: u64, increment: u64) -> Result<Self, Error> {
        if modulus == 0 || multiplier == 0 || multiplier >= modulus || increment >= modulus {
            return Err(Error::InvalidParameters {
                modulus,
                multiplier,
                increment,
            });
        }

        Ok(Self::new_unchecked(modulus, multiplier, increment))
    }

    /// Create parameters skipping the multiplier and increment checks
    ///
    /// Used for recovered parameters, whose multiplier may be zero.
    /// The modulus must be non-zero.
    pub(crate) fn new_unchecked(modulus: u64, multiplier: u64, increment: u64) -> Self {
        Self {
            modulus,
            multiplier,
            increment,
        }
    }

    /// Modulus m
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Multiplier a
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Increment c
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Compute the term following x
    pub fn step(&self, x: u64) -> u64 {
        let next = (self.multiplier as u128 * x as u128 + self.increment as u128)
            % self.modulus as u128;

        next as u64
    }
}

/// LCG PRNG holding its current term
#[derive(Clone, Debug)]
pub struct Lcg {
    params: Params,
    state: u64,
}

impl Lcg {
    /// Create an LCG starting from seed x0
    pub fn new(params: Params, seed: u64) -> Self {
        Self {
            params,
            state: seed,
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Advance the state and return the new term
    pub fn next_number(&mut self) -> u64 {
        self.state = self.params.step(self.state);
        self.state
    }
}

impl Iterator for Lcg {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_number())
    }
}

/// Generate `count` successive terms x1..=xcount from seed x0
///
/// The seed itself is not part of the output
pub fn generate(params: &Params, seed: u64, count: usize) -> Vec<u64> {
    Lcg::new(*params, seed).take(count).collect()
}
