use num::bigint::BigInt;
use num::{Integer, One, ToPrimitive, Zero};

use crate::Error;

/// Modular inverse
pub trait InvMod: Sized {
    /// Find x such that self * x ≡ 1 (mod modulus)
    ///
    /// Returns None if gcd(self, modulus) != 1
    fn invmod(&self, modulus: &Self) -> Option<Self>;
}

impl InvMod for BigInt {
    fn invmod(&self, modulus: &Self) -> Option<Self> {
        if modulus <= &BigInt::zero() {
            return None;
        }

        let egcd = self.mod_floor(modulus).extended_gcd(modulus);

        if egcd.gcd.is_one() {
            Some(egcd.x.mod_floor(modulus))
        } else {
            None
        }
    }
}

/// Inverse of value modulo a 64-bit modulus
pub(crate) fn invmod_u64(value: &BigInt, modulus: u64) -> Result<BigInt, Error> {
    if modulus == 0 {
        return Err(Error::DegenerateModulus);
    }

    value
        .invmod(&BigInt::from(modulus))
        .ok_or_else(|| Error::ModularInverseUndefined {
            value: reduce(value, modulus),
            modulus,
        })
}

/// Reduce a value modulo m, returning the canonical 64-bit residue
pub(crate) fn reduce(value: &BigInt, modulus: u64) -> u64 {
    // the residue is in [0, modulus), so it always fits
    value
        .mod_floor(&BigInt::from(modulus))
        .to_u64()
        .unwrap_or_default()
}
