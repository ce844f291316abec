use num::bigint::BigInt;
use num::{Integer, One, Signed, ToPrimitive, Zero};

use super::generator::Params;
use crate::modular::{invmod_u64, reduce};
use crate::Error;

/// Minimum number of consecutive terms needed to form one modulus window
pub const MIN_SAMPLES: usize = 4;

/// Parameters and seed recovered from an observed LCG sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recovered {
    pub params: Params,
    pub seed: u64,
}

/// Recover the term preceding x under known parameters
///
/// xi−1 = (xi − c) × a⁻¹ mod m
pub fn previous_term(x: u64, params: &Params) -> Result<u64, Error> {
    let inv_a = invmod_u64(&BigInt::from(params.multiplier()), params.modulus())?;

    Ok(step_back(x, params, &inv_a))
}

fn step_back(x: u64, params: &Params, inv_a: &BigInt) -> u64 {
    let diff = BigInt::from(x) - BigInt::from(params.increment());

    reduce(&(diff * inv_a), params.modulus())
}

/// Walk back `steps` terms from a known term (Case 1: known parameters)
///
/// Walking back by the length of the observed sequence from its last term
/// recovers the seed.
pub fn walk_back(x_last: u64, params: &Params, steps: usize) -> Result<u64, Error> {
    let inv_a = invmod_u64(&BigInt::from(params.multiplier()), params.modulus())?;

    let mut x = x_last;
    for _i in 0..steps {
        x = step_back(x, params, &inv_a);
    }

    log::debug!("walked back {} steps from {} to {}", steps, x_last, x);

    Ok(x)
}

/// Recover the modulus (or a multiple of it) from consecutive terms
///
/// For each window of four terms with differences t0, t1, t2, the value
/// t1² − t0·t2 is a multiple of m. The GCD over all windows converges to m
/// as more terms are observed, but may remain a proper multiple.
pub fn recover_modulus(outputs: &[u64]) -> Result<u64, Error> {
    if outputs.len() < MIN_SAMPLES {
        return Err(Error::InsufficientSamples {
            required: MIN_SAMPLES,
            given: outputs.len(),
        });
    }

    let mut modulus = BigInt::zero();

    for window in outputs.windows(MIN_SAMPLES) {
        let x: [BigInt; MIN_SAMPLES] = [
            BigInt::from(window[0]),
            BigInt::from(window[1]),
            BigInt::from(window[2]),
            BigInt::from(window[3]),
        ];

        let t0 = &x[1] - &x[0];
        let t1 = &x[2] - &x[1];
        let t2 = &x[3] - &x[2];

        let v = &t1 * &t1 - &t0 * &t2;

        modulus = modulus.gcd(&v.abs());
    }

    if modulus.is_zero() || modulus.is_one() {
        return Err(Error::DegenerateModulus);
    }

    modulus.to_u64().ok_or(Error::ModulusOverflow)
}

/// Recover the multiplier from three consecutive terms
///
/// a = (x2 − x1) × (x1 − x0)⁻¹ mod m
pub fn recover_multiplier(x0: u64, x1: u64, x2: u64, modulus: u64) -> Result<u64, Error> {
    let diff = BigInt::from(x1) - BigInt::from(x0);
    let inv = invmod_u64(&diff, modulus)?;

    Ok(reduce(&((BigInt::from(x2) - BigInt::from(x1)) * inv), modulus))
}

/// Recover the increment from two consecutive terms
///
/// c = (x1 − a × x0) mod m
pub fn recover_increment(x0: u64, x1: u64, multiplier: u64, modulus: u64) -> u64 {
    reduce(
        &(BigInt::from(x1) - BigInt::from(multiplier) * BigInt::from(x0)),
        modulus,
    )
}

/// Recover m, a, c and the seed from an observed sequence (Case 2: unknown parameters)
///
/// The seed candidate is `steps` terms before the last observed term.
pub fn recover(outputs: &[u64], steps: usize) -> Result<Recovered, Error> {
    if outputs.len() < MIN_SAMPLES {
        return Err(Error::InsufficientSamples {
            required: MIN_SAMPLES,
            given: outputs.len(),
        });
    }

    let modulus = recover_modulus(outputs)?;
    let multiplier = recover_multiplier(outputs[0], outputs[1], outputs[2], modulus)?;
    let increment = recover_increment(outputs[0], outputs[1], multiplier, modulus);

    log::debug!(
        "recovered m: {}, a: {}, c: {}",
        modulus,
        multiplier,
        increment
    );

    // recover_modulus never yields a modulus below 2
    let params = Params::new_unchecked(modulus, multiplier, increment);

    let seed = walk_back(outputs[outputs.len() - 1], &params, steps)?;

    Ok(Recovered { params, seed })
}
