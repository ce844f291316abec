use core::convert::TryInto;

use super::mt19937::*;
use crate::Error;

/// Clone an MT19937 PRNG
///
/// Output the next N random numbers of an MT19937 PRNG
/// Recover the twisted state based on the outputs
///
/// The PRNG must be at the beginning of a cycle. The returned clone is
/// positioned where the attacked PRNG now is, so their next outputs match.
pub fn clone(rng: &mut Mt19937) -> Result<Mt19937, Error> {
    if rng.index != 0 && rng.index != N {
        return Err(Error::MisalignedCapture);
    }

    let mut outputs = [0_u32; N];
    for out in outputs.iter_mut() {
        *out = rng.extract_number();
    }

    let recovered = reconstruct(&outputs);

    Ok(Mt19937::from_state(recovered.state, N))
}

/// Rebuild the full state from N consecutive outputs starting at cursor 0
///
/// The recovered generator has cursor 0, so it replays the captured outputs
/// before producing new ones.
pub fn reconstruct(outputs: &[u32; N]) -> Mt19937 {
    let mut state = [0_u32; N];

    for (word, out) in state.iter_mut().zip(outputs.iter()) {
        *word = untemper(*out);
    }

    log::debug!(
        "reconstructed MT19937 state: first word {:#010x}, last word {:#010x}",
        state[0],
        state[N - 1]
    );

    Mt19937::from_state(state, 0)
}

/// Rebuild the full state from a captured slice
///
/// Only checks the capture length; alignment can only be checked by
/// comparing predictions against later output (see [`verify_prediction`]).
pub fn reconstruct_from_slice(outputs: &[u32]) -> Result<Mt19937, Error> {
    let outputs: &[u32; N] = outputs.try_into().map_err(|_| Error::MisalignedCapture)?;

    Ok(reconstruct(outputs))
}

/// Check that a recovered generator predicts the observed outputs
pub fn verify_prediction(recovered: &mut Mt19937, observed: &[u32]) -> Result<(), Error> {
    for (i, obs) in observed.iter().enumerate() {
        let predicted = recovered.extract_number();
        if predicted != *obs {
            log::warn!(
                "prediction mismatch at output {}: predicted {}, observed {}",
                i,
                predicted,
                obs
            );
            return Err(Error::MisalignedCapture);
        }
    }

    Ok(())
}

/// Recover the MT19937 state word used to generate the given random number
pub fn untemper(rand_num: u32) -> u32 {
    // invert the TEMPER_L transformation
    let mut inv_z = undo_right_shift_xor(rand_num, L);

    // invert the TEMPER_T transformation
    inv_z = undo_left_shift_xor_and(inv_z, T, C);

    // invert the TEMPER_S transformation
    inv_z = undo_left_shift_xor_and(inv_z, S, B);

    // invert the TEMPER_U transformation
    undo_right_shift_xor(inv_z, U)
}

/// Solve y = x ^ (x >> shift) for x
///
/// Bit i of x is bit i of y XORed with bit i + shift of x,
/// so the bits are recovered from the top down.
pub fn undo_right_shift_xor(y: u32, shift: u32) -> u32 {
    let mut x = 0_u32;

    for i in (0..W).rev() {
        let mut bit = (y >> i) & 1;
        if i + shift < W {
            bit ^= (x >> (i + shift)) & 1;
        }
        x |= bit << i;
    }

    x
}

/// Solve y = x ^ ((x << shift) & mask) for x
///
/// Bit i of x is bit i of y, XORed with bit i - shift of x where the mask is set,
/// so the bits are recovered from the bottom up.
pub fn undo_left_shift_xor_and(y: u32, shift: u32, mask: u32) -> u32 {
    let mut x = 0_u32;

    for i in 0..W {
        let mut bit = (y >> i) & 1;
        if i >= shift && (mask >> i) & 1 == 1 {
            bit ^= (x >> (i - shift)) & 1;
        }
        x |= bit << i;
    }

    x
}
