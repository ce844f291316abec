use thiserror::Error;

/// Errors produced by the state and parameter recovery attacks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no modular inverse of {value} modulo {modulus}")]
    ModularInverseUndefined { value: u64, modulus: u64 },
    #[error("insufficient samples: need at least {required}, got {given}")]
    InsufficientSamples { required: usize, given: usize },
    #[error("captured outputs are not aligned on a regeneration boundary")]
    MisalignedCapture,
    #[error("observed sequence yields no usable modulus")]
    DegenerateModulus,
    #[error("recovered modulus does not fit in 64 bits")]
    ModulusOverflow,
    #[error("invalid LCG parameters (m: {modulus}, a: {multiplier}, c: {increment})")]
    InvalidParameters {
        modulus: u64,
        multiplier: u64,
        increment: u64,
    },
}
