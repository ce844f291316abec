use prng_breaker::lcg::{self, attack, Params};
use prng_breaker::Error;

const SEED: u64 = 339;
const COUNT: usize = 8;

fn known_params() -> Params {
    Params::new(1024, 585, 899).unwrap()
}

#[test]
fn known_parameters_recover_seed() {
    let params = known_params();
    let sequence = lcg::generate(&params, SEED, COUNT);

    let seed = lcg::walk_back(sequence[COUNT - 1], &params, COUNT).unwrap();
    assert_eq!(seed, SEED);

    assert_eq!(lcg::generate(&params, seed, COUNT), sequence);
}

#[test]
fn known_parameters_every_prefix() {
    let params = known_params();
    let sequence = lcg::generate(&params, SEED, COUNT);

    for i in 1..COUNT {
        assert_eq!(
            lcg::walk_back(sequence[i], &params, 1).unwrap(),
            sequence[i - 1]
        );
    }
}

#[test]
fn walk_back_not_invertible() {
    let params = Params::new(8, 4, 1).unwrap();

    assert_eq!(
        lcg::walk_back(5, &params, 3).unwrap_err(),
        Error::ModularInverseUndefined {
            value: 4,
            modulus: 8
        }
    );
}

#[test]
fn unknown_parameters_reproduce_sequence() {
    let sequence = lcg::generate(&known_params(), SEED, COUNT);

    let recovered = lcg::recover(&sequence, COUNT).unwrap();

    // the recovered modulus is always a multiple of the true one
    assert_eq!(recovered.params.modulus() % 1024, 0);
    assert_eq!(
        lcg::generate(&recovered.params, recovered.seed, COUNT),
        sequence
    );
}

#[test]
fn unknown_parameters_longer_sequence() {
    let params = Params::new(2_147_483_647, 48_271, 12_345).unwrap();
    let sequence = lcg::generate(&params, 42, 16);

    let recovered = lcg::recover(&sequence, sequence.len()).unwrap();

    assert_eq!(recovered.params, params);
    assert_eq!(recovered.seed, 42);
}

#[test]
fn unknown_parameters_short_sequence() {
    let sequence = lcg::generate(&known_params(), SEED, 5);

    // five terms only pin the modulus down to 3072, where 585 has no inverse
    assert_eq!(attack::recover_modulus(&sequence).unwrap(), 3072);
    assert_eq!(
        lcg::recover(&sequence, 5).unwrap_err(),
        Error::ModularInverseUndefined {
            value: 585,
            modulus: 3072
        }
    );
}

#[test]
fn insufficient_samples() {
    assert_eq!(
        lcg::recover(&[558, 673, 364], 3).unwrap_err(),
        Error::InsufficientSamples {
            required: 4,
            given: 3
        }
    );
}

#[test]
fn zero_modulus_rejected() {
    assert_eq!(
        Params::new(0, 3, 1).unwrap_err(),
        Error::InvalidParameters {
            modulus: 0,
            multiplier: 3,
            increment: 1
        }
    );
}

#[test]
fn recovered_params_accessors() {
    let sequence = lcg::generate(&known_params(), SEED, COUNT);
    let recovered = lcg::recover(&sequence, COUNT).unwrap();

    assert_eq!(
        (
            recovered.params.modulus(),
            recovered.params.multiplier(),
            recovered.params.increment()
        ),
        (1024, 585, 899)
    );
    assert_eq!(recovered.seed, SEED);
}
