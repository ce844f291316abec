use rand::{thread_rng, RngCore};

use prng_breaker::mersenne::{clone, mt19937, reconstruct, untemper, verify_prediction};
use prng_breaker::Error;

fn capture(generator: &mut mt19937::Mt19937) -> [u32; mt19937::N] {
    let mut outputs = [0_u32; mt19937::N];
    for out in outputs.iter_mut() {
        *out = generator.extract_number();
    }
    outputs
}

#[test]
fn seed_123_reference_outputs() {
    let expected: [u32; 20] = [
        2991312382, 3062119789, 1228959102, 1840268610, 974319580, 2967327842, 2367878886,
        3088727057, 3090095699, 2109339754, 1817228411, 3350193721, 4212350166, 1764906721,
        2941321312, 2489768049, 2065586814, 601083951, 1684131913, 1722357280,
    ];

    let generator = mt19937::Mt19937::new(123);
    let extracted: Vec<u32> = generator.take(expected.len()).collect();

    assert_eq!(extracted[..], expected[..]);
}

#[test]
fn reconstruct_matches_internal_state() {
    let mut generator = mt19937::Mt19937::new(123);
    let outputs = capture(&mut generator);

    let recovered = reconstruct(&outputs);

    assert_eq!(recovered.index(), 0);
    for (i, (rec, orig)) in recovered.state().iter().zip(generator.state().iter()).enumerate() {
        assert_eq!(rec, orig, "state word {} differs", i);
    }
}

#[test]
fn reconstructed_generator_predicts_future_outputs() {
    let mut generator = mt19937::Mt19937::new(123);
    let outputs = capture(&mut generator);

    let mut recovered = reconstruct(&outputs);

    // cursor 0: the recovered generator first replays the captured window
    for out in outputs.iter() {
        assert_eq!(recovered.extract_number(), *out);
    }

    for _i in 0..1000 {
        assert_eq!(recovered.extract_number(), generator.extract_number());
    }
}

#[test]
fn clone_random_seed() {
    let mut generator = mt19937::Mt19937::new(thread_rng().next_u32());
    let mut clone_rng = clone(&mut generator).unwrap();

    for _i in 0..mt19937::N * 2 {
        assert_eq!(clone_rng.extract_number(), generator.extract_number());
    }
}

#[test]
fn clone_after_full_cycle() {
    let mut generator = mt19937::Mt19937::new(2024);
    let _ = capture(&mut generator);

    let mut clone_rng = clone(&mut generator).unwrap();
    let observed: Vec<u32> = generator.by_ref().take(1000).collect();

    assert!(verify_prediction(&mut clone_rng, &observed).is_ok());
}

#[test]
fn clone_misaligned_capture() {
    let mut generator = mt19937::Mt19937::new(5489);
    for _i in 0..10 {
        let _ = generator.extract_number();
    }

    assert_eq!(clone(&mut generator).unwrap_err(), Error::MisalignedCapture);
}

#[test]
fn untemper_each_output() {
    let mut generator = mt19937::Mt19937::new(thread_rng().next_u32());

    for i in 0..mt19937::N {
        let out = generator.extract_number();
        assert_eq!(untemper(out), generator.state()[i]);
    }
}
