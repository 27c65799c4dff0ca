//! Pairing properties
//!
//! Round trips in both directions and strict monotonicity of every encoder.

use num_bigint::BigUint;
use proptest::prelude::*;
use quarry::pairing::*;
use std::collections::HashSet;

fn natural() -> impl Strategy<Value = BigUint> {
    proptest::collection::vec(any::<u32>(), 0..5).prop_map(BigUint::new)
}

fn any_pairing() -> impl Strategy<Value = Pairing> {
    prop_oneof![
        Just(Pairing::Interleave),
        Just(Pairing::Logarithmic),
        Just(Pairing::SquareRoot),
    ]
}

fn nat(value: u64) -> BigUint {
    BigUint::from(value)
}

/// The published vectors for every pairing function.
pub fn test_concrete_vectors() {
    assert_eq!(log_mux(&nat(0), 0), nat(0));
    assert_eq!(log_mux(&nat(0), 1), nat(1));
    assert_eq!(log_mux(&nat(1), 0), nat(2));
    assert_eq!(log_mux(&nat(5), 10), nat(11263));
    assert_eq!(log_mux(&nat(500_000), 0), nat(1_000_000));
    assert_eq!(sqrt_mux(&nat(5), &nat(10)), nat(538));
    assert_eq!(sqrt_mux(&nat(7680), &nat(76)), nat(1_000_000));
    assert_eq!(mux(&[nat(5), nat(10)]), nat(102));
    assert_eq!(
        demux(2, &nat(1_000_000)).expect("arity 2 is valid"),
        vec![nat(784), nat(904)]
    );
}

/// Every pairing visits each pair of a finite prefix exactly once.
pub fn test_pairs_visit_each_prefix_once() {
    for pairing in [Pairing::Interleave, Pairing::Logarithmic, Pairing::SquareRoot] {
        let seen: HashSet<(BigUint, BigUint)> = pairing.pairs().take(4096).collect();
        assert_eq!(seen.len(), 4096, "{pairing:?} repeated a pair");
    }

    // The interleaved order covers the 64x64 square in its first 4096 steps.
    let square: HashSet<(BigUint, BigUint)> = Pairing::Interleave.pairs().take(4096).collect();
    for a in 0..64u64 {
        for b in 0..64u64 {
            assert!(square.contains(&(nat(a), nat(b))));
        }
    }
}

proptest! {
    #[test]
    fn mux_round_trips(xs in proptest::collection::vec(natural(), 0..5)) {
        let n = mux(&xs);
        prop_assert_eq!(demux(xs.len(), &n).unwrap(), xs);
    }

    #[test]
    fn demux_round_trips(n in natural(), arity in 1usize..6) {
        let parts = demux(arity, &n).unwrap();
        prop_assert_eq!(parts.len(), arity);
        prop_assert_eq!(mux(&parts), n);
    }

    #[test]
    fn mux_is_monotonic(xs in proptest::collection::vec(natural(), 1..4), index in 0usize..4) {
        let index = index % xs.len();
        let mut bigger = xs.clone();
        bigger[index] += 1u32;
        prop_assert!(mux(&bigger) > mux(&xs));
    }

    #[test]
    fn log_pairing_round_trips(a in natural(), b in 0u64..200) {
        let n = log_mux(&a, b);
        prop_assert_eq!(log_demux(&n), (a.clone(), b));
        prop_assert!(log_mux(&(&a + 1u32), b) > n);
        prop_assert!(log_mux(&a, b + 1) > n);
    }

    #[test]
    fn log_demux_round_trips(n in natural()) {
        let (a, b) = log_demux(&n);
        prop_assert_eq!(log_mux(&a, b), n);
    }

    #[test]
    fn sqrt_pairing_round_trips(a in natural(), b in natural()) {
        let n = sqrt_mux(&a, &b);
        prop_assert_eq!(sqrt_demux(&n), (a.clone(), b.clone()));
        prop_assert!(sqrt_mux(&(&a + 1u32), &b) > n);
        prop_assert!(sqrt_mux(&a, &(&b + 1u32)) > n);
    }

    #[test]
    fn sqrt_demux_round_trips(n in natural()) {
        let (a, b) = sqrt_demux(&n);
        prop_assert_eq!(sqrt_mux(&a, &b), n);
    }

    #[test]
    fn pairing_encode_round_trips(pairing in any_pairing(), a in natural(), b in 0u64..200) {
        let b = nat(b);
        let ordinal = pairing.encode(&a, &b).unwrap();
        prop_assert_eq!(pairing.decode(&ordinal), (a.clone(), b.clone()));
        prop_assert!(pairing.encode(&(&a + 1u32), &b).unwrap() > ordinal);
        prop_assert!(pairing.encode(&a, &(&b + 1u32)).unwrap() > ordinal);
    }

    #[test]
    fn pairing_decode_round_trips(pairing in any_pairing(), n in natural()) {
        let (a, b) = pairing.decode(&n);
        prop_assert_eq!(pairing.encode(&a, &b).unwrap(), n);
    }
}
