//! Sampling properties
//!
//! Geometric samplers built from a config hit their scales, stay inside
//! their domains for any valid mean, and reject means on the wrong side.

use proptest::prelude::*;
use quarry::{BitStreamSource, Config, Error, GeometricSampler, Mean};

fn average(values: &[i64]) -> f64 {
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Primary and secondary scales become the means of the config's samplers.
pub fn test_config_scales() {
    let config = Config::default();
    let mut source = config.source();

    let primary: Vec<i64> = config
        .naturals()
        .expect("default scale is valid")
        .samples(&mut source)
        .take(50_000)
        .collect();
    let secondary: Vec<i64> = config
        .secondary_naturals()
        .expect("default secondary scale is valid")
        .samples(&mut source)
        .take(50_000)
        .collect();

    assert!((average(&primary) - 32.0).abs() < 1.0);
    assert!((average(&secondary) - 8.0).abs() < 0.3);
}

/// Forked sources give sub-generators their own reproducible streams.
pub fn test_forked_streams_are_independent() {
    let sampler = GeometricSampler::signed(16).expect("any mean is valid for signed");

    let mut parent = BitStreamSource::example();
    let mut left = parent.fork();
    let mut right = parent.fork();
    let left_values: Vec<i64> = sampler.samples(&mut left).take(100).collect();
    let right_values: Vec<i64> = sampler.samples(&mut right).take(100).collect();
    assert_ne!(left_values, right_values);

    let mut replay = BitStreamSource::example();
    let mut replay_left = replay.fork();
    let replayed: Vec<i64> = sampler.samples(&mut replay_left).take(100).collect();
    assert_eq!(left_values, replayed);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn samples_stay_in_domain(
        numerator in 0i64..200,
        denominator in 1u64..20,
        seed in any::<u32>(),
    ) {
        let mean = Mean::new(numerator, denominator).unwrap();
        let mut source = BitStreamSource::new(&[seed]);

        let natural = GeometricSampler::natural(mean).unwrap();
        prop_assert!(natural.samples(&mut source).take(100).all(|v| v >= 0));

        if numerator as u64 >= denominator {
            let positive = GeometricSampler::positive(mean).unwrap();
            prop_assert!(positive.samples(&mut source).take(100).all(|v| v >= 1));

            let negated = Mean::new(-numerator, denominator).unwrap();
            let negative = GeometricSampler::negative(negated).unwrap();
            prop_assert!(negative.samples(&mut source).take(100).all(|v| v <= -1));

            let nonzero = GeometricSampler::nonzero(negated).unwrap();
            prop_assert!(nonzero.samples(&mut source).take(100).all(|v| v != 0));
        } else {
            prop_assert!(GeometricSampler::positive(mean).is_err());
            prop_assert!(GeometricSampler::nonzero(mean).is_err());
        }
    }

    #[test]
    fn wrong_side_means_are_rejected(magnitude in 1i64..1000) {
        prop_assert!(
            matches!(
                GeometricSampler::natural(-magnitude),
                Err(Error::InvalidMean { variant: "natural", .. })
            ),
            "negative mean accepted for naturals"
        );
        prop_assert!(GeometricSampler::positive(-magnitude).is_err());
        prop_assert!(GeometricSampler::negative(magnitude).is_err());
        prop_assert!(GeometricSampler::signed(-magnitude).is_ok());
    }
}
