use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_pcg::Pcg32;
use tally_stats::{
    StatsError, Summary, ccd, deviation, dispersion, frequency, mean, median, mode, normalise,
    pearson, range, squares, sum, variance,
};

fn random_values(rng: &mut Pcg32, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.random_range(-50..=50)).collect()
}

#[test]
fn mean_is_sum_over_len() {
    let mut rng = Pcg32::seed_from_u64(11);
    for len in 1..40 {
        let values = random_values(&mut rng, len);
        #[expect(clippy::cast_precision_loss)]
        let expected = sum(&values) / len as f64;
        assert_eq!(mean(&values), Ok(expected));
    }
}

#[test]
fn median_ignores_order() {
    let mut rng = Pcg32::seed_from_u64(23);
    for len in 0..30 {
        let mut values = random_values(&mut rng, len);
        let expected = median(&values);
        values.shuffle(&mut rng);
        assert_eq!(median(&values), expected);
    }
}

#[test]
fn reference_values() {
    assert_eq!(mode(&[1, 2, 2, 3]), vec![2]);
    assert_eq!(mode(&[1, 2, 3]), vec![1, 2, 3]);

    let freq = frequency(&[3, 1, 2, 1]);
    assert_eq!(freq.as_slice(), &[(1, 2), (2, 1), (3, 1)]);
    assert_eq!(freq.keys().collect::<Vec<_>>(), vec![1, 2, 3]);

    assert_eq!(range(&[Some(3), None, Some(1), Some(5)]), Ok((0, 5)));
    assert_eq!(normalise(&[1, 2, 4]), Ok(vec![0.25, 0.5, 1.0]));

    let values = [2, 4, 4, 4, 5, 5, 7, 9];
    assert_eq!(mean(&values), Ok(5.0));
    assert!((variance(&values).unwrap() - 4.0).abs() < 1e-12);

    assert_eq!(pearson(&[1, 2, 3], &[1, 2, 3]), Ok(1.0));
    assert_eq!(pearson(&[1, 2, 3], &[3, 2, 1]), Ok(-1.0));
    assert_eq!(pearson(&[1, 1, 1], &[1, 2, 3]), Ok(0.0));

    assert_eq!(ccd(&[3, 1, 2]), vec![1.0 / 3.0, 1.0, 2.0 / 3.0]);
}

#[test]
fn variance_matches_two_pass_formula() {
    let mut rng = Pcg32::seed_from_u64(37);
    for len in 1..40 {
        let values = random_values(&mut rng, len);
        let mean = mean(&values).unwrap();
        #[expect(clippy::cast_precision_loss)]
        let two_pass = values
            .iter()
            .map(|&v| (f64::from(v) - mean).powi(2))
            .sum::<f64>()
            / len as f64;
        assert!((variance(&values).unwrap() - two_pass).abs() < 1e-9);
    }
}

#[test]
fn ccd_stays_aligned_and_bounded() {
    let mut rng = Pcg32::seed_from_u64(41);
    for len in 1..30 {
        let values = random_values(&mut rng, len);
        let probabilities = ccd(&values);
        assert_eq!(probabilities.len(), values.len());
        assert!(probabilities.iter().all(|&p| p > 0.0 && p <= 1.0));

        // The smallest value is reached by everything
        let (min, _) = range(&values).unwrap();
        for (value, p) in values.iter().zip(&probabilities) {
            if *value == min {
                assert_eq!(*p, 1.0);
            }
        }
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let values = [0.1, 7.3, -2.2, 0.1, 5.5, 1.0e-3];
    let other = [1.0, 0.5, 0.25, 2.0, -1.0, 3.0];

    let run = || {
        (
            sum(&values).to_bits(),
            squares(&values).to_bits(),
            variance(&values).unwrap().to_bits(),
            deviation(&values).unwrap().to_bits(),
            dispersion(&values).unwrap().to_bits(),
            median(&values).unwrap().to_bits(),
            pearson(&values, &other).unwrap().to_bits(),
            ccd(&values)
                .into_iter()
                .map(f64::to_bits)
                .collect::<Vec<_>>(),
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn empty_input_contracts_differ() {
    let empty: [f64; 0] = [];

    // mean, variance and friends refuse empty input
    assert_eq!(mean(&empty), Err(StatsError::EmptyInput));
    assert_eq!(variance(&empty), Err(StatsError::EmptyInput));
    assert_eq!(range(&empty), Err(StatsError::EmptyInput));
    assert_eq!(pearson(&empty, &empty), Err(StatsError::EmptyInput));

    // median reports no value instead of failing
    assert_eq!(median(&empty), None);

    // sequence-shaped results are simply empty
    assert!(mode(&empty).is_empty());
    assert!(frequency(&empty).is_empty());
    assert!(ccd(&empty).is_empty());
    assert_eq!(normalise(&empty), Ok(vec![]));
    assert_eq!(Summary::new(&empty), None);
}

#[test]
fn errors_compose_with_question_mark() -> Result<(), StatsError> {
    let counts = [3, 5, 4, 6, 2];
    let fano = dispersion(&counts)?;
    let spread = deviation(&counts)?;
    assert!((fano - 2.0 / 4.0).abs() < 1e-12);
    assert!((spread - 2.0_f64.sqrt()).abs() < 1e-12);
    Ok(())
}

#[test]
fn error_messages() {
    assert_eq!(
        StatsError::EmptyInput.to_string(),
        "statistic is undefined for an empty sequence"
    );
    assert_eq!(
        StatsError::LengthMismatch { x_len: 4, y_len: 1 }.to_string(),
        "paired sequences differ in length (4 vs 1)"
    );
}

#[test]
fn inputs_are_left_untouched() {
    let values = vec![9, 2, 7, 2];
    let sparse = vec![Some(4), None, Some(1)];

    let _ = median(&values);
    let _ = mode(&values);
    let _ = normalise(&values);
    let _ = ccd(&sparse);
    let _ = range(&sparse);

    assert_eq!(values, vec![9, 2, 7, 2]);
    assert_eq!(sparse, vec![Some(4), None, Some(1)]);
}
