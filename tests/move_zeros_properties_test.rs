use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zero_mover::{move_zeros, move_zeros_in_place, Strategy};

fn generate(rng: &mut StdRng, zero_ratio: f64) -> Vec<i64> {
    let len = rng.random_range(0..200);
    (0..len)
        .map(|_| {
            if rng.random_bool(zero_ratio) {
                0
            } else {
                rng.random_range(i64::MIN..=i64::MAX)
            }
        })
        .collect()
}

fn multiset(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

/// 所有零都在非零元素之後
fn zeros_after_non_zeros(values: &[i64]) -> bool {
    let first_zero = values.iter().position(|v| *v == 0).unwrap_or(values.len());
    values[first_zero..].iter().all(|v| *v == 0)
}

#[test]
fn test_documented_scenarios() {
    let cases: [(Vec<i64>, Vec<i64>); 5] = [
        (vec![0, 1, 0, 3, 12], vec![1, 3, 12, 0, 0]),
        (vec![], vec![]),
        (vec![0, 0, 0], vec![0, 0, 0]),
        (vec![5, 7, 9], vec![5, 7, 9]),
        (vec![0, 0, 1], vec![1, 0, 0]),
    ];

    for (input, expected) in cases {
        assert_eq!(move_zeros(&input), expected);

        let mut in_place = input.clone();
        move_zeros_in_place(&mut in_place);
        assert_eq!(in_place, expected);
    }
}

#[test]
fn test_properties_over_random_sequences() {
    let mut rng = StdRng::seed_from_u64(20261016);

    for zero_ratio in [0.0, 0.1, 0.5, 0.9, 1.0] {
        for _ in 0..200 {
            let input = generate(&mut rng, zero_ratio);
            let output = Strategy::Compact.apply(input.clone());

            assert_eq!(output.len(), input.len());
            assert_eq!(multiset(&output), multiset(&input));
            assert!(zeros_after_non_zeros(&output), "{:?}", output);

            let input_non_zeros: Vec<i64> = input.iter().copied().filter(|v| *v != 0).collect();
            let output_non_zeros: Vec<i64> = output.iter().copied().filter(|v| *v != 0).collect();
            assert_eq!(output_non_zeros, input_non_zeros);

            assert_eq!(Strategy::FilterPad.apply(input.clone()), output);
            assert_eq!(Strategy::Compact.apply(output.clone()), output);
        }
    }
}

#[test]
fn test_in_place_returns_non_zero_count() {
    let mut values = vec![0, -1, 0, 0, 2, 0];
    let cursor = move_zeros_in_place(&mut values);
    assert_eq!(cursor, 2);
    assert_eq!(&values[..cursor], &[-1, 2]);
    assert!(values[cursor..].iter().all(|v| *v == 0));
}
