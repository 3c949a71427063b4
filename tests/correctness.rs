use int_sort_bench::Algorithm;
use int_sort_bench::dataset::Dataset;
use int_sort_bench::verify::{is_non_decreasing, is_permutation};

fn sorted(values: &[i32]) -> Vec<i32> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

fn random_inputs() -> Vec<Vec<i32>> {
    let mut rng = fastrand::Rng::with_seed(0xC0FFEE);
    let mut inputs = Vec::new();
    for len in [0, 1, 2, 3, 7, 16, 31, 64, 255, 256, 257, 1000] {
        inputs.push((0..len).map(|_| rng.i32(..)).collect());
        inputs.push((0..len).map(|_| rng.i32(-4..4)).collect());
    }
    inputs
}

#[test]
fn cross_algorithm_agreement() {
    for input in random_inputs() {
        let expected = sorted(&input);
        for algorithm in Algorithm::ALL {
            let mut output = input.clone();
            algorithm.sort(&mut output);
            assert_eq!(output, expected, "{} on {:?}", algorithm.name(), input);
        }
    }
}

#[test]
fn permutation_and_order_preserved() {
    let dataset = Dataset::generate(50_000, 65_000, 11).unwrap();
    for algorithm in Algorithm::DEFAULTS {
        let mut output = dataset.values.clone();
        algorithm.sort(&mut output);
        assert!(is_non_decreasing(&output), "{}", algorithm.name());
        assert!(is_permutation(&dataset.values, &output), "{}", algorithm.name());
    }
}

#[test]
fn sorting_sorted_input_is_identity() {
    let once = sorted(&Dataset::generate(5_000, 1 << 32, 2).unwrap().values);
    for algorithm in Algorithm::ALL {
        let mut twice = once.clone();
        algorithm.sort(&mut twice);
        assert_eq!(twice, once, "{}", algorithm.name());
    }
}

#[test]
fn concrete_scenarios() {
    let cases: [(&[i32], &[i32]); 3] = [
        (&[5, 3, 8, 1, 9, 2], &[1, 2, 3, 5, 8, 9]),
        (&[-5, 3, -8, 1, 0, -2], &[-8, -5, -2, 0, 1, 3]),
        (&[], &[]),
    ];
    for (input, expected) in cases {
        for algorithm in Algorithm::ALL {
            let mut output = input.to_vec();
            algorithm.sort(&mut output);
            assert_eq!(output, expected, "{}", algorithm.name());
        }
    }
}

#[test]
fn boundary_inputs() {
    let all_equal = vec![42; 1000];
    let descending: Vec<i32> = (-2_000..2_000).rev().collect();
    let extremes = vec![i32::MAX, i32::MIN, 0, i32::MAX, -1, i32::MIN, 1];
    for input in [all_equal, descending, extremes] {
        let expected = sorted(&input);
        for algorithm in Algorithm::ALL {
            let mut output = input.clone();
            algorithm.sort(&mut output);
            assert_eq!(output, expected, "{}", algorithm.name());
        }
    }
}

#[test]
fn large_input_merge_and_radix() {
    let dataset = Dataset::generate(1 << 20, 1 << 32, 99).unwrap();
    let expected = sorted(&dataset.values);
    for algorithm in [Algorithm::Merge, Algorithm::LsbRadix, Algorithm::Heap] {
        let mut output = dataset.values.clone();
        algorithm.sort(&mut output);
        assert_eq!(output, expected, "{}", algorithm.name());
    }
}
