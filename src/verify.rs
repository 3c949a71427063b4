use foldhash::fast::RandomState as FoldRandomState;
use std::collections::HashMap;

/// Outcome of checking one algorithm's output.
///
/// Only `matches_reference` decides pass/fail; the other two narrow down what
/// went wrong when it is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub matches_reference: bool,
    pub ordered: bool,
    pub permutation: bool,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        self.matches_reference
    }
}

/// Element-wise equality of two sequences.
pub fn check(control: &[i32], data: &[i32]) -> bool {
    control == data
}

pub fn is_non_decreasing(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// True when both sequences hold the same multiset of values.
pub fn is_permutation(input: &[i32], output: &[i32]) -> bool {
    if input.len() != output.len() {
        return false;
    }
    let mut counts: HashMap<i32, isize, _> = HashMap::with_hasher(FoldRandomState::default());
    for &v in input {
        *counts.entry(v).or_insert(0) += 1;
    }
    for &v in output {
        match counts.get_mut(&v) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

pub fn verify(input: &[i32], control: &[i32], output: &[i32]) -> Verdict {
    let matches_reference = check(control, output);
    Verdict {
        matches_reference,
        ordered: is_non_decreasing(output),
        // Equality with the reference already implies a permutation.
        permutation: matches_reference || is_permutation(input, output),
    }
}
