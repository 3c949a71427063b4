use std::time::Duration;

use tracing::{debug, info, warn};
use voracious_radix_sort::RadixSort;

use crate::config::{Config, QUADRATIC_WARN_LEN};
use crate::dataset::Dataset;
use crate::error::ConfigError;
use crate::timer::{Timer, human_size, human_time};
use crate::verify::{Verdict, verify};

/// Timing and verdict for one sort over every repeat.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub name: &'static str,
    pub repeats: usize,
    pub best: Duration,
    pub total: Duration,
    pub verdict: Verdict,
}

impl RunResult {
    pub fn mean(&self) -> String {
        human_time(self.repeats, self.total)
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub reference: RunResult,
    pub runs: Vec<RunResult>,
}

impl Report {
    pub fn failures(&self) -> impl Iterator<Item = &RunResult> {
        self.runs.iter().filter(|r| !r.verdict.is_correct())
    }

    pub fn all_correct(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Times `sort` over `repeats` fresh copies of `input`. Only the sort call is
/// timed, including whatever it allocates. The last output is returned.
fn time_sort(
    input: &[i32],
    repeats: usize,
    mut sort: impl FnMut(&mut [i32]),
) -> (Vec<i32>, Duration, Duration) {
    let mut best = Duration::MAX;
    let mut total = Duration::ZERO;
    let mut output = Vec::new();
    let mut timer = Timer::start();
    for repeat in 0..repeats {
        output = input.to_vec();
        timer.reset();
        sort(&mut output);
        let elapsed = timer.elapsed();
        debug!(repeat, secs = elapsed.as_secs_f64(), "timed run");
        best = best.min(elapsed);
        total += elapsed;
    }
    (output, best, total)
}

fn print_run(result: &RunResult) {
    if result.repeats == 1 {
        println!("{}: {}", result.name, result.mean());
    } else {
        println!(
            "{}: {} (best {}, {} runs)",
            result.name,
            result.mean(),
            human_time(1, result.best),
            result.repeats
        );
    }
}

fn print_verdict(verdict: &Verdict) {
    if verdict.is_correct() {
        println!("Correct.");
    } else {
        println!("Incorrect.");
    }
}

fn run_one(
    name: &'static str,
    dataset: &Dataset,
    control: &[i32],
    repeats: usize,
    sort: impl FnMut(&mut [i32]),
) -> RunResult {
    let (output, best, total) = time_sort(&dataset.values, repeats, sort);
    let verdict = verify(&dataset.values, control, &output);
    if !verdict.is_correct() {
        warn!(
            algorithm = name,
            ordered = verdict.ordered,
            permutation = verdict.permutation,
            "output differs from reference"
        );
    }
    let result = RunResult {
        name,
        repeats,
        best,
        total,
        verdict,
    };
    print_run(&result);
    print_verdict(&result.verdict);
    result
}

/// Generates the dataset, sorts a reference copy with the standard library,
/// then times and verifies every selected algorithm on its own copy.
pub fn run(config: &Config) -> Result<Report, ConfigError> {
    config.validate()?;
    let algorithms = config.algorithms();

    println!(
        "Sorting {} items over integer alphabet |X| = {}",
        config.len, config.alphabet
    );
    let timer = Timer::start();
    let dataset = Dataset::generate(config.len, config.alphabet, config.seed)?;
    debug!(secs = timer.elapsed_secs(), seed = config.seed, "generated dataset");
    info!(
        alphabet = dataset.alphabet,
        size = %human_size(dataset.size_in_bytes()),
        distinct = dataset.distinct_keys(),
        "dataset ready"
    );

    let (control, best, total) =
        time_sort(&dataset.values, config.repeats, |d| d.sort_unstable());
    let reference = RunResult {
        name: "std sort_unstable",
        repeats: config.repeats,
        best,
        total,
        verdict: Verdict {
            matches_reference: true,
            ordered: true,
            permutation: true,
        },
    };
    print_run(&reference);

    let mut runs = Vec::with_capacity(algorithms.len() + 1);
    if !config.skip_library {
        runs.push(run_one(
            "voracious radix sort",
            &dataset,
            &control,
            config.repeats,
            |d| d.voracious_sort(),
        ));
    }
    for algorithm in algorithms {
        if algorithm.is_quadratic() && config.len > QUADRATIC_WARN_LEN {
            warn!(
                algorithm = algorithm.name(),
                len = config.len,
                "quadratic sort on a large input"
            );
        }
        runs.push(run_one(
            algorithm.name(),
            &dataset,
            &control,
            config.repeats,
            |d| algorithm.sort(d),
        ));
    }

    Ok(Report { reference, runs })
}
