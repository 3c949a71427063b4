use clap::Args;

use crate::algorithm::Algorithm;
use crate::error::ConfigError;

/// Number of distinct `i32` values.
pub const MAX_ALPHABET: u64 = 1 << 32;

/// Above this length the quadratic sorts are flagged as likely to take forever.
pub const QUADRATIC_WARN_LEN: usize = 100_000;

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Number of integers to sort
    #[arg(short = 'n', long = "len", default_value_t = 10_000_000)]
    pub len: usize,

    /// Number of distinct values the generator draws from, centered on zero
    #[arg(short, long, default_value_t = 65_000)]
    pub alphabet: u64,

    /// Seed for the dataset generator
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Timed runs per algorithm, each on a fresh copy of the dataset
    #[arg(short, long, default_value_t = 1)]
    pub repeats: usize,

    /// Algorithm to run; repeat the flag to run several [default: heap, merge, lsb-radix]
    #[arg(short = 'A', long = "algorithm", value_enum)]
    pub algorithms: Vec<Algorithm>,

    /// Do not time the voracious_radix_sort library baseline
    #[arg(long)]
    pub skip_library: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            len: 10_000_000,
            alphabet: 65_000,
            seed: 0,
            repeats: 1,
            algorithms: Vec::new(),
            skip_library: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet == 0 {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.alphabet > MAX_ALPHABET {
            return Err(ConfigError::AlphabetTooLarge(self.alphabet));
        }
        if self.repeats == 0 {
            return Err(ConfigError::ZeroRepeats);
        }
        Ok(())
    }

    /// The selected algorithms in run order, falling back to the defaults.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            return Algorithm::DEFAULTS.to_vec();
        }
        let mut selected = Vec::with_capacity(self.algorithms.len());
        for &algorithm in &self.algorithms {
            if !selected.contains(&algorithm) {
                selected.push(algorithm);
            }
        }
        selected
    }
}
