use clap::ValueEnum;

use crate::heap_sort::heap_sort;
use crate::lsd_radix::lsd_radix_sort;
use crate::merge_sort::merge_sort;
use crate::quadratic::{insertion_sort, selection_sort};

/// Every sort the harness knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Heap,
    Merge,
    LsbRadix,
    Insertion,
    Selection,
}

impl Algorithm {
    pub const DEFAULTS: [Algorithm; 3] = [Algorithm::Heap, Algorithm::Merge, Algorithm::LsbRadix];

    pub const ALL: [Algorithm; 5] = [
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::LsbRadix,
        Algorithm::Insertion,
        Algorithm::Selection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Heap => "heap sort",
            Algorithm::Merge => "mergesort",
            Algorithm::LsbRadix => "lsb_radix sort",
            Algorithm::Insertion => "insertion sort",
            Algorithm::Selection => "selection sort",
        }
    }

    pub fn is_quadratic(self) -> bool {
        matches!(self, Algorithm::Insertion | Algorithm::Selection)
    }

    #[inline]
    pub fn sort(self, data: &mut [i32]) {
        match self {
            Algorithm::Heap => heap_sort(data),
            Algorithm::Merge => merge_sort(data),
            Algorithm::LsbRadix => lsd_radix_sort(data),
            Algorithm::Insertion => insertion_sort(data),
            Algorithm::Selection => selection_sort(data),
        }
    }
}
