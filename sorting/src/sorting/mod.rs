//! The six sorting procedures, written against a [`Tape`] so that every
//! swap or overwrite is observable as a step.
//!
//! Comparisons never produce a step. Only mutations do.

mod bubble;
mod heap_sort;
mod insertion;
mod merge;
mod quick_sort;
mod selection;
mod tape;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::element::Element;
use crate::error::Error;

pub use bubble::bubble_sort;
pub use heap_sort::heap_sort;
pub use insertion::insertion_sort;
pub use merge::{merge_sort, merge_sort_range};
pub use quick_sort::{partition, quick_sort, quick_sort_range};
pub use selection::selection_sort;
pub use tape::{Mutation, Recorder, Step, StepObserver, Tape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    /// Menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble sort",
            Algorithm::Selection => "Selection sort",
            Algorithm::Insertion => "Insertion sort",
            Algorithm::Merge => "Merge sort",
            Algorithm::Quick => "Quick sort",
            Algorithm::Heap => "Heap sort",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
        }
    }

    pub fn sort(self, tape: &mut Tape<'_>) {
        match self {
            Algorithm::Bubble => bubble_sort(tape),
            Algorithm::Selection => selection_sort(tape),
            Algorithm::Insertion => insertion_sort(tape),
            Algorithm::Merge => merge_sort(tape),
            Algorithm::Quick => quick_sort(tape),
            Algorithm::Heap => heap_sort(tape),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted) || a.alias().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownAlgorithm {
                name: wanted.to_string(),
            })
    }
}

/// A finished algorithm run, ready to be replayed.
#[derive(Debug, Clone)]
pub struct Script {
    pub algorithm: Algorithm,
    pub steps: Vec<Step>,
    pub sorted: Vec<Element>,
}

/// Sorts a private copy of `elements` and keeps every step it took.
pub fn record(algorithm: Algorithm, elements: &[Element], skip_noop_steps: bool) -> Script {
    let mut working = elements.to_vec();
    let mut recorder = Recorder::new();
    {
        let mut tape = Tape::new(&mut working, &mut recorder).skip_noop_steps(skip_noop_steps);
        algorithm.sort(&mut tape);
    }
    Script {
        algorithm,
        steps: recorder.into_steps(),
        sorted: working,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// A row whose sort keys are exactly `keys`; `x` records the original slot.
    pub(crate) fn row(keys: &[u32]) -> Vec<Element> {
        keys.iter()
            .enumerate()
            .map(|(i, &k)| Element::new(i as i32, 0, k, 1))
            .collect()
    }

    pub(crate) fn keys(seq: &[Element]) -> Vec<u64> {
        seq.iter().map(Element::sort_key).collect()
    }

    /// Sorts `input` with `algorithm` and returns the keys and the steps taken.
    pub(crate) fn sorted(algorithm: Algorithm, input: &[u32]) -> (Vec<u64>, Vec<Step>) {
        let script = record(algorithm, &row(input), false);
        (keys(&script.sorted), script.steps)
    }
}

#[cfg(test)]
mod test {
    use super::testing::*;
    use super::*;
    use crate::element::initial_layout;

    #[test]
    fn parses_menu_names_and_aliases() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.alias().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!("  QUICK SORT ".parse::<Algorithm>().unwrap(), Algorithm::Quick);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "Bogo sort".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, Error::UnknownAlgorithm { ref name } if name == "Bogo sort"));
    }

    #[test]
    fn initial_layout_is_left_unchanged_by_every_algorithm() {
        let layout = initial_layout();
        for algorithm in Algorithm::ALL {
            let script = record(algorithm, &layout, false);
            assert_eq!(script.sorted, layout, "{algorithm}");
        }
    }

    #[test]
    fn reversed_layout_is_sorted_by_every_algorithm() {
        let mut layout = initial_layout();
        layout.reverse();
        for algorithm in Algorithm::ALL {
            let script = record(algorithm, &layout, false);
            assert_eq!(
                keys(&script.sorted),
                [2500, 10000, 22500, 40000, 62500, 90000],
                "{algorithm}"
            );
        }
    }

    #[test]
    fn replaying_steps_reproduces_the_sorted_copy() {
        let input = row(&[5, 3, 9, 1, 3, 7, 2]);
        for algorithm in Algorithm::ALL {
            let script = record(algorithm, &input, false);
            let mut replay = input.clone();
            for step in &script.steps {
                step.apply(&mut replay);
            }
            assert_eq!(replay, script.sorted, "{algorithm}");
        }
    }

    #[test]
    fn skipping_noop_steps_keeps_the_result() {
        let input = row(&[4, 1, 3, 1, 2]);
        for algorithm in Algorithm::ALL {
            let full = record(algorithm, &input, false);
            let lean = record(algorithm, &input, true);
            assert_eq!(full.sorted, lean.sorted, "{algorithm}");
            assert!(lean.steps.iter().all(|s| s.changed), "{algorithm}");
            assert!(lean.steps.len() <= full.steps.len(), "{algorithm}");
        }
    }

    #[test]
    fn empty_input_takes_no_steps() {
        for algorithm in Algorithm::ALL {
            let (sorted_keys, steps) = sorted(algorithm, &[]);
            assert!(sorted_keys.is_empty());
            assert!(steps.is_empty(), "{algorithm}");
        }
    }
}
