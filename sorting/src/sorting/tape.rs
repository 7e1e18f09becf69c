use std::mem;

use serde::Serialize;
use tracing::trace;

use crate::element::Element;

/// A single data-mutating primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    Swap { i: usize, j: usize },
    Overwrite { index: usize, value: Element },
}

impl Mutation {
    pub fn apply(&self, seq: &mut [Element]) {
        match *self {
            Mutation::Swap { i, j } => seq.swap(i, j),
            Mutation::Overwrite { index, value } => seq[index] = value,
        }
    }

    /// Whether applying this to `seq` would leave it as it is.
    fn is_noop(&self, seq: &[Element]) -> bool {
        match *self {
            Mutation::Swap { i, j } => i == j || seq[i] == seq[j],
            Mutation::Overwrite { index, value } => seq[index] == value,
        }
    }
}

/// Mutations that become visible together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub mutations: Vec<Mutation>,
    /// False when none of the mutations changed the sequence.
    pub changed: bool,
}

impl Step {
    pub fn apply(&self, seq: &mut [Element]) {
        for mutation in &self.mutations {
            mutation.apply(seq);
        }
    }
}

pub trait StepObserver {
    fn on_step(&mut self, step: Step, seq: &[Element]);
}

impl<F> StepObserver for F
where
    F: FnMut(Step, &[Element]),
{
    fn on_step(&mut self, step: Step, seq: &[Element]) {
        self(step, seq)
    }
}

/// Collects every step in order.
#[derive(Debug, Default)]
pub struct Recorder {
    steps: Vec<Step>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl StepObserver for Recorder {
    fn on_step(&mut self, step: Step, _seq: &[Element]) {
        self.steps.push(step);
    }
}

/// The algorithms' only way to touch their sequence.
///
/// Reads are free. `swap` and `overwrite` apply the mutation and then end a
/// step. The `stage_*` variants apply without ending the step, so several
/// mutations can be shown as one; call [`Tape::step`] to close the batch.
pub struct Tape<'a> {
    seq: &'a mut [Element],
    observer: &'a mut dyn StepObserver,
    pending: Vec<Mutation>,
    changed: bool,
    skip_noop_steps: bool,
}

impl<'a> Tape<'a> {
    pub fn new(seq: &'a mut [Element], observer: &'a mut dyn StepObserver) -> Self {
        Self {
            seq,
            observer,
            pending: Vec::new(),
            changed: false,
            skip_noop_steps: false,
        }
    }

    /// Drop steps that leave the sequence unchanged instead of reporting them.
    pub fn skip_noop_steps(mut self, skip: bool) -> Self {
        self.skip_noop_steps = skip;
        self
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    #[inline]
    pub fn key(&self, index: usize) -> u64 {
        self.seq[index].sort_key()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Element {
        self.seq[index]
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.stage_swap(i, j);
        self.step();
    }

    pub fn overwrite(&mut self, index: usize, value: Element) {
        self.stage_overwrite(index, value);
        self.step();
    }

    pub fn stage_swap(&mut self, i: usize, j: usize) {
        self.stage(Mutation::Swap { i, j });
    }

    pub fn stage_overwrite(&mut self, index: usize, value: Element) {
        self.stage(Mutation::Overwrite { index, value });
    }

    fn stage(&mut self, mutation: Mutation) {
        if !mutation.is_noop(self.seq) {
            self.changed = true;
        }
        mutation.apply(self.seq);
        self.pending.push(mutation);
    }

    /// Ends the current batch and hands it to the observer.
    pub fn step(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let step = Step {
            mutations: mem::take(&mut self.pending),
            changed: mem::replace(&mut self.changed, false),
        };
        if self.skip_noop_steps && !step.changed {
            trace!(mutations = step.mutations.len(), "skipping no-op step");
            return;
        }
        self.observer.on_step(step, self.seq);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn row(keys: &[u32]) -> Vec<Element> {
        keys.iter()
            .enumerate()
            .map(|(i, &k)| Element::new(i as i32, 0, k, 1))
            .collect()
    }

    #[test]
    fn swap_is_applied_before_observer_sees_it() {
        let mut seq = row(&[3, 1]);
        let mut seen = Vec::new();
        let mut observer = |step: Step, seq: &[Element]| {
            seen.push((step, seq.iter().map(Element::sort_key).collect::<Vec<_>>()));
        };
        let mut tape = Tape::new(&mut seq, &mut observer);
        tape.swap(0, 1);

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.mutations, [Mutation::Swap { i: 0, j: 1 }]);
        assert!(seen[0].0.changed);
        assert_eq!(seen[0].1, [1, 3]);
    }

    #[test]
    fn staged_mutations_form_one_step() {
        let mut seq = row(&[1, 2, 3]);
        let mut recorder = Recorder::new();
        let value = seq[0];
        {
            let mut tape = Tape::new(&mut seq, &mut recorder);
            tape.stage_overwrite(1, value);
            tape.stage_overwrite(2, value);
            tape.step();
            tape.step();
        }
        assert_eq!(recorder.steps().len(), 1);
        assert_eq!(recorder.steps()[0].mutations.len(), 2);
        assert_eq!(seq[2], value);
    }

    #[test]
    fn self_swap_is_reported_unless_skipped() {
        let mut seq = row(&[1, 2]);
        let mut recorder = Recorder::new();
        Tape::new(&mut seq, &mut recorder).swap(1, 1);
        assert_eq!(recorder.steps().len(), 1);
        assert!(!recorder.steps()[0].changed);

        let mut recorder = Recorder::new();
        Tape::new(&mut seq, &mut recorder)
            .skip_noop_steps(true)
            .swap(1, 1);
        assert!(recorder.steps().is_empty());
    }

    #[test]
    fn overwrite_with_identical_value_is_noop() {
        let mut seq = row(&[4, 5]);
        let same = seq[0];
        let mut recorder = Recorder::new();
        Tape::new(&mut seq, &mut recorder).overwrite(0, same);
        assert!(!recorder.steps()[0].changed);
    }
}
