use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::element::Element;
use crate::sorting::Step;

/// The row being sorted, shared between the run that writes it and whoever
/// draws it.
///
/// A step is applied under the write lock, and the snapshot handed to the
/// renderer is taken in the same critical section, so readers never see half
/// of a swap.
#[derive(Debug, Clone, Default)]
pub struct SharedSequence {
    inner: Arc<RwLock<Vec<Element>>>,
}

impl SharedSequence {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(elements)),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn snapshot(&self) -> Vec<Element> {
        self.read().clone()
    }

    pub fn apply(&self, step: &Step) {
        step.apply(&mut self.write());
    }

    /// Applies `step` and returns the resulting row.
    pub fn apply_and_snapshot(&self, step: &Step) -> Vec<Element> {
        let mut guard = self.write();
        step.apply(&mut guard);
        guard.clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Element>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Element>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
