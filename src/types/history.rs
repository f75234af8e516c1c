//! The shared, append-only log behind one chain.
//!
//! Every probe in a chain holds a handle to the same log; appending happens
//! through [`History::record`] and nothing else. Callers only ever see owned
//! snapshots, so the log itself cannot be corrupted from outside.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::types::step::Step;
use crate::types::StepVec;

#[derive(Debug)]
struct Trace<T> {
    steps: StepVec<T>,
    // Index of the entry that flipped the chain to failed, if any. The
    // until-first-error view is the prefix ending at this entry.
    first_failure: Option<usize>,
}

/// Handle to the log shared by every probe in one chain.
#[derive(Debug)]
pub(crate) struct History<T> {
    inner: Rc<RefCell<Trace<T>>>,
}

// Manual impl: cloning a handle shares the log, it never copies it, and
// must not require T: Clone.
impl<T> Clone for History<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T> History<T> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Trace { steps: StepVec::new(), first_failure: None })),
        }
    }

    /// Appends a step. The first `Failure` outcome pins the cut point for
    /// the until-first-error view; later failures cannot occur because the
    /// chain only fails once.
    pub(crate) fn record(&self, step: Step<T>) {
        #[cfg(feature = "tracing")]
        match &step.outcome {
            crate::types::Outcome::Success(_) => {
                tracing::trace!(op = %step.kind(), "chain step succeeded");
            },
            crate::types::Outcome::Failure(error) => {
                tracing::debug!(op = %step.kind(), %error, "chain step failed");
            },
            crate::types::Outcome::Skipped => {
                tracing::trace!(op = %step.kind(), "chain step skipped, chain already failed");
            },
        }

        let mut trace = self.inner.borrow_mut();
        if trace.first_failure.is_none() && step.outcome.is_failure() {
            trace.first_failure = Some(trace.steps.len());
        }
        trace.steps.push(step);
    }

    /// Owned copy of the full log.
    pub(crate) fn snapshot(&self) -> Vec<Step<T>>
    where
        T: Clone,
    {
        self.inner.borrow().steps.to_vec()
    }

    /// Owned copy of the prefix ending at (and including) the first failure,
    /// or the full log if the chain never failed.
    pub(crate) fn snapshot_until_first_failure(&self) -> Vec<Step<T>>
    where
        T: Clone,
    {
        let trace = self.inner.borrow();
        match trace.first_failure {
            Some(cut) => trace.steps[..=cut].to_vec(),
            None => trace.steps.to_vec(),
        }
    }
}
