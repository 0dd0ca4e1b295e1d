//! Error-tagged view of a deferred computation as a sequence.

use std::iter::FusedIterator;

use super::error::Failure;
use super::try_option::TryOption;

/// Iterator over the outcome of a [`TryOption`], created by
/// [`TryOption::iter`] or `into_iter`.
///
/// Yields at most one item: `Ok(value)` for a present value, `Err(failure)`
/// for a failure, nothing for an absence. The computation is invoked on the
/// first call to `next` and never again; the iterator cannot be restarted.
///
/// # Examples
///
/// ```rust
/// use tryopt::effect::TryOption;
///
/// let values: Result<Vec<i32>, _> = TryOption::some(4).into_iter().collect();
/// assert_eq!(values, Ok(vec![4]));
/// ```
pub struct TaggedIter<T> {
    pending: Option<TryOption<T>>,
}

impl<T> TaggedIter<T> {
    pub(crate) fn new(computation: TryOption<T>) -> Self {
        Self {
            pending: Some(computation),
        }
    }
}

impl<T: 'static> Iterator for TaggedIter<T> {
    type Item = Result<T, Failure>;

    fn next(&mut self) -> Option<Self::Item> {
        let computation = self.pending.take()?;
        computation.invoke().into_result().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.pending.is_some() {
            (0, Some(1))
        } else {
            (0, Some(0))
        }
    }
}

impl<T: 'static> FusedIterator for TaggedIter<T> {}

impl<T> std::fmt::Debug for TaggedIter<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TaggedIter")
            .field("forced", &self.pending.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Outcome;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_tagged_iter_is_lazy_and_single_shot() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let computation = TryOption::defer(move || {
            counter.set(counter.get() + 1);
            Outcome::Present(1)
        });

        let mut iterator = computation.iter();
        assert_eq!(calls.get(), 0);
        assert_eq!(iterator.size_hint(), (0, Some(1)));

        assert_eq!(iterator.next(), Some(Ok(1)));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.size_hint(), (0, Some(0)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_tagged_iter_absent_is_empty_after_forcing() {
        let mut iterator = TryOption::<i32>::none().iter();
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }
}
