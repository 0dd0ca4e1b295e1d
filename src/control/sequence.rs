//! Sequence-level combinators over many [`UnsafeOptional`] values at once.
//!
//! [`match_all`] turns a sequence of optionals into one flat, lazily produced
//! sequence: each present element is expanded by one handler, each absent
//! element by another, and the pieces are emitted in input order.
//!
//! The expansion is driven by an explicit cursor (the current input position
//! plus the segment being drained), so stack depth does not grow with the
//! length of the input.
//!
//! # Examples
//!
//! ```rust
//! use tryopt::control::{UnsafeOptional, match_all};
//!
//! let items = vec![UnsafeOptional::some(1), UnsafeOptional::none(), UnsafeOptional::some(2)];
//! let flattened: Vec<i32> = match_all(items, |x| vec![x], || vec![0]).collect();
//! assert_eq!(flattened, vec![1, 0, 2]);
//! ```

use std::iter::FusedIterator;

use super::unsafe_optional::UnsafeOptional;
use crate::typeclass::Foldable;

/// The segment currently being drained by [`MatchAll`].
enum Segment<P, Q> {
    Present(P),
    Absent(Q),
}

/// Lazy iterator returned by [`match_all`].
pub struct MatchAll<I, S, N, P, Q>
where
    P: IntoIterator,
    Q: IntoIterator,
{
    source: I,
    on_some: S,
    on_none: N,
    segment: Option<Segment<P::IntoIter, Q::IntoIter>>,
}

/// Expands every element of `items` and concatenates the results in order.
///
/// `on_some` is applied to the payload of each present element and `on_none`
/// is called once for each absent element. Nothing is evaluated until the
/// returned iterator is advanced.
///
/// # Examples
///
/// ```rust
/// use tryopt::control::{UnsafeOptional, match_all};
///
/// let words = [UnsafeOptional::some("a b"), UnsafeOptional::none()];
/// let tokens: Vec<String> = match_all(
///     words,
///     |line| line.split(' ').map(str::to_string).collect::<Vec<_>>(),
///     || vec!["<none>".to_string()],
/// )
/// .collect();
/// assert_eq!(tokens, vec!["a", "b", "<none>"]);
/// ```
pub fn match_all<T, R, Items, S, N, P, Q>(
    items: Items,
    on_some: S,
    on_none: N,
) -> MatchAll<Items::IntoIter, S, N, P, Q>
where
    Items: IntoIterator<Item = UnsafeOptional<T>>,
    S: FnMut(T) -> P,
    N: FnMut() -> Q,
    P: IntoIterator<Item = R>,
    Q: IntoIterator<Item = R>,
{
    MatchAll {
        source: items.into_iter(),
        on_some,
        on_none,
        segment: None,
    }
}

impl<T, R, I, S, N, P, Q> Iterator for MatchAll<I, S, N, P, Q>
where
    I: Iterator<Item = UnsafeOptional<T>>,
    S: FnMut(T) -> P,
    N: FnMut() -> Q,
    P: IntoIterator<Item = R>,
    Q: IntoIterator<Item = R>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            let drained = match &mut self.segment {
                Some(Segment::Present(segment)) => segment.next(),
                Some(Segment::Absent(segment)) => segment.next(),
                None => None,
            };
            if drained.is_some() {
                return drained;
            }

            // Current segment exhausted (or none yet): advance the cursor.
            let element = self.source.next()?;
            self.segment = Some(match element {
                UnsafeOptional::Some(value) => Segment::Present((self.on_some)(value).into_iter()),
                UnsafeOptional::None => Segment::Absent((self.on_none)().into_iter()),
            });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Segments may be empty or arbitrarily long.
        let (_, upper) = self.source.size_hint();
        if upper == Some(0) && self.segment.is_none() {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<T, R, I, S, N, P, Q> FusedIterator for MatchAll<I, S, N, P, Q>
where
    I: FusedIterator<Item = UnsafeOptional<T>>,
    S: FnMut(T) -> P,
    N: FnMut() -> Q,
    P: IntoIterator<Item = R>,
    Q: IntoIterator<Item = R>,
    P::IntoIter: FusedIterator,
    Q::IntoIter: FusedIterator,
{
}

/// Folds every present payload into `seed`, left to right.
///
/// # Examples
///
/// ```rust
/// use tryopt::control::{UnsafeOptional, fold_all};
///
/// let items = [UnsafeOptional::some(2), UnsafeOptional::none(), UnsafeOptional::some(5)];
/// assert_eq!(fold_all(items, 0, |sum, value| sum + value), 7);
/// ```
pub fn fold_all<T, S, Items, F>(items: Items, seed: S, mut folder: F) -> S
where
    Items: IntoIterator<Item = UnsafeOptional<T>>,
    F: FnMut(S, T) -> S,
{
    items
        .into_iter()
        .fold(seed, |accumulator, element| element.fold_left(accumulator, &mut folder))
}

/// Yields the present payloads only, dropping absent elements.
///
/// A present payload that is itself empty (for example `Some(None)`) is kept.
///
/// # Examples
///
/// ```rust
/// use tryopt::control::{UnsafeOptional, somes};
///
/// let items = [UnsafeOptional::some(None), UnsafeOptional::none(), UnsafeOptional::some(Some(3))];
/// let kept: Vec<Option<i32>> = somes(items).collect();
/// assert_eq!(kept, vec![None, Some(3)]);
/// ```
pub fn somes<T, Items>(items: Items) -> impl Iterator<Item = T>
where
    Items: IntoIterator<Item = UnsafeOptional<T>>,
{
    items.into_iter().flat_map(UnsafeOptional::into_option)
}
