use std::fmt;

/// The pairs that were evicted from a [`Gloss`] by an insert.
///
/// Inserting `(term, pair)` evicts at most one older pair that contained `term` and at most
/// one older pair that contained `pair`. Evicted pairs are given in the orientation they were
/// stored in.
///
/// # Examples
/// ```rust
/// use gloss::{Displaced, Gloss};
///
/// let mut map: Gloss<&str> = Gloss::from([("a", "1"), ("b", "2")]);
///
/// match map.insert("1", "b") {
///     Displaced::Neither => { /*...*/ },
///     Displaced::ByTerm(old) => { /*...*/ },
///     Displaced::ByPair(old) => { /*...*/ },
///     Displaced::Both(term_side, pair_side) => {
///         assert_eq!(term_side, ("a", "1"));
///         assert_eq!(pair_side, ("b", "2"));
///     },
/// }
/// ```
///
/// [`Gloss`]: crate::Gloss
#[derive(PartialEq, Eq)]
pub enum Displaced<T> {
    /// Nothing was evicted
    Neither,
    /// The pair that held the inserted term was evicted
    ByTerm((T, T)),
    /// The pair that held the inserted partner was evicted
    ByPair((T, T)),
    /// Two distinct pairs were evicted, the term's first
    Both((T, T), (T, T)),
}

use Displaced::*;

impl<T> Displaced<T> {
    /// Returns true if nothing was evicted
    pub fn is_none(&self) -> bool {
        matches!(self, Neither)
    }

    /// Returns the negation of [`is_none`]
    ///
    /// [`is_none`]: enum.Displaced.html#method.is_none
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// The number of evicted pairs
    pub fn count(&self) -> usize {
        match self {
            Neither => 0,
            ByTerm(_) | ByPair(_) => 1,
            Both(_, _) => 2,
        }
    }

    /// Return an optional reference to the pair evicted because of the inserted term
    pub fn by_term(&self) -> Option<&(T, T)> {
        match self {
            ByTerm(p) | Both(p, _) => Some(p),
            _ => None,
        }
    }

    /// Return an optional reference to the pair evicted because of the inserted partner
    pub fn by_pair(&self) -> Option<&(T, T)> {
        match self {
            ByPair(p) | Both(_, p) => Some(p),
            _ => None,
        }
    }

    /// Maps every term of every evicted pair, consuming this value.
    pub fn map<A, F>(self, mut f: F) -> Displaced<A>
    where
        F: FnMut(T) -> A,
    {
        let mut pair = |(l, r): (T, T)| (f(l), f(r));
        match self {
            Neither => Neither,
            ByTerm(p) => ByTerm(pair(p)),
            ByPair(p) => ByPair(pair(p)),
            Both(t, p) => {
                let t = pair(t);
                Both(t, pair(p))
            }
        }
    }
}

impl<T: Clone> Clone for Displaced<T> {
    fn clone(&self) -> Self {
        match self {
            Neither => Neither,
            ByTerm(p) => ByTerm(p.clone()),
            ByPair(p) => ByPair(p.clone()),
            Both(t, p) => Both(t.clone(), p.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Displaced<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Neither => {
                write!(f, "Neither")
            }
            ByTerm(pair) => {
                write!(f, "ByTerm( {pair:?} )")
            }
            ByPair(pair) => {
                write!(f, "ByPair( {pair:?} )")
            }
            Both(t_pair, p_pair) => {
                write!(f, "Both( {t_pair:?}, {p_pair:?} )")
            }
        }
    }
}

impl<T> From<(Option<(T, T)>, Option<(T, T)>)> for Displaced<T> {
    fn from(evicted: (Option<(T, T)>, Option<(T, T)>)) -> Self {
        match evicted {
            (None, None) => Neither,
            (Some(p), None) => ByTerm(p),
            (None, Some(p)) => ByPair(p),
            (Some(t), Some(p)) => Both(t, p),
        }
    }
}

impl<T> From<Displaced<T>> for (Option<(T, T)>, Option<(T, T)>) {
    fn from(displaced: Displaced<T>) -> Self {
        match displaced {
            Neither => (None, None),
            ByTerm(p) => (Some(p), None),
            ByPair(p) => (None, Some(p)),
            Both(t, p) => (Some(t), Some(p)),
        }
    }
}
