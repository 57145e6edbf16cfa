use core::borrow::Borrow;
use std::{
    collections::HashMap as StdHashMap,
    fmt,
    hash::{BuildHasher, Hash},
    iter::FusedIterator,
    ops::Index,
};

use hashbrown::{
    hash_map::{self, DefaultHashBuilder},
    HashMap,
};
use log::trace;

use crate::{Displaced, GlossError};

/// A hash map whose pairs can be searched from either side.
///
/// [`Gloss`] symmetrically maps terms of a single type: for every stored pair `(a, b)`, `a`
/// looks up `b` and `b` looks up `a`. Every term belongs to at most one pair, so inserting a
/// pair evicts any older pair that held either of its terms. Lookups keep the same complexity
/// as a traditional [`HashMap`].
///
/// Internally the map is made of two tables, a "forward" and a "backward" table, which are
/// mirror images of one another. A pair inserted as `(a, b)` is stored as `a -> b` in the
/// forward table and `b -> a` in the backward table, so each term is stored twice and terms
/// must be [`Clone`] in order to be inserted. As with other hashed collections, it is a logic
/// error for a term to be modified in such a way that its hash or its equality changes while
/// it is in the map.
///
/// Both halves of a pair count as members of the map: [`len`] is always twice the number of
/// pairs. Iteration order is unspecified.
///
/// # Examples
/// ```
/// use gloss::Gloss;
///
/// let mut sizes: Gloss<&str> = Gloss::from([("xs", "5"), ("s", "10"), ("m", "15")]);
///
/// // Both terms of a pair are members ...
/// assert_eq!(sizes.len(), 6);
/// assert_eq!(sizes.pair_count(), 3);
///
/// // ... and either one gets the other
/// assert_eq!(sizes.get("s"), Some(&"10"));
/// assert_eq!(sizes.get("15"), Some(&"m"));
///
/// // Re-pairing a term evicts its old partner entirely
/// sizes.insert("xs", "3");
/// assert!(!sizes.contains("5"));
/// assert_eq!(sizes["3"], "xs");
/// ```
///
/// [`len`]: struct.Gloss.html#method.len
pub struct Gloss<T, S = DefaultHashBuilder> {
    forward: HashMap<T, T, S>,
    backward: HashMap<T, T, S>,
}

impl<T> Gloss<T, DefaultHashBuilder> {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` pairs.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> Gloss<T, S>
where
    S: Clone,
{
    /// Creates an empty map that hashes with `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            forward: HashMap::with_hasher(hash_builder.clone()),
            backward: HashMap::with_hasher(hash_builder),
        }
    }

    /// Creates an empty map with room for `capacity` pairs.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            forward: HashMap::with_capacity_and_hasher(capacity, hash_builder.clone()),
            backward: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }
}

impl<T, S> Gloss<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Gets the partner of a term, searching the forward table first.
    pub fn get<Q>(&self, term: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.forward.get(term).or_else(|| self.backward.get(term))
    }

    /// Does what [`get`] does, but fails with [`GlossError::TermNotFound`] when the term is
    /// absent.
    ///
    /// [`get`]: struct.Gloss.html#method.get
    pub fn try_get<Q>(&self, term: &Q) -> Result<&T, GlossError>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(term).ok_or(GlossError::TermNotFound)
    }

    /// Gets the partner of a term, or the given default when the term is absent.
    pub fn get_or<'a, Q>(&'a self, term: &Q, default: &'a T) -> &'a T
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(term).unwrap_or(default)
    }

    /// Determines if two terms are paired with one another, in either orientation.
    pub fn are_paired<Q>(&self, term: &Q, pair: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        matches!(self.get(term), Some(p) if Borrow::<Q>::borrow(p) == pair)
    }

    /// Returns true if the term is in either half of the map.
    pub fn contains<Q>(&self, term: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.forward.contains_key(term) || self.backward.contains_key(term)
    }

    /// Removes the pair that contains the given term and returns it as it was inserted.
    pub fn remove<Q>(&mut self, term: &Q) -> Option<(T, T)>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove_via_forward(term)
            .or_else(|| self.remove_via_backward(term))
    }

    /// Does what [`remove`] does, but fails with [`GlossError::TermNotFound`] when the term is
    /// absent.
    ///
    /// [`remove`]: struct.Gloss.html#method.remove
    pub fn delete<Q>(&mut self, term: &Q) -> Result<(T, T), GlossError>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove(term).ok_or(GlossError::TermNotFound)
    }

    /// Removes the pair that contains the given term and returns the term's partner.
    pub fn pop<Q>(&mut self, term: &Q) -> Result<T, GlossError>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if let Some((_, right)) = self.remove_via_forward(term) {
            return Ok(right);
        }
        self.remove_via_backward(term)
            .map(|(left, _)| left)
            .ok_or(GlossError::TermNotFound)
    }

    /// Does what [`pop`] does, but returns `default` if the term is absent. The map is left
    /// untouched in that case.
    ///
    /// [`pop`]: struct.Gloss.html#method.pop
    pub fn pop_or<Q>(&mut self, term: &Q, default: T) -> T
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.pop(term).unwrap_or(default)
    }

    /// Keeps only the pairs for which `f(left, right)` returns true. Pairs are given in the
    /// orientation they were inserted in.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let backward = &mut self.backward;
        self.forward.retain(|left, right| {
            let keep = f(left, right);
            if !keep {
                backward.remove(&*right);
            }
            keep
        });
    }

    /// Reserves room for at least `additional` more pairs.
    pub fn reserve(&mut self, additional: usize) {
        self.forward.reserve(additional);
        self.backward.reserve(additional);
    }

    /// Shrinks both tables as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.forward.shrink_to_fit();
        self.backward.shrink_to_fit();
    }

    // Both removers take out a whole pair, so the tables mirror each other again once they
    // return.
    fn remove_via_forward<Q>(&mut self, term: &Q) -> Option<(T, T)>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (left, right) = self.forward.remove_entry(term)?;
        self.backward.remove::<T>(&right);
        Some((left, right))
    }

    fn remove_via_backward<Q>(&mut self, term: &Q) -> Option<(T, T)>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (right, left) = self.backward.remove_entry(term)?;
        self.forward.remove::<T>(&left);
        Some((left, right))
    }
}

impl<T, S> Gloss<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Pairs two terms together.
    ///
    /// Any older pair that holds either term is evicted and returned. Afterwards, `term` gets
    /// `pair` and `pair` gets `term`, and nothing else refers to either.
    ///
    /// The evictions happen in a fixed order: the pair where `term` is the backward key, then
    /// the pair where `pair` is the forward key, then the pair where `term` is the forward key,
    /// and last the pair where `pair` is the backward key. Which side an evicted pair is
    /// reported on follows this order.
    ///
    /// Pairing a term with itself stores a single pair that occupies both tables, so the map
    /// grows by two members like any other pair.
    pub fn insert(&mut self, term: T, pair: T) -> Displaced<T> {
        let term_as_backward = self.remove_via_backward(&term);
        let pair_as_forward = self.remove_via_forward(&pair);
        let term_as_forward = self.remove_via_forward(&term);
        let pair_as_backward = self.remove_via_backward(&pair);
        let digest = Displaced::from((
            term_as_backward.or(term_as_forward),
            pair_as_forward.or(pair_as_backward),
        ));
        if digest.is_some() {
            trace!("insert displaced {} pair(s)", digest.count());
        }
        self.forward.insert(term.clone(), pair.clone());
        self.backward.insert(pair, term);
        digest
    }

    /// Gets the partner of `term`, pairing it with `default` first if the term is absent.
    pub fn set_default(&mut self, term: T, default: T) -> &T {
        if !self.forward.contains_key(&term) {
            if self.backward.contains_key(&term) {
                return self.backward.entry(term).or_insert(default);
            }
            // `term` is in no pair, so only the pair holding `default` can be evicted
            let evicted = self.remove_via_forward::<T>(&default);
            let evicted = evicted.or_else(|| self.remove_via_backward::<T>(&default));
            if evicted.is_some() {
                trace!("set_default displaced 1 pair");
            }
            self.backward.insert(default.clone(), term.clone());
        }
        self.forward.entry(term).or_insert(default)
    }

    /// Removes and returns an arbitrary pair, failing with [`GlossError::EmptyMap`] if there
    /// are none.
    pub fn pop_pair(&mut self) -> Result<(T, T), GlossError> {
        let left = self
            .forward
            .keys()
            .next()
            .cloned()
            .ok_or(GlossError::EmptyMap)?;
        self.remove_via_forward(&left).ok_or(GlossError::EmptyMap)
    }
}

impl<T, S> Gloss<T, S> {
    /// Returns a reference to the map's hash builder.
    pub fn hasher(&self) -> &S {
        self.forward.hasher()
    }

    /// The number of pairs the map can hold without reallocating.
    pub fn capacity(&self) -> usize {
        // The tables always hold the same number of entries
        self.forward.capacity().min(self.backward.capacity())
    }

    /// The number of members, i.e. twice the number of pairs.
    pub fn len(&self) -> usize {
        2 * self.forward.len()
    }

    /// The number of pairs.
    pub fn pair_count(&self) -> usize {
        self.forward.len()
    }

    /// Returns true if the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Removes every pair, keeping the allocated memory.
    pub fn clear(&mut self) {
        self.forward.clear();
        self.backward.clear();
    }

    /// An iterator over every term in the map, both halves of every pair included.
    pub fn terms(&self) -> Terms<'_, T> {
        Terms {
            forward: self.forward.keys(),
            backward: self.backward.keys(),
        }
    }

    /// An iterator over `(term, partner)` for every member of the map. Every pair is yielded
    /// twice, once from each side.
    pub fn items(&self) -> Items<'_, T> {
        Items {
            forward: self.forward.iter(),
            backward: self.backward.iter(),
        }
    }

    /// An iterator over every pair once, in the orientation it was inserted in.
    pub fn forward_pairs(&self) -> ForwardPairs<'_, T> {
        ForwardPairs {
            iter: self.forward.iter(),
        }
    }
}

impl<T, S> Clone for Gloss<T, S>
where
    T: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            backward: self.backward.clone(),
        }
    }
}

impl<T, S> Default for Gloss<T, S>
where
    S: Default,
{
    fn default() -> Self {
        Self {
            forward: HashMap::with_hasher(S::default()),
            backward: HashMap::with_hasher(S::default()),
        }
    }
}

impl<T, S> fmt::Debug for Gloss<T, S>
where
    T: fmt::Debug,
{
    // Only the forward table is shown so that each pair appears once
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Gloss(")?;
        f.debug_map().entries(self.forward.iter()).finish()?;
        f.write_str(")")
    }
}

/// Two maps are equal when they hold the same pairs, regardless of the orientation each pair
/// was inserted in.
impl<T, S> PartialEq for Gloss<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.pair_count() == other.pair_count()
            && self
                .forward_pairs()
                .all(|(left, right)| other.are_paired(left, right))
    }
}

impl<T, S> Eq for Gloss<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T, Q, S> Index<&Q> for Gloss<T, S>
where
    T: Eq + Hash + Borrow<Q>,
    Q: ?Sized + Eq + Hash,
    S: BuildHasher,
{
    type Output = T;

    /// # Panics
    ///
    /// Panics if the term is not in the map.
    #[inline]
    fn index(&self, term: &Q) -> &T {
        self.get(term).expect("term not found in gloss")
    }
}

impl<T, S> Extend<(T, T)> for Gloss<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    #[inline]
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (term, pair) in iter {
            self.insert(term, pair);
        }
    }
}

impl<'a, T, S> Extend<(&'a T, &'a T)> for Gloss<T, S>
where
    T: 'a + Eq + Hash + Clone,
    S: BuildHasher,
{
    #[inline]
    fn extend<I: IntoIterator<Item = (&'a T, &'a T)>>(&mut self, iter: I) {
        for (term, pair) in iter {
            self.insert(term.clone(), pair.clone());
        }
    }
}

impl<T, S> FromIterator<(T, T)> for Gloss<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut digest = Gloss::default();
        digest.extend(iter);
        digest
    }
}

impl<T, const N: usize> From<[(T, T); N]> for Gloss<T>
where
    T: Eq + Hash + Clone,
{
    fn from(pairs: [(T, T); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Pairs are inserted in the source map's iteration order, which is unspecified. When the
/// source uses a value as both a key and a value, which pairs survive depends on that order.
impl<T, H> From<StdHashMap<T, T, H>> for Gloss<T>
where
    T: Eq + Hash + Clone,
{
    fn from(source: StdHashMap<T, T, H>) -> Self {
        source.into_iter().collect()
    }
}

impl<'a, T, S> IntoIterator for &'a Gloss<T, S> {
    type Item = &'a T;
    type IntoIter = Terms<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms()
    }
}

impl<T, S> IntoIterator for Gloss<T, S> {
    type Item = (T, T);
    type IntoIter = IntoIter<T>;

    /// Consumes the map, yielding every pair once.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.forward.into_iter(),
        }
    }
}

/// An iterator over the terms of a `Gloss`.
pub struct Terms<'a, T> {
    forward: hash_map::Keys<'a, T, T>,
    backward: hash_map::Keys<'a, T, T>,
}

impl<T> Clone for Terms<'_, T> {
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            backward: self.backward.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Terms<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Terms<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.forward.next() {
            Some(term) => Some(term),
            None => self.backward.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Terms<'_, T> {
    fn len(&self) -> usize {
        self.forward.len() + self.backward.len()
    }
}

impl<T> FusedIterator for Terms<'_, T> {}

/// An iterator over the `(term, partner)` entries of both halves of a `Gloss`.
pub struct Items<'a, T> {
    forward: hash_map::Iter<'a, T, T>,
    backward: hash_map::Iter<'a, T, T>,
}

impl<T> Clone for Items<'_, T> {
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            backward: self.backward.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Items<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Items<'a, T> {
    type Item = (&'a T, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        match self.forward.next() {
            Some(item) => Some(item),
            None => self.backward.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Items<'_, T> {
    fn len(&self) -> usize {
        self.forward.len() + self.backward.len()
    }
}

impl<T> FusedIterator for Items<'_, T> {}

/// An iterator over the pairs of a `Gloss`, each yielded once.
pub struct ForwardPairs<'a, T> {
    iter: hash_map::Iter<'a, T, T>,
}

impl<T> Clone for ForwardPairs<'_, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardPairs<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for ForwardPairs<'a, T> {
    type Item = (&'a T, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for ForwardPairs<'_, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for ForwardPairs<'_, T> {}

/// An owning iterator over the pairs of a `Gloss`.
pub struct IntoIter<T> {
    iter: hash_map::IntoIter<T, T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.iter.len())
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
