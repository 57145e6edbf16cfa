use std::hash::BuildHasher;

use log::debug;
use serde_json::Value;

use crate::{Gloss, GlossError, Term};

impl TryFrom<Value> for Term {
    type Error = GlossError;

    /// Arrays and objects are mutable containers and are rejected as terms.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Term::None),
            Value::Bool(b) => Ok(Term::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Term::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Term::UInt(u))
                } else {
                    n.as_f64().map(Term::Float).ok_or_else(|| {
                        GlossError::InvalidTerm(format!("unrepresentable number {n}"))
                    })
                }
            }
            Value::String(s) => Ok(Term::Str(s)),
            Value::Array(_) => Err(GlossError::InvalidTerm("unhashable type: array".to_owned())),
            Value::Object(_) => Err(GlossError::InvalidTerm("unhashable type: object".to_owned())),
        }
    }
}

/// Converts a dynamic source into a list of pairs, in source order.
///
/// The source can be:
///  - `null`, for no pairs
///  - an object, whose keys are string terms and whose values are their partners
///  - an array of two-element arrays
///
/// Every value is checked before anything is returned. Values that can not be terms fail with
/// [`GlossError::InvalidTerm`]; elements that are not two-element arrays, or sources of any
/// other shape, fail with [`GlossError::MalformedPair`].
///
/// # Examples
/// ```
/// use gloss::{pairs_from_json, GlossError, Term};
/// use serde_json::json;
///
/// let pairs = pairs_from_json(json!([["a", 1], [2.5, null]])).unwrap();
/// assert_eq!(pairs[1], (Term::Float(2.5), Term::None));
///
/// assert!(matches!(
///     pairs_from_json(json!([["a", 1, 2]])),
///     Err(GlossError::MalformedPair(_))
/// ));
/// ```
pub fn pairs_from_json(source: Value) -> Result<Vec<(Term, Term)>, GlossError> {
    match source {
        Value::Null => Ok(Vec::new()),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(term, pair)| Term::try_from(pair).map(|pair| (Term::Str(term), pair)))
            .collect(),
        Value::Array(elements) => elements
            .into_iter()
            .enumerate()
            .map(|(i, element)| pair_from_element(i, element))
            .collect(),
        other => Err(GlossError::MalformedPair(format!(
            "expected a mapping or a sequence of pairs, found {}",
            kind(&other)
        ))),
    }
}

fn pair_from_element(index: usize, element: Value) -> Result<(Term, Term), GlossError> {
    match element {
        Value::Array(values) if values.len() == 2 => {
            let mut values = values.into_iter();
            match (values.next(), values.next()) {
                (Some(term), Some(pair)) => Ok((Term::try_from(term)?, Term::try_from(pair)?)),
                _ => Err(GlossError::MalformedPair(format!("element #{index} is not a pair"))),
            }
        }
        Value::Array(values) => Err(GlossError::MalformedPair(format!(
            "element #{index} has length {}; 2 is required",
            values.len()
        ))),
        other => Err(GlossError::MalformedPair(format!(
            "element #{index} is {}, not a pair",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<S> Gloss<Term, S>
where
    S: BuildHasher + Default,
{
    /// Builds a map out of a dynamic source. See [`pairs_from_json`] for the accepted shapes.
    ///
    /// Pairs are inserted one at a time in source order, so later pairs evict earlier ones
    /// exactly as a series of [`insert`] calls would.
    ///
    /// [`insert`]: struct.Gloss.html#method.insert
    pub fn from_json(source: Value) -> Result<Self, GlossError> {
        let mut digest = Self::default();
        digest.update_json(source)?;
        Ok(digest)
    }

    /// Parses JSON text and builds a map out of it with [`from_json`].
    ///
    /// [`from_json`]: struct.Gloss.html#method.from_json
    pub fn from_json_str(source: &str) -> Result<Self, GlossError> {
        Self::from_json(serde_json::from_str(source)?)
    }
}

impl<S> Gloss<Term, S>
where
    S: BuildHasher,
{
    /// Inserts every pair of a dynamic source. The map is untouched if the source is invalid.
    pub fn update_json(&mut self, source: Value) -> Result<(), GlossError> {
        let pairs = pairs_from_json(source)?;
        debug!("updating gloss with {} pair(s) from a dynamic source", pairs.len());
        self.extend(pairs);
        Ok(())
    }
}
