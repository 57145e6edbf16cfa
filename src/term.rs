use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A term of mixed type, for maps that pair values of different kinds.
///
/// Terms are only equal to terms of the same variant: `Int(1)`, `Float(1.0)` and `Bool(true)`
/// are three distinct terms. Floats are compared by bit pattern after folding `-0.0` into
/// `0.0` and every NaN into one NaN, which keeps [`Eq`] and [`Hash`] consistent.
///
/// # Examples
/// ```
/// use gloss::{Gloss, Term};
///
/// let mut map: Gloss<Term> = Gloss::new();
/// map.insert("xs".into(), 5.into());
/// map.insert(Term::tuple([0.3.into()]), b"bar".as_slice().into());
///
/// assert_eq!(map.get(&Term::from(5)), Some(&Term::from("xs")));
/// assert_eq!(map[&Term::from(b"bar".as_slice())].to_string(), "(0.3,)");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Term {
    /// The absent value. It is a real term and can be paired like any other.
    None,
    /// A boolean
    Bool(bool),
    /// A signed integer
    Int(i64),
    /// An integer above `i64::MAX`. Smaller unsigned values are always stored as `Int`.
    UInt(u64),
    /// A float
    Float(f64),
    /// A string
    Str(String),
    /// A byte string
    Bytes(Vec<u8>),
    /// An immutable sequence of terms
    Tuple(Vec<Term>),
}

impl Term {
    /// Builds a `Tuple` out of the given terms.
    pub fn tuple<I: IntoIterator<Item = Term>>(terms: I) -> Self {
        Term::Tuple(terms.into_iter().collect())
    }

    /// Returns true for `Term::None`
    pub fn is_none(&self) -> bool {
        matches!(self, Term::None)
    }

    /// Returns the inner string of a `Str`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Term::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner integer of an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Term::Int(i) => Some(*i),
            _ => None,
        }
    }
}

fn canonical_bits(float: f64) -> u64 {
    if float.is_nan() {
        f64::NAN.to_bits()
    } else if float == 0.0 {
        0
    } else {
        float.to_bits()
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::None, Term::None) => true,
            (Term::Bool(a), Term::Bool(b)) => a == b,
            (Term::Int(a), Term::Int(b)) => a == b,
            (Term::UInt(a), Term::UInt(b)) => a == b,
            (Term::Float(a), Term::Float(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Term::Str(a), Term::Str(b)) => a == b,
            (Term::Bytes(a), Term::Bytes(b)) => a == b,
            (Term::Tuple(a), Term::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Term::None => {}
            Term::Bool(b) => b.hash(state),
            Term::Int(i) => i.hash(state),
            Term::UInt(u) => u.hash(state),
            Term::Float(f) => canonical_bits(*f).hash(state),
            Term::Str(s) => s.hash(state),
            Term::Bytes(b) => b.hash(state),
            Term::Tuple(t) => t.hash(state),
        }
    }
}

/// Renders terms as literals: `'xs'`, `b'\x00a'`, `(1, 'a')`, `None`, `True`.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::None => f.write_str("None"),
            Term::Bool(true) => f.write_str("True"),
            Term::Bool(false) => f.write_str("False"),
            Term::Int(i) => write!(f, "{i}"),
            Term::UInt(u) => write!(f, "{u}"),
            Term::Float(x) if x.is_nan() => f.write_str("nan"),
            Term::Float(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_positive() { "inf" } else { "-inf" })
            }
            Term::Float(x) => write!(f, "{x:?}"),
            Term::Str(s) => {
                f.write_str("'")?;
                for c in s.chars() {
                    match c {
                        '\\' => f.write_str("\\\\")?,
                        '\'' => f.write_str("\\'")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("'")
            }
            Term::Bytes(bytes) => {
                f.write_str("b'")?;
                for &b in bytes {
                    match b {
                        b'\\' => f.write_str("\\\\")?,
                        b'\'' => f.write_str("\\'")?,
                        b'\n' => f.write_str("\\n")?,
                        b'\r' => f.write_str("\\r")?,
                        b'\t' => f.write_str("\\t")?,
                        0x20..=0x7e => write!(f, "{}", b as char)?,
                        b => write!(f, "\\x{b:02x}")?,
                    }
                }
                f.write_str("'")
            }
            Term::Tuple(terms) => {
                f.write_str("(")?;
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{term}")?;
                }
                if terms.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Bool(b)
    }
}

impl From<i64> for Term {
    fn from(i: i64) -> Self {
        Term::Int(i)
    }
}

impl From<i32> for Term {
    fn from(i: i32) -> Self {
        Term::Int(i.into())
    }
}

impl From<u32> for Term {
    fn from(i: u32) -> Self {
        Term::Int(i.into())
    }
}

impl From<u64> for Term {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => Term::Int(i),
            Err(_) => Term::UInt(u),
        }
    }
}

impl From<f64> for Term {
    fn from(x: f64) -> Self {
        Term::Float(x)
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Str(s.to_owned())
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::Str(s)
    }
}

impl From<&[u8]> for Term {
    fn from(bytes: &[u8]) -> Self {
        Term::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Term {
    fn from(bytes: Vec<u8>) -> Self {
        Term::Bytes(bytes)
    }
}

impl From<Vec<Term>> for Term {
    fn from(terms: Vec<Term>) -> Self {
        Term::Tuple(terms)
    }
}

impl<T: Into<Term>> From<Option<T>> for Term {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Term::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::Term;
    use hashbrown::HashSet;

    #[test]
    fn variant_equality_test() {
        assert_ne!(Term::from(1), Term::from(1.0));
        assert_ne!(Term::from(1), Term::from(true));
        assert_ne!(Term::from("1"), Term::from(b"1".as_slice()));
        assert_eq!(Term::from(0.0), Term::from(-0.0));
        assert_eq!(Term::from(f64::NAN), Term::from(f64::NAN));
        assert_eq!(Term::from(None::<i64>), Term::None);
        assert_eq!(Term::from(5u64), Term::from(5));
        assert_eq!(Term::from(u64::MAX), Term::UInt(u64::MAX));
        assert_ne!(Term::from(u64::MAX), Term::from(u64::MAX - 1));
        assert_ne!(Term::from(u64::MAX), Term::from(u64::MAX as f64));
    }

    #[test]
    fn hash_agrees_with_eq_test() {
        let set: HashSet<Term> = [
            Term::from(0.0),
            Term::from(-0.0),
            Term::from(f64::NAN),
            Term::from(-f64::NAN),
            Term::from(7),
            Term::from(7u32),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn display_test() {
        assert_eq!(Term::from("xs").to_string(), "'xs'");
        assert_eq!(Term::from("it's").to_string(), "'it\\'s'");
        assert_eq!(Term::from(b"b\x00r".as_slice()).to_string(), "b'b\\x00r'");
        assert_eq!(Term::from(0.3).to_string(), "0.3");
        assert_eq!(Term::from(1.0).to_string(), "1.0");
        assert_eq!(Term::from(-3).to_string(), "-3");
        assert_eq!(Term::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Term::None.to_string(), "None");
        assert_eq!(Term::from(false).to_string(), "False");
        assert_eq!(Term::tuple([0.3.into()]).to_string(), "(0.3,)");
        assert_eq!(Term::tuple([]).to_string(), "()");
        assert_eq!(Term::tuple([1.into(), "a".into()]).to_string(), "(1, 'a')");
    }
}
