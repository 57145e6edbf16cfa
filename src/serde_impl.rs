use crate::Gloss;
use core::{
    fmt,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};
use serde::{
    de::{SeqAccess, Visitor},
    ser::{SerializeSeq, Serializer},
    Deserializer, {Deserialize, Serialize},
};

pub(crate) struct GlossVisitor<T, S> {
    marker: PhantomData<fn() -> Gloss<T, S>>,
}

impl<T, S> GlossVisitor<T, S> {
    fn new() -> Self {
        GlossVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, T, S> Visitor<'de> for GlossVisitor<T, S>
where
    T: Deserialize<'de> + Eq + Hash + Clone,
    S: BuildHasher + Clone + Default,
{
    type Value = Gloss<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of term pairs")
    }

    // Pairs go through `insert`, so a sequence with repeated terms still yields a bijection
    fn visit_seq<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: SeqAccess<'de>,
    {
        let mut map: Gloss<T, S> =
            Gloss::with_capacity_and_hasher(access.size_hint().unwrap_or(0), Default::default());

        while let Some((term, pair)) = access.next_element::<(T, T)>()? {
            map.insert(term, pair);
        }

        Ok(map)
    }
}

impl<'de, T, S> Deserialize<'de> for Gloss<T, S>
where
    T: Deserialize<'de> + Eq + Hash + Clone,
    S: BuildHasher + Clone + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(GlossVisitor::<T, S>::new())
    }
}

/// Only the forward half is written, so each pair appears once.
impl<T, H> Serialize for Gloss<T, H>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.pair_count()))?;

        for pair in self.forward_pairs() {
            seq.serialize_element(&pair)?;
        }

        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Gloss, Term};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Hash, Debug)]
    struct TestingStruct {
        pub(crate) value: u64,
        pub(crate) data: String,
    }

    fn construct_default_map() -> Gloss<TestingStruct> {
        (0..10)
            .map(|i| (TestingStruct::from_value(i), TestingStruct::from_value(i + 100)))
            .collect()
    }

    #[test]
    fn serialize_deserialize_test() {
        let map = construct_default_map();
        let jsonified: String =
            serde_json::to_string(&map).expect("Unable to convert data to json!");
        println!("JSON: {jsonified}");
        let reconsituted: Gloss<TestingStruct> =
            serde_json::from_str(&jsonified).expect("Unable to convert json to gloss!");
        println!("From json: {reconsituted:?}");
        assert_eq!(map, reconsituted);
    }

    #[test]
    fn mixed_terms_test() {
        let map: Gloss<Term> = Gloss::from([
            (Term::from("foo"), Term::from(b"bar".as_slice())),
            (Term::from(3), Term::tuple([0.3.into()])),
            (Term::None, Term::from(true)),
        ]);
        let jsonified = serde_json::to_string(&map).expect("Unable to convert data to json!");
        let reconsituted: Gloss<Term> =
            serde_json::from_str(&jsonified).expect("Unable to convert json to gloss!");
        assert_eq!(map, reconsituted);
    }

    #[test]
    fn repeated_terms_deserialize_test() {
        let map: Gloss<String> = serde_json::from_str(r#"[["a", "b"], ["b", "c"], ["c", "a"]]"#)
            .expect("Unable to convert json to gloss!");
        assert_eq!(map.len(), 2);
        assert!(map.are_paired("c", "a"));
    }

    impl TestingStruct {
        pub(crate) fn from_value(value: u64) -> Self {
            Self {
                value,
                data: value.to_string(),
            }
        }
    }
}
