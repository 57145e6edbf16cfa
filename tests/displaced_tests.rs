#[cfg(test)]
mod tests {
    use gloss::{Displaced, Gloss};

    #[test]
    fn is_tests() {
        let d: Displaced<&str> = Displaced::ByTerm(("hello", "world"));
        assert!(d.is_some());
        assert!(Displaced::<u64>::Neither.is_none());
    }

    #[test]
    fn accessor_tests() {
        let no: Displaced<u64> = Displaced::Neither;
        let bt: Displaced<u64> = Displaced::ByTerm((1, 2));
        let bp: Displaced<u64> = Displaced::ByPair((3, 4));
        let both: Displaced<u64> = Displaced::Both((1, 2), (3, 4));

        assert_eq!(no.count(), 0);
        assert_eq!(bt.count(), 1);
        assert_eq!(bp.count(), 1);
        assert_eq!(both.count(), 2);

        assert_eq!(no.by_term(), None);
        assert_eq!(bt.by_term(), Some(&(1, 2)));
        assert_eq!(bp.by_term(), None);
        assert_eq!(both.by_term(), Some(&(1, 2)));

        assert_eq!(no.by_pair(), None);
        assert_eq!(bt.by_pair(), None);
        assert_eq!(bp.by_pair(), Some(&(3, 4)));
        assert_eq!(both.by_pair(), Some(&(3, 4)));
    }

    #[test]
    fn map_tests() {
        let both: Displaced<u64> = Displaced::Both((1, 2), (3, 4));
        assert_eq!(
            both.clone().map(|x| x.to_string()),
            Displaced::Both(
                (String::from("1"), String::from("2")),
                (String::from("3"), String::from("4"))
            )
        );
        assert_eq!(Displaced::<u64>::Neither.map(|x| x * 2), Displaced::Neither);
        assert_eq!(
            Displaced::ByPair((3u64, 4)).map(|x| x * 2),
            Displaced::ByPair((6, 8))
        );
    }

    #[test]
    fn conversion_tests() {
        let d: Displaced<u64> = (Some((1, 2)), None).into();
        assert_eq!(d, Displaced::ByTerm((1, 2)));
        let d: Displaced<u64> = (None, Some((3, 4))).into();
        assert_eq!(d, Displaced::ByPair((3, 4)));
        let d: Displaced<u64> = (None, None).into();
        assert_eq!(d, Displaced::Neither);

        let opts: (Option<(u64, u64)>, Option<(u64, u64)>) =
            Displaced::Both((1, 2), (3, 4)).into();
        assert_eq!(opts, (Some((1, 2)), Some((3, 4))));
    }

    #[test]
    fn insert_digest_tests() {
        let mut map: Gloss<u64> = Gloss::from([(1, 2), (3, 4)]);
        // The partner was a forward key
        assert_eq!(map.insert(5, 3), Displaced::ByPair((3, 4)));
        // The partner was a backward key
        assert_eq!(map.insert(6, 2), Displaced::ByPair((1, 2)));
        // The term was a backward key
        assert_eq!(map.insert(3, 7), Displaced::ByTerm((5, 3)));
        // The term was a forward key
        assert_eq!(map.insert(6, 8), Displaced::ByTerm((6, 2)));
        assert_eq!(map, Gloss::from([(3, 7), (6, 8)]));
        assert_eq!(format!("{:?}", map.insert(3, 6)), "Both( (3, 7), (6, 8) )");
    }
}
