//! Property-based tests for path decomposition.

use super::{decompose, Flavour, StructuredPath};
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ -]{1,10}(\\.[a-z0-9]{1,4}){0,2}"
}

fn flavour_strategy() -> impl Strategy<Value = Flavour> {
    prop_oneof![Just(Flavour::Windows), Just(Flavour::Posix)]
}

fn raw_path_strategy() -> impl Strategy<Value = (Flavour, String)> {
    (
        flavour_strategy(),
        prop_oneof![Just(""), Just("/"), Just("//"), Just("C:"), Just("C:/")],
        prop::collection::vec(component_strategy(), 0..6),
        prop::bool::ANY,
    )
        .prop_map(|(flavour, anchor, parts, trailing)| {
            let mut raw = format!("{anchor}{}", parts.join("/"));
            if trailing && !parts.is_empty() {
                raw.push('/');
            }
            (flavour, raw)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // decompose(string(p)) == p
    #[test]
    fn roundtrip_through_display((flavour, raw) in raw_path_strategy()) {
        let p = decompose(flavour, [&raw]).unwrap();
        let again = decompose(flavour, [p.to_string()]).unwrap();
        prop_assert_eq!(again, p);
    }

    #[test]
    fn stem_plus_suffix_is_name((flavour, raw) in raw_path_strategy()) {
        let p = decompose(flavour, [&raw]).unwrap();
        prop_assert_eq!(format!("{}{}", p.stem(), p.suffix()), p.name());
    }

    #[test]
    fn suffix_is_last_suffix((flavour, raw) in raw_path_strategy()) {
        let p = decompose(flavour, [&raw]).unwrap();
        let suffixes = p.suffixes();
        match suffixes.last() {
            Some(last) => prop_assert_eq!(last.as_str(), p.suffix()),
            None => prop_assert_eq!(p.suffix(), ""),
        }
    }

    #[test]
    fn depth_counts_parts((flavour, raw) in raw_path_strategy()) {
        let p = decompose(flavour, [&raw]).unwrap();
        let parts = p.parts().len();
        prop_assert_eq!(p.depth(), if parts > 1 { parts - 1 } else { 0 });
    }

    // Splitting a path into components and joining them back is lossless
    #[test]
    fn joining_parts_is_identity(parts in prop::collection::vec(component_strategy(), 1..6)) {
        let whole = StructuredPath::posix(&format!("/{}", parts.join("/"))).unwrap();
        let mut pieces = vec!["/".to_string()];
        pieces.extend(parts);
        let joined = decompose(Flavour::Posix, pieces).unwrap();
        prop_assert_eq!(joined, whole);
    }
}
