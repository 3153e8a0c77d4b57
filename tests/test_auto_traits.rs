use scapegoat::{SgMap, SgMultiMap, SgMultiSet, SgSet};

fn is_auto_trait_friendly<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn test_auto_traits_map() {
    is_auto_trait_friendly::<SgMap<usize, usize>>();
}

#[test]
fn test_auto_traits_set() {
    is_auto_trait_friendly::<SgSet<usize>>();
}

#[test]
fn test_auto_traits_multimap() {
    is_auto_trait_friendly::<SgMultiMap<usize, usize>>();
}

#[test]
fn test_auto_traits_multiset() {
    is_auto_trait_friendly::<SgMultiSet<usize>>();
}
