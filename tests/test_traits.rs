use scapegoat::{SgIntervalMap, SgMap, SgMultiMap, SgMultiSet, SgSet};

fn is_default<T: Default>() {}

#[test]
fn test_default_map() {
    is_default::<SgMap<usize, usize>>();
}

#[test]
fn test_default_set() {
    is_default::<SgSet<usize>>();
}

#[test]
fn test_default_multimap() {
    is_default::<SgMultiMap<usize, usize>>();
}

#[test]
fn test_default_multiset() {
    is_default::<SgMultiSet<usize>>();
}

#[test]
fn test_default_intervalmap() {
    is_default::<SgIntervalMap<i64, &'static str>>();
}
