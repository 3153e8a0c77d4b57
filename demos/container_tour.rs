use scapegoat::{SgIntervalMap, SgMultiMap};

// A quick tour of the two containers layered on top of the same scapegoat engine that backs
// `SgMap`/`SgSet`: a bucketed multi-key map, and an interval map with overlap queries.
fn main() {
    // SgMultiMap: repeated keys bucket instead of overwriting, in insertion order.
    let mut hits: SgMultiMap<&str, u32> = SgMultiMap::new();
    hits.insert("/", 200);
    hits.insert("/", 404);
    hits.insert("/", 200);
    hits.insert("/health", 200);

    assert_eq!(hits.count(&"/"), 3);
    assert_eq!(hits.get(&"/"), vec![200, 404, 200]);
    assert_eq!(hits.remove(&"/"), 3);
    assert_eq!(hits.len(), 1);

    // SgIntervalMap: keyed by half-open [lo, hi) ranges, answers overlap queries in O(log n)
    // via a per-node subtree-maximum augmentation.
    let mut schedule: SgIntervalMap<i64, &str> = SgIntervalMap::new();
    schedule.insert((0, 9), "early shift");
    schedule.insert((9, 17), "day shift");
    schedule.insert((17, 24), "night shift");

    assert!(schedule.any((8, 10)));
    assert!(!schedule.any((24, 30)));

    let mut covering = Vec::new();
    schedule.all((16, 18), |_range, shift| covering.push(*shift));
    covering.sort_unstable();
    assert_eq!(covering, vec!["day shift", "night shift"]);
}
