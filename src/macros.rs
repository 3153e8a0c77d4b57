#![deny(unused_results)]

/// Create an [`SgMap`][crate::map::SgMap] from a list of key-value pairs.
///
/// # Examples
///
/// ```
/// use scapegoat::{SgMap, sgmap};
///
/// let mut map = sgmap! {
///     "a" => 0x61,
///     "b" => 0x62,
///     "c" => 0x63,
/// };
///
/// assert_eq!(map["a"], 0x61);
/// assert_eq!(map["b"], 0x62);
/// assert_eq!(map["c"], 0x63);
///
/// assert_eq!(map.get("d"), None);
/// assert_eq!(map.len(), 3);
///
/// map.insert("d", 0x64);
/// assert_eq!(map["d"], 0x64);
/// ```
#[macro_export]
macro_rules! sgmap {
    ( $($key:expr => $value:expr),* $(,)? ) => {
        {
            let mut _sg_map = SgMap::new();
            $(
                let _ = _sg_map.insert($key, $value);
            )*
            _sg_map
        }
    };
}

/// Create an [`SgSet`][crate::set::SgSet] from a list of values.
///
/// # Examples
///
/// ```
/// use scapegoat::{SgSet, sgset};
///
/// let mut set = sgset! {
///     "a",
///     "b",
///     "c",
/// };
///
/// assert_eq!(set.get("d"), None);
/// assert_eq!(set.len(), 3);
///
/// set.insert("d");
/// assert_eq!(set.get("d"), Some(&"d"));
/// ```
#[macro_export]
macro_rules! sgset {
    ( $($value:expr),* $(,)? ) => {
        {
            let mut _sg_set = SgSet::new();
            $(
                let _ = _sg_set.insert($value);
            )*
            _sg_set
        }
    };
}

/// Create an [`SgMultiMap`][crate::multimap::SgMultiMap] from a list of key-value pairs.
/// Repeated keys are bucketed, in the order given.
///
/// # Examples
///
/// ```
/// use scapegoat::{SgMultiMap, sgmultimap};
///
/// let map = sgmultimap! {
///     "/" => 200,
///     "/" => 404,
/// };
///
/// assert_eq!(map.count(&"/"), 2);
/// ```
#[macro_export]
macro_rules! sgmultimap {
    ( $($key:expr => $value:expr),* $(,)? ) => {
        {
            let mut _sg_multimap = SgMultiMap::new();
            $(
                _sg_multimap.insert($key, $value);
            )*
            _sg_multimap
        }
    };
}

/// Create an [`SgMultiSet`][crate::multiset::SgMultiSet] from a list of values.
/// Repeated values are bucketed, in the order given.
///
/// # Examples
///
/// ```
/// use scapegoat::{SgMultiSet, sgmultiset};
///
/// let set = sgmultiset! { 1, 1, 2 };
/// assert_eq!(set.count(&1), 2);
/// ```
#[macro_export]
macro_rules! sgmultiset {
    ( $($value:expr),* $(,)? ) => {
        {
            let mut _sg_multiset = SgMultiSet::new();
            $(
                _sg_multiset.insert($value);
            )*
            _sg_multiset
        }
    };
}

/// Create an [`SgIntervalMap`][crate::intervalmap::SgIntervalMap] from a list of
/// `(lo, hi) => value` entries.
///
/// # Examples
///
/// ```
/// use scapegoat::{SgIntervalMap, sgintervalmap};
///
/// let schedule = sgintervalmap! {
///     (0, 10) => "morning",
///     (10, 20) => "afternoon",
/// };
///
/// assert!(schedule.any((5, 15)));
/// ```
#[macro_export]
macro_rules! sgintervalmap {
    ( $(($lo:expr, $hi:expr) => $value:expr),* $(,)? ) => {
        {
            let mut _sg_intervalmap = SgIntervalMap::new();
            $(
                _sg_intervalmap.insert(($lo, $hi), $value);
            )*
            _sg_intervalmap
        }
    };
}
