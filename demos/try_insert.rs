use scapegoat::SgMap;

// Identity permutation fill: (0, 0), (1, 1), (2, 2), ... , (n, n). `try_insert` surfaces
// allocator exhaustion as `Err(SgError::AllocFailed)` instead of panicking -- there's no fixed
// capacity to exceed here, so every one of these succeeds.
fn id_perm_fill<K, V>(sgm: &mut SgMap<K, V>, n: usize)
where
    K: From<usize> + Ord,
    V: From<usize>,
{
    sgm.clear();
    for i in 0..n {
        assert!(sgm.try_insert(K::from(i), V::from(i)).is_ok());
    }
    assert_eq!(sgm.len(), n);
}

fn main() {
    let mut sgm: SgMap<usize, usize> = SgMap::new();
    id_perm_fill(&mut sgm, 1024);
    assert_eq!(sgm.len(), 1024);
}
