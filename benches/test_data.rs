use std::collections::BTreeSet;
use std::iter::FromIterator;
use std::sync::LazyLock;

use rand::Rng;
use scapegoat::SgSet;

// Random Test Data ----------------------------------------------------------------------------------------------------

pub struct RandTestData {
    pub keys: Vec<usize>,
    pub get_idxs: Vec<usize>,
    pub remove_idxs: Vec<usize>,
}

impl RandTestData {
    pub fn new(size: usize) -> Self {
        let mut rng = rand::thread_rng();

        RandTestData {
            keys: (0..size).map(|_| rng.gen()).collect(),
            get_idxs: (0..size).map(|_| rng.gen_range(0, size)).collect(),
            remove_idxs: (0..size).map(|_| rng.gen_range(0, size)).collect(),
        }
    }
}

// Init Random Test Data (Immutable, Global) ---------------------------------------------------------------------------

pub static RAND_100: LazyLock<RandTestData> = LazyLock::new(|| RandTestData::new(100));
pub static RAND_1_000: LazyLock<RandTestData> = LazyLock::new(|| RandTestData::new(1_000));
pub static RAND_10_000: LazyLock<RandTestData> = LazyLock::new(|| RandTestData::new(10_000));

pub static SGS_100_RAND: LazyLock<SgSet<usize>> =
    LazyLock::new(|| SgSet::from_iter(RAND_100.keys.clone()));
pub static SGS_1_000_RAND: LazyLock<SgSet<usize>> =
    LazyLock::new(|| SgSet::from_iter(RAND_1_000.keys.clone()));
pub static SGS_10_000_RAND: LazyLock<SgSet<usize>> =
    LazyLock::new(|| SgSet::from_iter(RAND_10_000.keys.clone()));

pub static STD_100_RAND: LazyLock<BTreeSet<usize>> =
    LazyLock::new(|| BTreeSet::from_iter(RAND_100.keys.clone()));
pub static STD_1_000_RAND: LazyLock<BTreeSet<usize>> =
    LazyLock::new(|| BTreeSet::from_iter(RAND_1_000.keys.clone()));
pub static STD_10_000_RAND: LazyLock<BTreeSet<usize>> =
    LazyLock::new(|| BTreeSet::from_iter(RAND_10_000.keys.clone()));

// Sequential Test Data -------------------------------------------------------------------------------------------------

pub struct SeqTestData {
    pub keys: Vec<usize>,
    pub get_idxs: Vec<usize>,
    pub remove_idxs: Vec<usize>,
}

impl SeqTestData {
    pub fn new(size: usize) -> Self {
        SeqTestData {
            keys: (0..size).collect(),
            get_idxs: (0..size).collect(),
            remove_idxs: (0..size).collect(),
        }
    }
}

// Init Sequential Test Data (Immutable, Global) -----------------------------------------------------------------------

pub static SEQ_100: LazyLock<SeqTestData> = LazyLock::new(|| SeqTestData::new(100));
pub static SEQ_1_000: LazyLock<SeqTestData> = LazyLock::new(|| SeqTestData::new(1_000));
pub static SEQ_10_000: LazyLock<SeqTestData> = LazyLock::new(|| SeqTestData::new(10_000));

pub static SGS_100_SEQ: LazyLock<SgSet<usize>> =
    LazyLock::new(|| SgSet::from_iter(SEQ_100.keys.clone()));
pub static SGS_1_000_SEQ: LazyLock<SgSet<usize>> =
    LazyLock::new(|| SgSet::from_iter(SEQ_1_000.keys.clone()));
pub static SGS_10_000_SEQ: LazyLock<SgSet<usize>> =
    LazyLock::new(|| SgSet::from_iter(SEQ_10_000.keys.clone()));

pub static STD_100_SEQ: LazyLock<BTreeSet<usize>> =
    LazyLock::new(|| BTreeSet::from_iter(SEQ_100.keys.clone()));
pub static STD_1_000_SEQ: LazyLock<BTreeSet<usize>> =
    LazyLock::new(|| BTreeSet::from_iter(SEQ_1_000.keys.clone()));
pub static STD_10_000_SEQ: LazyLock<BTreeSet<usize>> =
    LazyLock::new(|| BTreeSet::from_iter(SEQ_10_000.keys.clone()));

// Convenience Builders --------------------------------------------------------------------------------------------------

pub fn sgs_from(data: &[usize]) -> SgSet<usize> {
    SgSet::from_iter(data.iter().copied())
}

pub fn std_from(data: &[usize]) -> BTreeSet<usize> {
    BTreeSet::from_iter(data.iter().copied())
}
