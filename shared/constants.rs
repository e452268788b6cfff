#![allow(unused)] // Ignore due to all constants not being utilized across all environments

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static ORGANIZATION_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "organization_list.csv"));

pub static COMPRESSED_ORGANIZATION_FILE_NAME: &str = "organization_list.csv.gz";
