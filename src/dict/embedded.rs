//! Embedded word lists
//!
//! Word lists compiled into the binary at build time, one full tier and one
//! common tier per supported length.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
include!(concat!(env!("OUT_DIR"), "/common.rs"));

/// Full admissibility list for a length, empty outside 3-9
pub(super) fn full_list(len: usize) -> &'static [&'static str] {
    match len {
        3 => WORDS_3,
        4 => WORDS_4,
        5 => WORDS_5,
        6 => WORDS_6,
        7 => WORDS_7,
        8 => WORDS_8,
        9 => WORDS_9,
        _ => &[],
    }
}

/// Common secret-word pool for a length, empty outside 3-9
pub(super) fn common_list(len: usize) -> &'static [&'static str] {
    match len {
        3 => COMMON_3,
        4 => COMMON_4,
        5 => COMMON_5,
        6 => COMMON_6,
        7 => COMMON_7,
        8 => COMMON_8,
        9 => COMMON_9,
        _ => &[],
    }
}
