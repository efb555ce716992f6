//! Grid text to components: scan, index occurrences, classify.

pub(crate) mod alphabet;
pub(crate) mod classify;
pub(crate) mod occurrences;
pub(crate) mod scanner;
