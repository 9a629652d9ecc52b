pub(crate) mod common;
pub(crate) mod parallel;
pub(crate) mod sequential;
