pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
