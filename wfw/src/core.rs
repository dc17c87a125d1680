// src/core.rs
pub mod batch;
pub mod counter;
pub mod format;
pub mod frequency;
pub mod loader;

#[cfg(test)]
pub mod test_utils;
