pub mod alias;
pub mod boundary;
pub mod langs;
pub mod run_common;
pub mod tree;

#[cfg(test)]
mod run_common_tests;
