//! Pure directory validation (no IO).
//!
//! Input: a directory model constructed elsewhere (usually by `bounties-repo`).
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod fingerprint;
pub mod checks;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use fingerprint::fingerprint_for_finding;
