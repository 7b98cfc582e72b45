//! Cross-contract tests for the token distribution system: the crowdsale,
//! the vesting engine, the distribution token and the identity verifier
//! deployed together in one test environment.

pub mod utils;

#[cfg(test)]
mod integration;
#[cfg(test)]
mod unit;
