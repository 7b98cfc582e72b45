#![no_std]

mod contract;
mod errors;
mod events;
mod storage;
mod types;


pub use contract::{DistributionToken, DistributionTokenClient};
pub use errors::Error;
pub use types::{SupplyGroup, TokenMetadata};
