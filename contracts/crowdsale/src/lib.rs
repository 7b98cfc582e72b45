#![no_std]
#![allow(clippy::too_many_arguments)]

pub mod constants;
mod contract;
mod errors;
mod events;
mod guard;
mod interfaces;
mod phases;
mod storage;
mod types;


pub use contract::{CrowdsaleContract, CrowdsaleContractClient};
pub use errors::Error;
pub use phases::PhaseSchedule;
pub use types::{Phase, SaleConfig};
