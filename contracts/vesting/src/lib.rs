#![no_std]

mod contract;
mod errors;
mod events;
mod schedule;
mod storage;
mod types;


pub use contract::{VestingContract, VestingContractClient};
pub use errors::Error;
pub use schedule::MONTH;
pub use types::{VestingGroup, VestingSchedule};
