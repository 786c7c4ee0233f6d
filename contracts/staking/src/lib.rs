#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod errors;
mod escrow;
mod events;
mod staking;
mod storage;

#[cfg(test)]
mod tests;

pub use contract::*;
