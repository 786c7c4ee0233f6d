#![no_std]

#[cfg(test)]
extern crate std;

pub mod constants;
pub mod reward;
pub mod ttl;
