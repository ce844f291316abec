#![no_std]

extern crate alloc;

mod error;

pub mod lcg;
pub mod mersenne;
pub mod modular;

pub use error::Error;
