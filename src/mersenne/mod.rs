pub mod mt19937;
pub mod recovery;

pub use mt19937::{temper, Mt19937};
pub use recovery::{
    clone, reconstruct, reconstruct_from_slice, untemper, verify_prediction,
};
