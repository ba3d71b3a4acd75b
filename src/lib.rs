mod client;
mod config;
mod errors;
mod harness;
mod stub;
mod topology;
pub mod utils;

pub use client::*;
pub use config::*;
pub use errors::*;
pub use harness::*;
pub use stub::*;
pub use topology::*;
pub use utils::*;

//-----------------------------------------------------------
// Test utils

#[cfg(test)]
pub mod test_utils;
