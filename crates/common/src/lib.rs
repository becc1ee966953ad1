//! Pieces shared by the server library and the `server` binary.

pub mod types;
pub mod utils;
