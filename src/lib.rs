pub mod error;
pub mod maximum_flow;

pub use error::{Error, Result};
