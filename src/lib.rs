pub mod cs;
pub mod error;

pub use cs::string;
pub use error::{Result, StringError};
