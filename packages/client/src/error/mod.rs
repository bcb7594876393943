pub mod classification;
pub mod constructors;
pub mod types;

pub use classification::{classify_io, NetworkErrorClass};
pub use constructors::*;
pub use types::{Error, Kind, Result};
