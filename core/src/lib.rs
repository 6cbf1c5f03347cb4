pub mod entry;
pub mod error;
pub mod location;
pub mod output;
pub mod storage;
pub mod store;
pub mod table;
pub mod util;

pub use error::{Error, Result};
