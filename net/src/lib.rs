use err::UtilError;
#[doc(hidden)]
use std::result::Result as StdResult;

pub mod err;
pub mod ip;

pub use crate::ip::*;

pub type Result<T> = StdResult<T, UtilError>;
