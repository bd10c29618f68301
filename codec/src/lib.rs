use net::err::UtilError;
#[doc(hidden)]
use std::result::Result as StdResult;

pub mod binary;
#[cfg(feature = "gbk")]
pub mod charset;
pub mod encoding;

pub type Result<T> = StdResult<T, UtilError>;
