pub mod utils;

pub use codec;
pub use net;
pub use net::err::{ErrorKind, UtilError};
