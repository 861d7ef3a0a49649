mod bound_interface;
pub use bound_interface::*;

pub mod error;
pub use error::RpcCallerError;

mod interface_cache;
pub use interface_cache::*;

mod proxy;
pub use proxy::*;
