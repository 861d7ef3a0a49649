mod rpc_interface;
pub use rpc_interface::*;
mod rpc_method;
pub use rpc_method::*;
mod macros;
pub use macros::*;
