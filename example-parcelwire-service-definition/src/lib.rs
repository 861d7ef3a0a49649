mod interface;
pub use interface::*;

pub mod methods;

pub mod parcelables;
pub use parcelables::*;

mod proxy;
pub use proxy::*;

mod stub;
pub use stub::*;
