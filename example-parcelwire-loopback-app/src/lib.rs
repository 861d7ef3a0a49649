mod simulated_provider;
pub use simulated_provider::*;

mod wire_tap;
pub use wire_tap::*;
