mod exception_code;
mod status;
mod transport;
mod transport_error;

pub use exception_code::ExceptionCode;
pub use status::Status;
pub use transport::Transport;
pub use transport_error::TransportError;

/// Selects which remote method a request represents.
///
/// Interface methods live in
/// [`FIRST_CALL_TRANSACTION`](crate::constants::FIRST_CALL_TRANSACTION)
/// ..= [`LAST_CALL_TRANSACTION`](crate::constants::LAST_CALL_TRANSACTION).
pub type TransactionCode = u32;

/// Per-call flags, e.g. [`FLAG_ONEWAY`](crate::constants::FLAG_ONEWAY).
pub type TransactionFlags = u32;
