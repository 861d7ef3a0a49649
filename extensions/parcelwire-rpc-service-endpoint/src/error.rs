use parcelwire::{ParcelError, TransactionCode, TransportError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcServiceEndpointError {
    /// A protocol violation while decoding a request. The transaction is
    /// aborted rather than answered.
    Parcel(ParcelError),
    DuplicateTransaction {
        code: TransactionCode,
        name: &'static str,
    },
    /// The code is outside the method range or collides with a reserved
    /// meta-transaction.
    TransactionCodeOutOfRange {
        code: TransactionCode,
        name: &'static str,
    },
    LockPoisoned,
}

impl fmt::Display for RpcServiceEndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcServiceEndpointError::Parcel(e) => write!(f, "Transaction aborted: {}", e),
            RpcServiceEndpointError::DuplicateTransaction { code, name } => write!(
                f,
                "a handler for transaction {} ({}) is already registered",
                code, name
            ),
            RpcServiceEndpointError::TransactionCodeOutOfRange { code, name } => write!(
                f,
                "transaction {} ({}) is outside the method range",
                code, name
            ),
            RpcServiceEndpointError::LockPoisoned => write!(f, "Handler registry lock poisoned"),
        }
    }
}

impl std::error::Error for RpcServiceEndpointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpcServiceEndpointError::Parcel(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParcelError> for RpcServiceEndpointError {
    fn from(err: ParcelError) -> Self {
        RpcServiceEndpointError::Parcel(err)
    }
}

impl From<RpcServiceEndpointError> for TransportError {
    fn from(err: RpcServiceEndpointError) -> Self {
        match err {
            RpcServiceEndpointError::Parcel(e) => TransportError::Parcel(e),
            other => TransportError::FailedTransaction(other.to_string()),
        }
    }
}
