use parcelwire::{ExceptionCode, ParcelError, Status, TransportError};
use std::fmt;

/// Represents errors that can occur during a call from the perspective of the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcCallerError {
    /// The request could not be encoded or the reply could not be decoded.
    Parcel(ParcelError),
    /// The transport failed to deliver the call.
    Transport(TransportError),
    /// The remote does not implement this transaction. Callers talking to
    /// older remotes may treat this as a capability signal.
    Unimplemented { method: &'static str },
    /// The remote handler ran and answered with an exception envelope.
    Remote(Status),
    /// The remote object is bound to a different interface.
    InterfaceMismatch {
        expected: &'static str,
        actual: Option<String>,
    },
    /// A caller-side lock was poisoned by a panicking thread.
    LockPoisoned,
}

impl RpcCallerError {
    /// Converts this error into the exception envelope a dispatcher should
    /// answer with when a local implementation fails.
    pub fn into_status(self) -> Status {
        match self {
            RpcCallerError::Remote(status) => status,
            RpcCallerError::Parcel(e) => Status::from(e),
            RpcCallerError::Unimplemented { method } => Status::new_exception(
                ExceptionCode::UnsupportedOperation,
                format!("Method {} is unimplemented.", method),
            ),
            RpcCallerError::InterfaceMismatch { .. } => {
                Status::new_exception(ExceptionCode::Security, self.to_string())
            }
            RpcCallerError::Transport(_) | RpcCallerError::LockPoisoned => {
                Status::new_exception(ExceptionCode::TransactionFailed, self.to_string())
            }
        }
    }
}

impl fmt::Display for RpcCallerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcCallerError::Parcel(e) => write!(f, "Parcel error: {}", e),
            RpcCallerError::Transport(e) => write!(f, "Transport error: {}", e),
            RpcCallerError::Unimplemented { method } => {
                write!(f, "Method {} is unimplemented.", method)
            }
            RpcCallerError::Remote(status) => write!(f, "Remote exception: {}", status),
            RpcCallerError::InterfaceMismatch { expected, actual } => write!(
                f,
                "Remote interface mismatch: expected {:?}, found {:?}",
                expected, actual
            ),
            RpcCallerError::LockPoisoned => write!(f, "Caller lock poisoned"),
        }
    }
}

impl std::error::Error for RpcCallerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpcCallerError::Parcel(e) => Some(e),
            RpcCallerError::Transport(e) => Some(e),
            RpcCallerError::Remote(status) => Some(status),
            _ => None,
        }
    }
}

impl From<ParcelError> for RpcCallerError {
    fn from(e: ParcelError) -> Self {
        RpcCallerError::Parcel(e)
    }
}

impl From<TransportError> for RpcCallerError {
    fn from(e: TransportError) -> Self {
        match e {
            // A protocol violation reported by the remote surfaces as the
            // named parcel error, exactly as if it had happened locally.
            TransportError::Parcel(e) => RpcCallerError::Parcel(e),
            other => RpcCallerError::Transport(other),
        }
    }
}

impl From<Status> for RpcCallerError {
    fn from(status: Status) -> Self {
        RpcCallerError::Remote(status)
    }
}
