use crate::parcel::ParcelError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The remote object is gone.
    DeadObject,
    /// The transaction could not be delivered or completed.
    FailedTransaction(String),
    /// The remote aborted the transaction on a protocol violation.
    Parcel(ParcelError),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::DeadObject => write!(f, "Remote object is dead"),
            TransportError::FailedTransaction(reason) => {
                write!(f, "Transaction failed: {}", reason)
            }
            TransportError::Parcel(e) => write!(f, "Transaction aborted: {}", e),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Parcel(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParcelError> for TransportError {
    fn from(err: ParcelError) -> Self {
        TransportError::Parcel(err)
    }
}
