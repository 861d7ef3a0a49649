pub mod constants;
pub mod parcel;
pub mod transaction;
pub mod utils;

pub use parcel::{
    EnvelopeFields, Parcel, ParcelError, ParcelPool, ParcelValue, Parcelable, PooledParcel,
};
pub use transaction::{
    ExceptionCode, Status, TransactionCode, TransactionFlags, Transport, TransportError,
};
