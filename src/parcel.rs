mod envelope;
mod interface_token;
mod parcel_buffer;
mod parcel_error;
mod parcel_pool;
mod parcel_value;
mod parcelable;
mod primitive_codec;
mod typed_container;

pub use envelope::EnvelopeFields;
pub use parcel_buffer::Parcel;
pub use parcel_error::ParcelError;
pub use parcel_pool::{ParcelPool, PooledParcel};
pub use parcel_value::ParcelValue;
pub use parcelable::Parcelable;
