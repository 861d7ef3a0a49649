use crate::parcel::{Parcel, ParcelError};

/// A structured record that can be written to and restored from a
/// [`Parcel`].
///
/// Implementations wrap their fields in an envelope
/// ([`Parcel::write_envelope`] / [`Parcel::read_envelope`]) so that readers
/// built against an older or newer field list can still decode the common
/// prefix. Reading happens in place: fields the encoded record does not carry
/// keep whatever value they held, which for a freshly defaulted record is
/// their default.
pub trait Parcelable: Default {
    /// Serialize this record into the given [`Parcel`].
    fn write_to_parcel(&self, parcel: &mut Parcel) -> Result<(), ParcelError>;

    /// Overwrite this record's fields from the given [`Parcel`].
    fn read_from_parcel(&mut self, parcel: &mut Parcel) -> Result<(), ParcelError>;

    /// Decode a fresh record, starting from its defaults.
    fn create_from_parcel(parcel: &mut Parcel) -> Result<Self, ParcelError> {
        let mut out = Self::default();
        out.read_from_parcel(parcel)?;
        Ok(out)
    }
}
