use crate::SatelliteInfo;
use parcelwire::{Parcel, ParcelError, Parcelable};

/// Snapshot of the satellites tracked at `timestamp_ns`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SatelliteReport {
    pub timestamp_ns: i64,
    /// `None` when the receiver has no satellite status at all, as opposed
    /// to an empty sky.
    pub satellites: Option<Box<[SatelliteInfo]>>,
    pub label: Option<String>,
}

impl Parcelable for SatelliteReport {
    fn write_to_parcel(&self, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_envelope(|parcel| {
            parcel.write_i64(self.timestamp_ns)?;
            parcel.write_typed_array(self.satellites.as_deref())?;
            parcel.write_string(self.label.as_deref())
        })
    }

    fn read_from_parcel(&mut self, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.read_envelope(|fields| {
            fields.read(&mut self.timestamp_ns)?;
            fields.read_with(&mut self.satellites, Parcel::read_typed_array)?;
            fields.read(&mut self.label)
        })
    }
}
