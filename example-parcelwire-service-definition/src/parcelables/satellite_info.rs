use parcelwire::{Parcel, ParcelError, Parcelable};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SatelliteInfo {
    pub svid: i32,
    pub constellation: i32,
    /// Carrier-to-noise density in dB-Hz.
    pub cn0_dbhz: f64,
    pub elevation_degrees: f32,
    pub azimuth_degrees: f32,
    pub has_ephemeris: bool,
}

impl Parcelable for SatelliteInfo {
    fn write_to_parcel(&self, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_envelope(|parcel| {
            parcel.write_i32(self.svid)?;
            parcel.write_i32(self.constellation)?;
            parcel.write_f64(self.cn0_dbhz)?;
            parcel.write_f32(self.elevation_degrees)?;
            parcel.write_f32(self.azimuth_degrees)?;
            parcel.write_bool(self.has_ephemeris)
        })
    }

    fn read_from_parcel(&mut self, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.read_envelope(|fields| {
            fields.read(&mut self.svid)?;
            fields.read(&mut self.constellation)?;
            fields.read(&mut self.cn0_dbhz)?;
            fields.read(&mut self.elevation_degrees)?;
            fields.read(&mut self.azimuth_degrees)?;
            fields.read(&mut self.has_ephemeris)
        })
    }
}
