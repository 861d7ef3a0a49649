use parcelwire::{Parcel, ParcelError, Parcelable};

pub const POSITION_MODE_STANDALONE: i32 = 0;
pub const POSITION_MODE_MS_BASED: i32 = 1;
pub const POSITION_MODE_MS_ASSISTED: i32 = 2;

pub const RECURRENCE_PERIODIC: i32 = 0;
pub const RECURRENCE_SINGLE: i32 = 1;

/// How often, and how precisely, the provider should compute fixes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PositionModeOptions {
    pub mode: i32,
    pub recurrence: i32,
    pub min_interval_ms: i32,
    pub preferred_accuracy_meters: i32,
    pub preferred_time_ms: i32,
    /// Added in version 2.
    pub low_power_mode: bool,
}

impl Parcelable for PositionModeOptions {
    fn write_to_parcel(&self, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_envelope(|parcel| {
            parcel.write_i32(self.mode)?;
            parcel.write_i32(self.recurrence)?;
            parcel.write_i32(self.min_interval_ms)?;
            parcel.write_i32(self.preferred_accuracy_meters)?;
            parcel.write_i32(self.preferred_time_ms)?;
            parcel.write_bool(self.low_power_mode)
        })
    }

    fn read_from_parcel(&mut self, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.read_envelope(|fields| {
            fields.read(&mut self.mode)?;
            fields.read(&mut self.recurrence)?;
            fields.read(&mut self.min_interval_ms)?;
            fields.read(&mut self.preferred_accuracy_meters)?;
            fields.read(&mut self.preferred_time_ms)?;
            fields.read(&mut self.low_power_mode)
        })
    }
}
