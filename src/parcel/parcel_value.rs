use crate::parcel::{Parcel, ParcelError};

/// A value with a fixed flat encoding: primitives and strings.
///
/// Structured records use [`Parcelable`](crate::Parcelable) instead, which
/// wraps their fields in an envelope.
pub trait ParcelValue: Sized {
    fn write_value(&self, parcel: &mut Parcel) -> Result<(), ParcelError>;

    fn read_value(parcel: &mut Parcel) -> Result<Self, ParcelError>;
}

macro_rules! impl_parcel_value {
    ($ty:ty, $write:ident, $read:ident) => {
        impl ParcelValue for $ty {
            fn write_value(&self, parcel: &mut Parcel) -> Result<(), ParcelError> {
                parcel.$write(*self)
            }

            fn read_value(parcel: &mut Parcel) -> Result<Self, ParcelError> {
                parcel.$read()
            }
        }
    };
}

impl_parcel_value!(bool, write_bool, read_bool);
impl_parcel_value!(i8, write_byte, read_byte);
impl_parcel_value!(i32, write_i32, read_i32);
impl_parcel_value!(u32, write_u32, read_u32);
impl_parcel_value!(i64, write_i64, read_i64);
impl_parcel_value!(u64, write_u64, read_u64);
impl_parcel_value!(f32, write_f32, read_f32);
impl_parcel_value!(f64, write_f64, read_f64);

impl ParcelValue for String {
    fn write_value(&self, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_str(self)
    }

    fn read_value(parcel: &mut Parcel) -> Result<Self, ParcelError> {
        parcel.read_non_null_string()
    }
}

impl ParcelValue for Option<String> {
    fn write_value(&self, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_string(self.as_deref())
    }

    fn read_value(parcel: &mut Parcel) -> Result<Self, ParcelError> {
        parcel.read_string()
    }
}
