use crate::{
    constants::NULL_LENGTH_SENTINEL,
    parcel::{Parcel, ParcelError},
};

// Fixed-width primitives and strings. Integers are little-endian; anything
// narrower than 4 bytes is widened to an i32 slot.
impl Parcel {
    pub fn write_i32(&mut self, val: i32) -> Result<(), ParcelError> {
        self.write_aligned(&val.to_le_bytes());
        Ok(())
    }

    pub fn write_u32(&mut self, val: u32) -> Result<(), ParcelError> {
        self.write_aligned(&val.to_le_bytes());
        Ok(())
    }

    pub fn write_i64(&mut self, val: i64) -> Result<(), ParcelError> {
        self.write_aligned(&val.to_le_bytes());
        Ok(())
    }

    pub fn write_u64(&mut self, val: u64) -> Result<(), ParcelError> {
        self.write_aligned(&val.to_le_bytes());
        Ok(())
    }

    pub fn write_f32(&mut self, val: f32) -> Result<(), ParcelError> {
        self.write_aligned(&val.to_bits().to_le_bytes());
        Ok(())
    }

    pub fn write_f64(&mut self, val: f64) -> Result<(), ParcelError> {
        self.write_aligned(&val.to_bits().to_le_bytes());
        Ok(())
    }

    pub fn write_bool(&mut self, val: bool) -> Result<(), ParcelError> {
        self.write_i32(val as i32)
    }

    pub fn write_byte(&mut self, val: i8) -> Result<(), ParcelError> {
        self.write_i32(val as i32)
    }

    /// Writes a non-null string.
    pub fn write_str(&mut self, val: &str) -> Result<(), ParcelError> {
        let len = i32::try_from(val.len()).map_err(|_| {
            ParcelError::BadValue(format!("string of {} bytes is too long", val.len()))
        })?;

        self.write_i32(len)?;

        // The NUL terminator shares the padded slot with the bytes.
        let mut bytes = Vec::with_capacity(val.len() + 1);
        bytes.extend_from_slice(val.as_bytes());
        bytes.push(0);
        self.write_aligned(&bytes);

        Ok(())
    }

    /// Writes a nullable string. `None` is encoded as length -1, distinct
    /// from the empty string (length 0).
    pub fn write_string(&mut self, val: Option<&str>) -> Result<(), ParcelError> {
        match val {
            Some(s) => self.write_str(s),
            None => self.write_i32(NULL_LENGTH_SENTINEL),
        }
    }

    pub fn read_i32(&mut self) -> Result<i32, ParcelError> {
        Ok(i32::from_le_bytes(self.read_fixed::<4>()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, ParcelError> {
        Ok(u32::from_le_bytes(self.read_fixed::<4>()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, ParcelError> {
        Ok(i64::from_le_bytes(self.read_fixed::<8>()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, ParcelError> {
        Ok(u64::from_le_bytes(self.read_fixed::<8>()?))
    }

    pub fn read_f32(&mut self) -> Result<f32, ParcelError> {
        Ok(f32::from_bits(u32::from_le_bytes(self.read_fixed::<4>()?)))
    }

    pub fn read_f64(&mut self) -> Result<f64, ParcelError> {
        Ok(f64::from_bits(u64::from_le_bytes(self.read_fixed::<8>()?)))
    }

    /// Any non-zero value reads as `true`.
    pub fn read_bool(&mut self) -> Result<bool, ParcelError> {
        Ok(self.read_i32()? != 0)
    }

    pub fn read_byte(&mut self) -> Result<i8, ParcelError> {
        Ok(self.read_i32()? as i8)
    }

    /// Reads a nullable string.
    pub fn read_string(&mut self) -> Result<Option<String>, ParcelError> {
        let len = self.read_i32()?;

        if len == NULL_LENGTH_SENTINEL {
            return Ok(None);
        }

        let len = usize::try_from(len)
            .map_err(|_| ParcelError::BadValue(format!("negative string length {}", len)))?;

        let bytes = self.read_aligned(len + 1)?;
        let (text, terminator) = bytes.split_at(len);

        if terminator != [0] {
            return Err(ParcelError::BadValue(
                "string is missing its NUL terminator".to_string(),
            ));
        }

        String::from_utf8(text.to_vec())
            .map(Some)
            .map_err(|e| ParcelError::BadValue(format!("string is not valid UTF-8: {}", e)))
    }

    /// Reads a string that must not be null.
    pub fn read_non_null_string(&mut self) -> Result<String, ParcelError> {
        self.read_string()?.ok_or(ParcelError::UnexpectedNull)
    }
}
