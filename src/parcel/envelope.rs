use crate::{
    constants::ENVELOPE_LENGTH_FIELD_SIZE,
    parcel::{Parcel, ParcelError, ParcelValue, Parcelable},
};

// Envelope layout: `[total_byte_length: i32][field_stream ...]`, where the
// length counts itself. The length is back-patched once the fields are in,
// and a reader always leaves the cursor at `start + total_byte_length`
// whatever it consumed, which is what lets longer and shorter encodings of
// the same record interoperate.
impl Parcel {
    /// Records the envelope start and writes a placeholder length.
    pub fn begin_envelope_write(&mut self) -> Result<usize, ParcelError> {
        let start = self.data_position();
        self.write_i32(0)?;
        Ok(start)
    }

    /// Back-patches the length of the envelope opened at `start` and returns
    /// the cursor to the end of its fields.
    pub fn end_envelope_write(&mut self, start: usize) -> Result<(), ParcelError> {
        let end = self.data_position();
        let len = end - start;
        let len = i32::try_from(len)
            .map_err(|_| ParcelError::BadValue(format!("envelope of {} bytes is too large", len)))?;

        self.set_data_position(start)?;
        self.write_i32(len)?;
        self.set_data_position(end)
    }

    /// Reads an envelope's length prefix, returning `(start, declared_length)`.
    ///
    /// A declared length smaller than the length field itself is rejected
    /// before any field is read.
    pub fn begin_envelope_read(&mut self) -> Result<(usize, i32), ParcelError> {
        let start = self.data_position();
        let declared_length = self.read_i32()?;

        if declared_length < ENVELOPE_LENGTH_FIELD_SIZE as i32 {
            return Err(ParcelError::MalformedEnvelope {
                start,
                declared_length,
                reason: "declared length is smaller than the length field",
            });
        }

        Ok((start, declared_length))
    }

    /// Moves the cursor to the declared end of the envelope, skipping any
    /// fields this reader did not consume.
    pub fn end_envelope_read(
        &mut self,
        start: usize,
        declared_length: i32,
    ) -> Result<(), ParcelError> {
        let malformed = |reason| ParcelError::MalformedEnvelope {
            start,
            declared_length,
            reason,
        };

        let len = usize::try_from(declared_length)
            .map_err(|_| malformed("declared length is negative"))?;

        // Positions are bounded by the i32 range of the length fields.
        let end = start
            .checked_add(len)
            .filter(|end| *end <= i32::MAX as usize)
            .ok_or_else(|| malformed("overflow in the size of the envelope"))?;

        if end > self.data_size() {
            return Err(malformed("declared length runs past the end of the parcel"));
        }

        let position = self.data_position();
        if end > position {
            tracing::trace!(
                skipped = end - position,
                "skipping unread envelope fields"
            );
        }

        self.set_data_position(end)
    }

    /// Writes `write_fields` inside an envelope.
    pub fn write_envelope<F>(&mut self, write_fields: F) -> Result<(), ParcelError>
    where
        F: FnOnce(&mut Parcel) -> Result<(), ParcelError>,
    {
        let start = self.begin_envelope_write()?;
        write_fields(self)?;
        self.end_envelope_write(start)
    }

    /// Reads an envelope, handing its fields to `read_fields` through a
    /// length guard.
    ///
    /// The cursor is moved to the declared end of the envelope whether or
    /// not `read_fields` succeeds. If that move fails, its error wins over
    /// the one from `read_fields`.
    pub fn read_envelope<F>(&mut self, read_fields: F) -> Result<(), ParcelError>
    where
        F: FnOnce(&mut EnvelopeFields<'_>) -> Result<(), ParcelError>,
    {
        let (start, declared_length) = self.begin_envelope_read()?;

        let fields_result = {
            let mut fields = EnvelopeFields {
                end: start.saturating_add(declared_length as usize),
                parcel: self,
            };
            read_fields(&mut fields)
        };

        self.end_envelope_read(start, declared_length)?;
        fields_result
    }
}

/// Length-guarded access to the fields of an envelope being read.
///
/// Each `read*` call first checks whether the cursor has reached the
/// envelope's declared end. Once it has, that call and every later one
/// leave their slot untouched, so fields the writer did not know about keep
/// their defaults.
pub struct EnvelopeFields<'p> {
    parcel: &'p mut Parcel,
    end: usize,
}

impl EnvelopeFields<'_> {
    /// True while the envelope still has undecoded bytes.
    pub fn has_more(&self) -> bool {
        self.parcel.data_position() < self.end
    }

    /// Reads a flat value into `slot` if the envelope has more fields.
    pub fn read<T: ParcelValue>(&mut self, slot: &mut T) -> Result<(), ParcelError> {
        self.read_with(slot, T::read_value)
    }

    /// Reads a nested record in place if the envelope has more fields.
    pub fn read_parcelable<T: Parcelable>(&mut self, slot: &mut T) -> Result<(), ParcelError> {
        if self.has_more() {
            slot.read_from_parcel(self.parcel)?;
        }
        Ok(())
    }

    /// Reads a field with a custom reader (arrays, typed objects, ...) if the
    /// envelope has more fields.
    pub fn read_with<T, F>(&mut self, slot: &mut T, read: F) -> Result<(), ParcelError>
    where
        F: FnOnce(&mut Parcel) -> Result<T, ParcelError>,
    {
        if self.has_more() {
            *slot = read(self.parcel)?;
        }
        Ok(())
    }
}
