use crate::{
    constants::{
        MIN_ELEMENT_WIRE_SIZE, NULL_LENGTH_SENTINEL, TYPED_OBJECT_ABSENT, TYPED_OBJECT_PRESENT,
    },
    parcel::{Parcel, ParcelError, ParcelValue, Parcelable},
};

// Containers: nullable records, arrays and lists. A count of -1 stands for a
// null container and is never confused with an empty one (count 0).
impl Parcel {
    /// Writes a non-null record as a bare envelope.
    pub fn write_parcelable<T: Parcelable>(&mut self, val: &T) -> Result<(), ParcelError> {
        val.write_to_parcel(self)
    }

    /// Reads a non-null record written by [`write_parcelable`](Self::write_parcelable).
    pub fn read_parcelable<T: Parcelable>(&mut self) -> Result<T, ParcelError> {
        T::create_from_parcel(self)
    }

    /// Writes a nullable record behind a presence marker.
    pub fn write_typed_object<T: Parcelable>(&mut self, val: Option<&T>) -> Result<(), ParcelError> {
        match val {
            Some(val) => {
                self.write_i32(TYPED_OBJECT_PRESENT)?;
                val.write_to_parcel(self)
            }
            None => self.write_i32(TYPED_OBJECT_ABSENT),
        }
    }

    pub fn read_typed_object<T: Parcelable>(&mut self) -> Result<Option<T>, ParcelError> {
        match self.read_i32()? {
            TYPED_OBJECT_ABSENT => Ok(None),
            _ => T::create_from_parcel(self).map(Some),
        }
    }

    /// Writes a nullable array of records: the count (or -1), then each
    /// element's envelope in order.
    pub fn write_typed_array<T: Parcelable>(&mut self, val: Option<&[T]>) -> Result<(), ParcelError> {
        let Some(items) = val else {
            return self.write_i32(NULL_LENGTH_SENTINEL);
        };

        self.write_count(items.len())?;
        for item in items {
            item.write_to_parcel(self)?;
        }

        Ok(())
    }

    /// Reads an array written by [`write_typed_array`](Self::write_typed_array)
    /// into a fixed-size container.
    pub fn read_typed_array<T: Parcelable>(&mut self) -> Result<Option<Box<[T]>>, ParcelError> {
        Ok(self.read_typed_list()?.map(Vec::into_boxed_slice))
    }

    /// Same wire layout as a typed array.
    pub fn write_typed_list<T: Parcelable>(&mut self, val: Option<&[T]>) -> Result<(), ParcelError> {
        self.write_typed_array(val)
    }

    /// Reads a list of records, preserving insertion order.
    pub fn read_typed_list<T: Parcelable>(&mut self) -> Result<Option<Vec<T>>, ParcelError> {
        let Some(count) = self.read_count()? else {
            return Ok(None);
        };

        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(T::create_from_parcel(self)?);
        }

        Ok(Some(items))
    }

    /// Writes a nullable array of flat values (primitives or strings).
    pub fn write_array<T: ParcelValue>(&mut self, val: Option<&[T]>) -> Result<(), ParcelError> {
        let Some(items) = val else {
            return self.write_i32(NULL_LENGTH_SENTINEL);
        };

        self.write_count(items.len())?;
        for item in items {
            item.write_value(self)?;
        }

        Ok(())
    }

    pub fn read_array<T: ParcelValue>(&mut self) -> Result<Option<Vec<T>>, ParcelError> {
        let Some(count) = self.read_count()? else {
            return Ok(None);
        };

        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(T::read_value(self)?);
        }

        Ok(Some(items))
    }

    /// Writes a nullable byte array packed four bytes to a slot.
    pub fn write_byte_array(&mut self, val: Option<&[u8]>) -> Result<(), ParcelError> {
        let Some(bytes) = val else {
            return self.write_i32(NULL_LENGTH_SENTINEL);
        };

        self.write_count(bytes.len())?;
        self.write_aligned(bytes);
        Ok(())
    }

    pub fn read_byte_array(&mut self) -> Result<Option<Vec<u8>>, ParcelError> {
        let len = self.read_i32()?;

        if len == NULL_LENGTH_SENTINEL {
            return Ok(None);
        }

        let len = usize::try_from(len)
            .map_err(|_| ParcelError::BadValue(format!("negative byte array length {}", len)))?;

        Ok(Some(self.read_aligned(len)?.to_vec()))
    }

    fn write_count(&mut self, len: usize) -> Result<(), ParcelError> {
        let count = i32::try_from(len)
            .map_err(|_| ParcelError::BadValue(format!("{} elements is too many", len)))?;
        self.write_i32(count)
    }

    /// Reads a container count; `None` for a null container. Counts that
    /// cannot fit in the remaining bytes are rejected before allocating.
    fn read_count(&mut self) -> Result<Option<usize>, ParcelError> {
        let count = self.read_i32()?;

        if count == NULL_LENGTH_SENTINEL {
            return Ok(None);
        }

        let count = usize::try_from(count)
            .map_err(|_| ParcelError::BadValue(format!("negative element count {}", count)))?;

        let needed = count.saturating_mul(MIN_ELEMENT_WIRE_SIZE);
        let available = self.data_avail();
        if needed > available {
            return Err(ParcelError::NotEnoughData { needed, available });
        }

        Ok(Some(count))
    }
}
