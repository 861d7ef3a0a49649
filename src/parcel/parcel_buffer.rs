use crate::{constants::PARCEL_ALIGNMENT, parcel::ParcelError};

/// A growable byte buffer with a single read/write cursor.
///
/// A `Parcel` is the unit that crosses the transport: a request is written
/// into one, delivered, and read back on the other side from position 0.
/// Writes land at the cursor (overwriting or extending the data), which is
/// what lets an envelope back-patch its own length once its fields are in.
///
/// Every value is padded to a 4-byte boundary, so positions observed between
/// values are always aligned.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Parcel {
    data: Vec<u8>,
    position: usize,
}

impl Parcel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps received bytes for reading; the cursor starts at 0.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data, position: 0 }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Total number of bytes held.
    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    /// Current cursor position. Never more than [`data_size`](Self::data_size).
    pub fn data_position(&self) -> usize {
        self.position
    }

    /// Bytes between the cursor and the end of the data.
    pub fn data_avail(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Moves the cursor. `position` must be within `0..=data_size()`.
    pub fn set_data_position(&mut self, position: usize) -> Result<(), ParcelError> {
        if position > self.data.len() {
            return Err(ParcelError::PositionOutOfBounds {
                position,
                size: self.data.len(),
            });
        }

        self.position = position;
        Ok(())
    }

    /// Drops all data and rewinds the cursor, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
        self.position = 0;
    }

    /// Fails with `UnexpectedTrailingData` if any bytes remain unread.
    pub fn enforce_no_data_avail(&self) -> Result<(), ParcelError> {
        match self.data_avail() {
            0 => Ok(()),
            remaining => Err(ParcelError::UnexpectedTrailingData { remaining }),
        }
    }

    /// Writes `bytes` at the cursor followed by zero padding up to the next
    /// 4-byte boundary.
    pub(crate) fn write_aligned(&mut self, bytes: &[u8]) {
        let padded = pad_size(bytes.len());
        let end = self.position + padded;

        if end > self.data.len() {
            self.data.resize(end, 0);
        }

        self.data[self.position..self.position + bytes.len()].copy_from_slice(bytes);
        self.data[self.position + bytes.len()..end].fill(0);
        self.position = end;
    }

    /// Returns the next `len` bytes and advances past them and their padding.
    pub(crate) fn read_aligned(&mut self, len: usize) -> Result<&[u8], ParcelError> {
        let padded = pad_size(len);
        let available = self.data_avail();

        if padded > available {
            return Err(ParcelError::NotEnoughData {
                needed: padded,
                available,
            });
        }

        let start = self.position;
        self.position += padded;
        Ok(&self.data[start..start + len])
    }

    pub(crate) fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], ParcelError> {
        let bytes = self.read_aligned(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }
}

/// Rounds `len` up to the parcel alignment.
#[inline]
pub(crate) fn pad_size(len: usize) -> usize {
    (len + PARCEL_ALIGNMENT - 1) & !(PARCEL_ALIGNMENT - 1)
}
