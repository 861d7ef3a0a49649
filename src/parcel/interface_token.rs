use crate::parcel::{Parcel, ParcelError};

impl Parcel {
    /// Writes the request header naming the interface the call is meant for.
    pub fn write_interface_token(&mut self, descriptor: &str) -> Result<(), ParcelError> {
        self.write_str(descriptor)
    }

    /// Reads the request header and checks it names `descriptor`.
    pub fn enforce_interface(&mut self, descriptor: &str) -> Result<(), ParcelError> {
        let actual = self.read_string()?;

        if actual.as_deref() == Some(descriptor) {
            return Ok(());
        }

        Err(ParcelError::InterfaceMismatch {
            expected: descriptor.to_string(),
            actual,
        })
    }
}
