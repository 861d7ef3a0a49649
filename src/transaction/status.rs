use crate::{
    parcel::{Parcel, ParcelError},
    transaction::ExceptionCode,
};
use std::fmt;

/// The exception envelope carried at the head of a reply.
///
/// Wire layout: `[code: i32]`, and for any code other than
/// [`ExceptionCode::None`]: `[message: string?][stack_trace_header: i32]`,
/// plus `[service_error: i32]` when the code is
/// [`ExceptionCode::ServiceSpecific`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    exception_code: ExceptionCode,
    message: Option<String>,
    service_specific_error: i32,
}

impl Default for Status {
    fn default() -> Self {
        Self::ok()
    }
}

impl Status {
    /// The "no error" sentinel.
    pub fn ok() -> Self {
        Self {
            exception_code: ExceptionCode::None,
            message: None,
            service_specific_error: 0,
        }
    }

    pub fn new_exception(code: ExceptionCode, message: impl Into<String>) -> Self {
        Self {
            exception_code: code,
            message: Some(message.into()),
            service_specific_error: 0,
        }
    }

    /// A domain error raised by a handler, identified by an
    /// interface-defined error code.
    pub fn new_service_specific_error(error_code: i32, message: impl Into<String>) -> Self {
        Self {
            exception_code: ExceptionCode::ServiceSpecific,
            message: Some(message.into()),
            service_specific_error: error_code,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.exception_code == ExceptionCode::None
    }

    pub fn exception_code(&self) -> ExceptionCode {
        self.exception_code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn service_specific_error(&self) -> i32 {
        self.service_specific_error
    }

    pub fn write_to_parcel(&self, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_i32(self.exception_code.into())?;

        if self.is_ok() {
            return Ok(());
        }

        parcel.write_string(self.message.as_deref())?;
        // No remote stack trace is ever attached.
        parcel.write_i32(0)?;

        if self.exception_code == ExceptionCode::ServiceSpecific {
            parcel.write_i32(self.service_specific_error)?;
        }

        Ok(())
    }

    pub fn read_from_parcel(parcel: &mut Parcel) -> Result<Self, ParcelError> {
        let raw_code = parcel.read_i32()?;
        let exception_code = ExceptionCode::try_from(raw_code)
            .map_err(|_| ParcelError::BadValue(format!("unknown exception code {}", raw_code)))?;

        if exception_code == ExceptionCode::None {
            return Ok(Self::ok());
        }

        let message = parcel.read_string()?;

        if parcel.read_i32()? != 0 {
            let stack_trace = parcel.read_string()?;
            tracing::trace!(?stack_trace, "discarding remote stack trace");
        }

        let service_specific_error = match exception_code {
            ExceptionCode::ServiceSpecific => parcel.read_i32()?,
            _ => 0,
        };

        Ok(Self {
            exception_code,
            message,
            service_specific_error,
        })
    }
}

impl From<ParcelError> for Status {
    /// Maps a decode failure that is answerable (not a protocol violation)
    /// onto the exception envelope sent back to the caller.
    fn from(err: ParcelError) -> Self {
        let code = match err {
            ParcelError::InterfaceMismatch { .. } => ExceptionCode::Security,
            ParcelError::UnexpectedNull => ExceptionCode::NullPointer,
            _ => ExceptionCode::BadParcelable,
        };

        Self::new_exception(code, err.to_string())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return write!(f, "No error");
        }

        write!(f, "{:?}", self.exception_code)?;
        if self.exception_code == ExceptionCode::ServiceSpecific {
            write!(f, " ({})", self.service_specific_error)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }

        Ok(())
    }
}

impl std::error::Error for Status {}

// Reply-header shorthands used by dispatchers and proxies.
impl Parcel {
    pub fn write_no_exception(&mut self) -> Result<(), ParcelError> {
        Status::ok().write_to_parcel(self)
    }

    pub fn write_exception(&mut self, status: &Status) -> Result<(), ParcelError> {
        status.write_to_parcel(self)
    }

    /// Reads the reply header, yielding `Err(status)` if the remote raised.
    pub fn read_exception(&mut self) -> Result<Result<(), Status>, ParcelError> {
        let status = Status::read_from_parcel(self)?;
        Ok(if status.is_ok() { Ok(()) } else { Err(status) })
    }
}
