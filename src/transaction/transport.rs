use crate::{
    parcel::Parcel,
    transaction::{TransactionCode, TransactionFlags, TransportError},
};

/// Something that can carry a request parcel to a remote object and fill in
/// its reply.
///
/// Implementations deliver `data` as-is and leave `reply` positioned at 0
/// for the caller to read. They return `Ok(false)` when the remote does not
/// recognize `code`, so that the caller can tell an unimplemented method
/// apart from a failed one.
pub trait Transport: Send + Sync {
    fn transact(
        &self,
        code: TransactionCode,
        data: &Parcel,
        reply: &mut Parcel,
        flags: TransactionFlags,
    ) -> Result<bool, TransportError>;
}
