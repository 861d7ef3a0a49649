use parcelwire::{
    TransactionCode,
    constants::{
        FIRST_CALL_TRANSACTION, GET_INTERFACE_HASH_TRANSACTION, GET_INTERFACE_VERSION_TRANSACTION,
        INTERFACE_TRANSACTION, LAST_CALL_TRANSACTION, PING_TRANSACTION,
    },
};

pub const GET_INTERFACE_VERSION_NAME: &str = "getInterfaceVersion";
pub const GET_INTERFACE_HASH_NAME: &str = "getInterfaceHash";
pub const INTERFACE_DESCRIPTOR_NAME: &str = "getInterfaceDescriptor";
pub const PING_NAME: &str = "ping";

/// Number of method slots below the reserved meta-methods.
pub const MAX_METHOD_OFFSET: u32 = GET_INTERFACE_HASH_TRANSACTION - FIRST_CALL_TRANSACTION - 1;

/// Maps a method's declaration index to its transaction code.
///
/// Panics (at compile time, in a const context) if the index would collide
/// with the reserved meta-methods.
pub const fn call_transaction(offset: u32) -> TransactionCode {
    assert!(
        offset <= MAX_METHOD_OFFSET,
        "method offset collides with the reserved meta-transactions"
    );
    FIRST_CALL_TRANSACTION + offset
}

/// True for codes an interface may register its own methods under.
pub const fn is_method_transaction(code: TransactionCode) -> bool {
    code >= FIRST_CALL_TRANSACTION && code <= FIRST_CALL_TRANSACTION + MAX_METHOD_OFFSET
}

/// True for codes whose requests carry an interface token.
pub const fn carries_interface_token(code: TransactionCode) -> bool {
    code >= FIRST_CALL_TRANSACTION && code <= LAST_CALL_TRANSACTION
}

/// Names the meta-transactions every endpoint answers on its own.
pub fn meta_transaction_name(code: TransactionCode) -> Option<&'static str> {
    match code {
        GET_INTERFACE_VERSION_TRANSACTION => Some(GET_INTERFACE_VERSION_NAME),
        GET_INTERFACE_HASH_TRANSACTION => Some(GET_INTERFACE_HASH_NAME),
        INTERFACE_TRANSACTION => Some(INTERFACE_DESCRIPTOR_NAME),
        PING_TRANSACTION => Some(PING_NAME),
        _ => None,
    }
}

/// Compile-time transaction code for the method at a declaration index.
///
/// ## Example
///
/// ```rust
/// use parcelwire_rpc_service::rpc_transaction_code;
/// let start = rpc_transaction_code!(0);
/// let stop = rpc_transaction_code!(1);
/// assert_eq!(start, parcelwire::constants::FIRST_CALL_TRANSACTION);
/// assert_eq!(stop, start + 1);
/// ```
#[macro_export]
macro_rules! rpc_transaction_code {
    ($offset:expr) => {{
        const CODE: u32 = $crate::call_transaction($offset);
        CODE
    }};
}
