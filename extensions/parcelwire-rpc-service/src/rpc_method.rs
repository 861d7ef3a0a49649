use crate::RpcInterface;
use parcelwire::{
    Parcel, ParcelError, TransactionCode, TransactionFlags, constants::FLAG_NONE,
};

/// A single remote method of an [`RpcInterface`].
///
/// The request codec covers only the arguments; the interface token in
/// front of them is written by the proxy and checked by the endpoint. The
/// response codec covers only the return value; the exception envelope in
/// front of it is handled the same way.
pub trait RpcMethod {
    type Interface: RpcInterface;

    /// Transaction code selecting this method. Use
    /// [`rpc_transaction_code!`](crate::rpc_transaction_code) to derive it.
    const TRANSACTION_CODE: TransactionCode;

    /// Method name, as reported in diagnostics and `Unimplemented` errors.
    const NAME: &'static str;

    /// Call flags, e.g. [`FLAG_ONEWAY`](parcelwire::constants::FLAG_ONEWAY).
    const FLAGS: TransactionFlags = FLAG_NONE;

    /// The arguments, in declaration order (e.g. `(i32, bool)`).
    type Input;

    /// The return value (`()` for methods returning nothing).
    type Output;

    fn encode_request(input: &Self::Input, parcel: &mut Parcel) -> Result<(), ParcelError>;

    fn decode_request(parcel: &mut Parcel) -> Result<Self::Input, ParcelError>;

    fn encode_response(output: &Self::Output, parcel: &mut Parcel) -> Result<(), ParcelError>;

    fn decode_response(parcel: &mut Parcel) -> Result<Self::Output, ParcelError>;
}
