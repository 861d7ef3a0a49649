use crate::{LocationProviderInterface, PositionModeOptions};
use parcelwire::{Parcel, ParcelError};
use parcelwire_rpc_service::{RpcMethod, rpc_transaction_code};

pub struct SetPositionMode;

impl RpcMethod for SetPositionMode {
    type Interface = LocationProviderInterface;

    const TRANSACTION_CODE: u32 = rpc_transaction_code!(4);
    const NAME: &'static str = "setPositionMode";

    type Input = PositionModeOptions;
    type Output = bool;

    fn encode_request(input: &Self::Input, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_typed_object(Some(input))
    }

    fn decode_request(parcel: &mut Parcel) -> Result<Self::Input, ParcelError> {
        parcel.read_typed_object()?.ok_or(ParcelError::UnexpectedNull)
    }

    fn encode_response(output: &bool, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_bool(*output)
    }

    fn decode_response(parcel: &mut Parcel) -> Result<bool, ParcelError> {
        parcel.read_bool()
    }
}
