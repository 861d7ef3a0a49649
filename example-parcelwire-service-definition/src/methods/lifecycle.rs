use crate::LocationProviderInterface;
use parcelwire::{Parcel, ParcelError};
use parcelwire_rpc_service::{RpcMethod, rpc_transaction_code};

pub struct Start;

impl RpcMethod for Start {
    type Interface = LocationProviderInterface;

    const TRANSACTION_CODE: u32 = rpc_transaction_code!(0);
    const NAME: &'static str = "start";

    type Input = ();
    type Output = ();

    fn encode_request(_: &(), _: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }

    fn decode_request(_: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }

    fn encode_response(_: &(), _: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }

    fn decode_response(_: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }
}

pub struct Stop;

impl RpcMethod for Stop {
    type Interface = LocationProviderInterface;

    const TRANSACTION_CODE: u32 = rpc_transaction_code!(1);
    const NAME: &'static str = "stop";

    type Input = ();
    type Output = ();

    fn encode_request(_: &(), _: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }

    fn decode_request(_: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }

    fn encode_response(_: &(), _: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }

    fn decode_response(_: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }
}
