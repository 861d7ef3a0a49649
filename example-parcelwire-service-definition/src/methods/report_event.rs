use crate::LocationProviderInterface;
use parcelwire::{Parcel, ParcelError, constants::FLAG_ONEWAY};
use parcelwire_rpc_service::{RpcMethod, rpc_transaction_code};

/// Added in version 2.
pub struct ReportEvent;

impl RpcMethod for ReportEvent {
    type Interface = LocationProviderInterface;

    const TRANSACTION_CODE: u32 = rpc_transaction_code!(6);
    const NAME: &'static str = "reportEvent";
    const FLAGS: u32 = FLAG_ONEWAY;

    type Input = String;
    type Output = ();

    fn encode_request(input: &String, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_str(input)
    }

    fn decode_request(parcel: &mut Parcel) -> Result<String, ParcelError> {
        parcel.read_non_null_string()
    }

    fn encode_response(_: &(), _: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }

    fn decode_response(_: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }
}
