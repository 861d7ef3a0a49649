use crate::{LocationProviderInterface, SatelliteReport};
use parcelwire::{Parcel, ParcelError};
use parcelwire_rpc_service::{RpcMethod, rpc_transaction_code};

pub struct GetSatelliteReport;

impl RpcMethod for GetSatelliteReport {
    type Interface = LocationProviderInterface;

    const TRANSACTION_CODE: u32 = rpc_transaction_code!(5);
    const NAME: &'static str = "getSatelliteReport";

    type Input = ();
    type Output = Option<SatelliteReport>;

    fn encode_request(_: &(), _: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }

    fn decode_request(_: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }

    fn encode_response(output: &Self::Output, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_typed_object(output.as_ref())
    }

    fn decode_response(parcel: &mut Parcel) -> Result<Self::Output, ParcelError> {
        parcel.read_typed_object()
    }
}
