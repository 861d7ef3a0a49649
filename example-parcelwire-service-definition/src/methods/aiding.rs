use crate::LocationProviderInterface;
use parcelwire::{Parcel, ParcelError};
use parcelwire_rpc_service::{RpcMethod, rpc_transaction_code};

pub const DELETE_EPHEMERIS: i32 = 0x0001;
pub const DELETE_ALMANAC: i32 = 0x0002;
pub const DELETE_POSITION: i32 = 0x0004;
pub const DELETE_TIME: i32 = 0x0008;
pub const DELETE_ALL: i32 = 0xFFFF;

pub struct InjectTime;

impl RpcMethod for InjectTime {
    type Interface = LocationProviderInterface;

    const TRANSACTION_CODE: u32 = rpc_transaction_code!(2);
    const NAME: &'static str = "injectTime";

    /// `(time_ms, time_reference_ms, uncertainty_ms)`
    type Input = (i64, i64, i32);
    type Output = ();

    fn encode_request(input: &Self::Input, parcel: &mut Parcel) -> Result<(), ParcelError> {
        let (time_ms, time_reference_ms, uncertainty_ms) = *input;
        parcel.write_i64(time_ms)?;
        parcel.write_i64(time_reference_ms)?;
        parcel.write_i32(uncertainty_ms)
    }

    fn decode_request(parcel: &mut Parcel) -> Result<Self::Input, ParcelError> {
        Ok((parcel.read_i64()?, parcel.read_i64()?, parcel.read_i32()?))
    }

    fn encode_response(_: &(), _: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }

    fn decode_response(_: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }
}

pub struct DeleteAidingData;

impl RpcMethod for DeleteAidingData {
    type Interface = LocationProviderInterface;

    const TRANSACTION_CODE: u32 = rpc_transaction_code!(3);
    const NAME: &'static str = "deleteAidingData";

    type Input = i32;
    type Output = ();

    fn encode_request(input: &i32, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_i32(*input)
    }

    fn decode_request(parcel: &mut Parcel) -> Result<i32, ParcelError> {
        parcel.read_i32()
    }

    fn encode_response(_: &(), _: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }

    fn decode_response(_: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }
}
