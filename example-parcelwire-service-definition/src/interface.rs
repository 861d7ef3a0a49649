use crate::{PositionModeOptions, SatelliteReport};
use parcelwire_rpc_service::RpcInterface;
use parcelwire_rpc_service_caller::RpcCallerError;

/// Identity of the `ILocationProvider` interface, revision 2.
pub struct LocationProviderInterface;

impl RpcInterface for LocationProviderInterface {
    const DESCRIPTOR: &'static str = "example.location.ILocationProvider";
    const VERSION: i32 = 2;
    const HASH: &'static str = "7c1e4f0a9d52b3e86f14a0c7d2e95b3148f6a0d1";
}

/// A positioning engine that can run in-process or behind a proxy.
///
/// Every method can fail with [`RpcCallerError`]; local implementations
/// report domain failures as [`RpcCallerError::Remote`] so that a dispatcher
/// can forward them unchanged.
pub trait ILocationProvider: Send + Sync {
    fn start(&self) -> Result<(), RpcCallerError>;

    fn stop(&self) -> Result<(), RpcCallerError>;

    fn inject_time(
        &self,
        time_ms: i64,
        time_reference_ms: i64,
        uncertainty_ms: i32,
    ) -> Result<(), RpcCallerError>;

    fn delete_aiding_data(&self, aiding_data_flags: i32) -> Result<(), RpcCallerError>;

    /// Returns whether the provider accepted the requested mode.
    fn set_position_mode(&self, options: &PositionModeOptions) -> Result<bool, RpcCallerError>;

    fn get_satellite_report(&self) -> Result<Option<SatelliteReport>, RpcCallerError>;

    /// One-way diagnostic note; delivery is not confirmed.
    fn report_event(&self, event: &str) -> Result<(), RpcCallerError>;

    fn get_interface_version(&self) -> Result<i32, RpcCallerError> {
        Ok(LocationProviderInterface::VERSION)
    }

    fn get_interface_hash(&self) -> Result<String, RpcCallerError> {
        Ok(LocationProviderInterface::HASH.to_string())
    }
}

/// Does-nothing implementation: every call succeeds with the zero value of
/// its return type.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLocationProvider;

impl ILocationProvider for DefaultLocationProvider {
    fn start(&self) -> Result<(), RpcCallerError> {
        Ok(())
    }

    fn stop(&self) -> Result<(), RpcCallerError> {
        Ok(())
    }

    fn inject_time(&self, _: i64, _: i64, _: i32) -> Result<(), RpcCallerError> {
        Ok(())
    }

    fn delete_aiding_data(&self, _: i32) -> Result<(), RpcCallerError> {
        Ok(())
    }

    fn set_position_mode(&self, _: &PositionModeOptions) -> Result<bool, RpcCallerError> {
        Ok(false)
    }

    fn get_satellite_report(&self) -> Result<Option<SatelliteReport>, RpcCallerError> {
        Ok(None)
    }

    fn report_event(&self, _: &str) -> Result<(), RpcCallerError> {
        Ok(())
    }

    fn get_interface_version(&self) -> Result<i32, RpcCallerError> {
        Ok(0)
    }

    fn get_interface_hash(&self) -> Result<String, RpcCallerError> {
        Ok(String::new())
    }
}
