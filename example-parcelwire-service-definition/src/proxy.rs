use crate::{
    ILocationProvider, LocationProviderInterface, PositionModeOptions, SatelliteReport,
    methods::{
        DeleteAidingData, GetSatelliteReport, InjectTime, ReportEvent, SetPositionMode, Start,
        Stop,
    },
};
use parcelwire::Transport;
use parcelwire_rpc_service_caller::{RpcCallerError, RpcProxy};
use std::sync::Arc;

/// [`ILocationProvider`] backed by a remote object.
#[derive(Debug)]
pub struct LocationProviderProxy {
    proxy: RpcProxy<LocationProviderInterface>,
}

impl LocationProviderProxy {
    pub fn new(remote: Arc<dyn Transport>) -> Self {
        Self::from_proxy(RpcProxy::new(remote))
    }

    /// Like [`new`](Self::new), but checks the remote's descriptor first.
    pub fn bind(remote: Arc<dyn Transport>) -> Result<Self, RpcCallerError> {
        RpcProxy::bind(remote).map(Self::from_proxy)
    }

    pub fn from_proxy(proxy: RpcProxy<LocationProviderInterface>) -> Self {
        Self { proxy }
    }

    pub fn proxy(&self) -> &RpcProxy<LocationProviderInterface> {
        &self.proxy
    }
}

impl ILocationProvider for LocationProviderProxy {
    fn start(&self) -> Result<(), RpcCallerError> {
        self.proxy.call::<Start>(&())
    }

    fn stop(&self) -> Result<(), RpcCallerError> {
        self.proxy.call::<Stop>(&())
    }

    fn inject_time(
        &self,
        time_ms: i64,
        time_reference_ms: i64,
        uncertainty_ms: i32,
    ) -> Result<(), RpcCallerError> {
        self.proxy
            .call::<InjectTime>(&(time_ms, time_reference_ms, uncertainty_ms))
    }

    fn delete_aiding_data(&self, aiding_data_flags: i32) -> Result<(), RpcCallerError> {
        self.proxy.call::<DeleteAidingData>(&aiding_data_flags)
    }

    fn set_position_mode(&self, options: &PositionModeOptions) -> Result<bool, RpcCallerError> {
        self.proxy.call::<SetPositionMode>(options)
    }

    fn get_satellite_report(&self) -> Result<Option<SatelliteReport>, RpcCallerError> {
        self.proxy.call::<GetSatelliteReport>(&())
    }

    fn report_event(&self, event: &str) -> Result<(), RpcCallerError> {
        self.proxy.call_oneway::<ReportEvent>(&event.to_string())
    }

    fn get_interface_version(&self) -> Result<i32, RpcCallerError> {
        self.proxy.get_interface_version()
    }

    fn get_interface_hash(&self) -> Result<String, RpcCallerError> {
        self.proxy.get_interface_hash()
    }
}
