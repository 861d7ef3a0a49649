use crate::{
    ILocationProvider, LocationProviderInterface, LocationProviderProxy,
    methods::{
        DeleteAidingData, GetSatelliteReport, InjectTime, ReportEvent, SetPositionMode, Start,
        Stop,
    },
};
use parcelwire::Transport;
use parcelwire_rpc_service_caller::{BoundInterface, RpcCallerError};
use parcelwire_rpc_service_endpoint::{RpcServiceEndpoint, error::RpcServiceEndpointError};
use std::sync::Arc;

pub type LocationProviderEndpoint =
    RpcServiceEndpoint<LocationProviderInterface, Arc<dyn ILocationProvider>>;

/// Builds an endpoint dispatching every `ILocationProvider` method to
/// `service`.
pub fn location_provider_endpoint(
    service: Arc<dyn ILocationProvider>,
) -> Result<LocationProviderEndpoint, RpcServiceEndpointError> {
    let endpoint = LocationProviderEndpoint::new(service);

    endpoint.register::<Start, _>(|svc, ()| svc.start().map_err(RpcCallerError::into_status))?;
    endpoint.register::<Stop, _>(|svc, ()| svc.stop().map_err(RpcCallerError::into_status))?;
    endpoint.register::<InjectTime, _>(|svc, (time_ms, reference_ms, uncertainty_ms)| {
        svc.inject_time(time_ms, reference_ms, uncertainty_ms)
            .map_err(RpcCallerError::into_status)
    })?;
    endpoint.register::<DeleteAidingData, _>(|svc, flags| {
        svc.delete_aiding_data(flags)
            .map_err(RpcCallerError::into_status)
    })?;
    endpoint.register::<SetPositionMode, _>(|svc, options| {
        svc.set_position_mode(&options)
            .map_err(RpcCallerError::into_status)
    })?;
    endpoint.register::<GetSatelliteReport, _>(|svc, ()| {
        svc.get_satellite_report()
            .map_err(RpcCallerError::into_status)
    })?;
    endpoint.register::<ReportEvent, _>(|svc, event| {
        svc.report_event(&event)
            .map_err(RpcCallerError::into_status)
    })?;

    Ok(endpoint)
}

/// Resolves a handle to an `ILocationProvider`: the in-process object when
/// there is one, otherwise a proxy over `remote`.
pub fn as_location_provider(
    local: Option<Arc<dyn ILocationProvider>>,
    remote: Arc<dyn Transport>,
) -> Arc<dyn ILocationProvider> {
    BoundInterface::<dyn ILocationProvider, LocationProviderInterface>::attach(local, remote)
        .resolve(|proxy| -> Arc<dyn ILocationProvider> {
            Arc::new(LocationProviderProxy::from_proxy(proxy))
        })
}
