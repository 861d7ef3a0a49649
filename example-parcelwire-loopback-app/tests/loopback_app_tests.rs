use example_parcelwire_loopback_app::{ERROR_NOT_RUNNING, SimulatedLocationProvider, WireTap};
use example_parcelwire_service_definition::{
    ILocationProvider, LocationProviderEndpoint, LocationProviderProxy, PositionModeOptions,
    location_provider_endpoint,
    methods::{DELETE_EPHEMERIS, DELETE_TIME},
};
use parcelwire::ExceptionCode;
use parcelwire_rpc_service_caller::RpcCallerError;
use std::sync::Arc;

type Tap = WireTap<
    example_parcelwire_service_definition::LocationProviderInterface,
    Arc<dyn ILocationProvider>,
>;

fn serve() -> (Arc<SimulatedLocationProvider>, Arc<Tap>, LocationProviderProxy) {
    let service = Arc::new(SimulatedLocationProvider::new());
    let endpoint: LocationProviderEndpoint = location_provider_endpoint(service.clone()).unwrap();
    let tap = Arc::new(WireTap::new(Arc::new(endpoint)));
    let proxy = LocationProviderProxy::bind(tap.clone()).unwrap();
    (service, tap, proxy)
}

#[test]
fn test_full_session_over_the_wire() {
    let (service, tap, provider) = serve();

    assert!(provider.set_position_mode(&PositionModeOptions::default()).unwrap());
    provider.inject_time(5_000, 4_000, 12).unwrap();
    provider.start().unwrap();
    assert!(service.is_running());

    provider.report_event("tracking").unwrap();

    let report = provider.get_satellite_report().unwrap().unwrap();
    let satellites = report.satellites.unwrap();
    assert_eq!(satellites.len(), 3);
    assert!(satellites.iter().all(|s| s.has_ephemeris));
    assert_eq!(report.timestamp_ns, 1_000 * 1_000_000);
    assert_eq!(report.label.as_deref(), Some("tracking"));

    provider.delete_aiding_data(DELETE_EPHEMERIS).unwrap();
    let report = provider.get_satellite_report().unwrap().unwrap();
    assert!(report.satellites.unwrap().iter().all(|s| !s.has_ephemeris));

    provider.delete_aiding_data(DELETE_TIME).unwrap();
    assert_eq!(provider.get_satellite_report().unwrap(), None);

    provider.stop().unwrap();
    assert!(!service.is_running());
    assert_eq!(service.events(), vec!["tracking"]);

    // The bind handshake counts as one transaction
    assert_eq!(tap.stats().transactions, 11);
    assert!(tap.stats().request_bytes > 0);
    assert!(tap.stats().reply_bytes > 0);
}

#[test]
fn test_report_from_stopped_engine_is_service_specific() {
    let (_, _, provider) = serve();

    match provider.get_satellite_report() {
        Err(RpcCallerError::Remote(status)) => {
            assert_eq!(status.exception_code(), ExceptionCode::ServiceSpecific);
            assert_eq!(status.service_specific_error(), ERROR_NOT_RUNNING);
        }
        other => panic!("expected a service-specific error, got {:?}", other),
    }
}

#[test]
fn test_position_mode_validation() {
    let (_, _, provider) = serve();

    let unknown_mode = PositionModeOptions {
        mode: 9,
        ..Default::default()
    };
    assert!(!provider.set_position_mode(&unknown_mode).unwrap());

    let negative_interval = PositionModeOptions {
        min_interval_ms: -1,
        ..Default::default()
    };
    match provider.set_position_mode(&negative_interval) {
        Err(RpcCallerError::Remote(status)) => {
            assert_eq!(status.exception_code(), ExceptionCode::IllegalArgument)
        }
        other => panic!("expected IllegalArgument, got {:?}", other),
    }
}

#[test]
fn test_interface_identity_is_cached() {
    let (_, tap, provider) = serve();

    for _ in 0..4 {
        assert_eq!(provider.get_interface_version().unwrap(), 2);
    }

    // bind + a single version query
    assert_eq!(tap.stats().transactions, 2);
}
