use example_parcelwire_loopback_app::{SimulatedLocationProvider, WireTap};
use example_parcelwire_service_definition::{
    ILocationProvider, LocationProviderProxy, POSITION_MODE_MS_BASED, PositionModeOptions,
    RECURRENCE_PERIODIC, location_provider_endpoint, methods::DELETE_EPHEMERIS,
};
use parcelwire::utils::now;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default to INFO; RUST_LOG=debug shows every transaction on the wire
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let service = Arc::new(SimulatedLocationProvider::new());
    let endpoint = Arc::new(location_provider_endpoint(service.clone())?);
    let tap = Arc::new(WireTap::new(endpoint));

    let provider = LocationProviderProxy::bind(tap.clone())?;

    println!(
        "Remote interface: version {}, hash {}",
        provider.get_interface_version()?,
        provider.get_interface_hash()?
    );

    let accepted = provider.set_position_mode(&PositionModeOptions {
        mode: POSITION_MODE_MS_BASED,
        recurrence: RECURRENCE_PERIODIC,
        min_interval_ms: 1000,
        preferred_accuracy_meters: 5,
        preferred_time_ms: 0,
        low_power_mode: true,
    })?;
    println!("Position mode accepted: {}", accepted);

    let now_ms = (now() / 1000) as i64;
    provider.inject_time(now_ms, now_ms - 250, 20)?;
    provider.start()?;
    provider.report_event("first fix requested")?;

    match provider.get_satellite_report()? {
        Some(report) => {
            for sat in report.satellites.iter().flatten() {
                println!(
                    "  svid {:>3}  cn0 {:>5.1} dB-Hz  el {:>5.1}  az {:>5.1}",
                    sat.svid, sat.cn0_dbhz, sat.elevation_degrees, sat.azimuth_degrees
                );
            }
            println!("Report label: {:?}", report.label);
        }
        None => println!("No satellite report yet"),
    }

    provider.delete_aiding_data(DELETE_EPHEMERIS)?;
    provider.stop()?;

    // Fails: the engine is stopped
    if let Err(e) = provider.get_satellite_report() {
        println!("Report after stop: {}", e);
    }

    println!("Events seen by the service: {:?}", service.events());
    println!("Wire: {:?}", tap.stats());

    Ok(())
}
