use example_parcelwire_service_definition::{
    ILocationProvider, POSITION_MODE_MS_ASSISTED, PositionModeOptions, SatelliteInfo,
    SatelliteReport, methods::{DELETE_EPHEMERIS, DELETE_TIME},
};
use parcelwire::{ExceptionCode, Status};
use parcelwire_rpc_service_caller::RpcCallerError;
use std::sync::{Mutex, MutexGuard};

/// Service-specific error raised when a fix is requested from a stopped
/// engine.
pub const ERROR_NOT_RUNNING: i32 = 1;

const CONSTELLATION_GPS: i32 = 1;
const CONSTELLATION_GALILEO: i32 = 6;

#[derive(Debug, Default)]
struct EngineState {
    running: bool,
    mode: PositionModeOptions,
    /// Offset between injected network time and the local reference clock.
    clock_offset_ms: Option<i64>,
    has_ephemeris: bool,
    events: Vec<String>,
}

/// An in-memory positioning engine with a fixed sky, used to drive the
/// interface end to end without hardware.
#[derive(Debug, Default)]
pub struct SimulatedLocationProvider {
    state: Mutex<EngineState>,
}

impl SimulatedLocationProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.lock().map(|state| state.running).unwrap_or(false)
    }

    pub fn events(&self) -> Vec<String> {
        self.lock()
            .map(|state| state.events.clone())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, EngineState>, RpcCallerError> {
        self.state.lock().map_err(|_| RpcCallerError::LockPoisoned)
    }
}

impl ILocationProvider for SimulatedLocationProvider {
    fn start(&self) -> Result<(), RpcCallerError> {
        let mut state = self.lock()?;
        state.running = true;
        tracing::info!(mode = state.mode.mode, "engine started");
        Ok(())
    }

    fn stop(&self) -> Result<(), RpcCallerError> {
        self.lock()?.running = false;
        tracing::info!("engine stopped");
        Ok(())
    }

    fn inject_time(
        &self,
        time_ms: i64,
        time_reference_ms: i64,
        uncertainty_ms: i32,
    ) -> Result<(), RpcCallerError> {
        if uncertainty_ms < 0 {
            return Err(Status::new_exception(
                ExceptionCode::IllegalArgument,
                format!("negative uncertainty {}", uncertainty_ms),
            )
            .into());
        }

        let offset = time_ms - time_reference_ms;
        self.lock()?.clock_offset_ms = Some(offset);
        tracing::debug!(offset, uncertainty_ms, "time injected");
        Ok(())
    }

    fn delete_aiding_data(&self, aiding_data_flags: i32) -> Result<(), RpcCallerError> {
        let mut state = self.lock()?;
        if aiding_data_flags & DELETE_EPHEMERIS != 0 {
            state.has_ephemeris = false;
        }
        if aiding_data_flags & DELETE_TIME != 0 {
            state.clock_offset_ms = None;
        }
        tracing::debug!(flags = aiding_data_flags, "aiding data deleted");
        Ok(())
    }

    fn set_position_mode(&self, options: &PositionModeOptions) -> Result<bool, RpcCallerError> {
        if options.min_interval_ms < 0 {
            return Err(Status::new_exception(
                ExceptionCode::IllegalArgument,
                "min interval must not be negative",
            )
            .into());
        }

        // Unknown modes are declined, not rejected.
        if options.mode > POSITION_MODE_MS_ASSISTED || options.mode < 0 {
            return Ok(false);
        }

        let mut state = self.lock()?;
        state.mode = options.clone();
        state.has_ephemeris = true;
        Ok(true)
    }

    fn get_satellite_report(&self) -> Result<Option<SatelliteReport>, RpcCallerError> {
        let state = self.lock()?;
        if !state.running {
            return Err(Status::new_service_specific_error(
                ERROR_NOT_RUNNING,
                "engine is not running",
            )
            .into());
        }

        let Some(offset) = state.clock_offset_ms else {
            return Ok(None);
        };

        let has_ephemeris = state.has_ephemeris;
        let satellites: Box<[SatelliteInfo]> = [
            (5, CONSTELLATION_GPS, 41.5, 62.0, 118.0),
            (12, CONSTELLATION_GPS, 37.25, 28.5, 301.0),
            (24, CONSTELLATION_GALILEO, 33.0, 15.75, 44.5),
        ]
        .into_iter()
        .map(
            |(svid, constellation, cn0_dbhz, elevation_degrees, azimuth_degrees)| SatelliteInfo {
                svid,
                constellation,
                cn0_dbhz,
                elevation_degrees,
                azimuth_degrees,
                has_ephemeris,
            },
        )
        .collect();

        Ok(Some(SatelliteReport {
            timestamp_ns: offset.saturating_mul(1_000_000),
            satellites: Some(satellites),
            label: state.events.last().cloned(),
        }))
    }

    fn report_event(&self, event: &str) -> Result<(), RpcCallerError> {
        self.lock()?.events.push(event.to_string());
        Ok(())
    }
}
