mod position_mode_options;
pub use position_mode_options::*;

mod satellite_info;
pub use satellite_info::*;

mod satellite_report;
pub use satellite_report::*;
