mod aiding;
pub use aiding::*;

mod lifecycle;
pub use lifecycle::*;

mod position_mode;
pub use position_mode::*;

mod report_event;
pub use report_event::*;

mod satellite_report;
pub use satellite_report::*;
