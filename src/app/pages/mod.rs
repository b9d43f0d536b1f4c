//! Routed page components.
//!
//! Pages carry no data of their own; the shell around them is the point.

mod calendar;
mod dashboard;
mod not_found;
mod settings;

pub use calendar::Calendar;
pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use settings::Settings;
