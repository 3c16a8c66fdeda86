pub mod telemetry;
pub mod webutils;
