pub mod configuration;
pub mod routes;
pub mod telemetry;
pub mod templates;
