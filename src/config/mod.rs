pub mod settings;

pub use settings::{ApiKeys, AppConfig, EndpointSettings, FetchSettings, TRACING_HEADER};
