use serde::Deserialize;

/// Default order endpoint. Any service that reflects the posted order
/// body back works.
const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/cupcakes";

#[derive(Debug, Deserialize, Clone)]
pub struct SubmitConfig {
    pub endpoint: EndpointConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EndpointConfig {
    pub url: String,
    /// Stands in for the platform default request timeout. Not exposed as
    /// a per-submission knob.
    pub timeout_seconds: u64,
}

impl SubmitConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("endpoint.url", DEFAULT_ENDPOINT)?
            .set_default("endpoint.timeout_seconds", 30)?
            // Optional configuration files, then environment overrides.
            // Eg. `CUPCAKE_ENDPOINT__URL=http://localhost:8080/order`
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CUPCAKE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
