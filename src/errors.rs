use thiserror::Error;

#[derive(Error, Debug)]
pub enum GovReadyError {
    #[error("no GovReadyfile found at {0}; run `govready init` to create one")]
    ConfigMissing(String),

    #[error("GovReadyfile is missing a value for `{0}`")]
    ConfigIncomplete(&'static str),

    #[error("dependency missing: {0}")]
    Dependency(String),

    #[error("failed to launch {program}")]
    EngineLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
