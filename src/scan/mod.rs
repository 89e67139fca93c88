pub mod builder;
pub mod executor;

pub use builder::{EngineInvocation, ScanRun, SCAP_CONTENT};

use crate::errors::GovReadyError;
use anyhow::Result;
use std::process::Command;

/// Delegate profile listing to the engine, propagating its exit code.
pub fn list_profiles() -> Result<i32> {
    let status = Command::new(builder::ENGINE)
        .args(["info", SCAP_CONTENT])
        .status()
        .map_err(|source| GovReadyError::EngineLaunch {
            program: builder::ENGINE.to_string(),
            source,
        })?;

    Ok(status.code().unwrap_or(1))
}
