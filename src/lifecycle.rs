use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Process-wide guard for transient resources. Holds at most one temp
/// directory; cleanup runs on normal completion, on a propagated error, and
/// on SIGINT/SIGTERM, and is idempotent across all of those paths.
#[derive(Clone, Default)]
pub struct Lifecycle {
    temp_dir: Arc<Mutex<Option<PathBuf>>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the guard and hook interrupt/terminate signals. Call once at
    /// process start; the handler cleans up and exits 130.
    pub fn install() -> Self {
        let guard = Self::new();
        let handler = guard.clone();
        if let Err(err) = ctrlc::set_handler(move || {
            handler.cleanup();
            std::process::exit(130);
        }) {
            // runs before the tracing subscriber exists, so report directly
            eprintln!("warning: failed to install signal handler: {}", err);
        }
        guard
    }

    /// Record a freshly allocated temp directory for removal at exit.
    pub fn register_temp_dir(&self, path: &Path) {
        let mut slot = self.temp_dir.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(path.to_path_buf());
    }

    /// Remove the recorded temp directory, if any. Safe to call repeatedly
    /// and from the signal-handler thread; the slot is taken before removal
    /// so a second invocation is a no-op.
    pub fn cleanup(&self) {
        let taken = self.temp_dir.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(dir) = taken {
            if let Err(err) = std::fs::remove_dir_all(&dir) {
                tracing::warn!("failed to remove temp directory {:?}: {}", dir, err);
            }
        }
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        self.cleanup();
    }
}
