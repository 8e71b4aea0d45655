pub mod api;

use contracts::shell::ShellConfig;
use std::cell::Cell;
use std::rc::Rc;

/// How long start-up waits for the server config before mounting with defaults.
pub const CONFIG_WAIT_MS: u32 = 3_000;

/// Configuration served by the backend, or the built-in default when it
/// cannot be fetched or does not validate.
pub async fn load_shell_config() -> ShellConfig {
    match api::fetch_shell_config().await {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("shell config rejected: {}; using defaults", e);
                ShellConfig::default()
            }
        },
        Err(e) => {
            log::warn!("shell config unavailable: {}; using defaults", e);
            ShellConfig::default()
        }
    }
}

/// Shared between the config fetch and the start-up timeout: whichever
/// claims it first mounts the app.
#[derive(Clone, Default)]
pub struct MountGate(Rc<Cell<bool>>);

impl MountGate {
    pub fn claim(&self) -> bool {
        !self.0.replace(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_mounts_once() {
        let gate = MountGate::default();
        let timeout = gate.clone();

        assert!(timeout.claim());
        // config arriving after the timeout must not mount a second app
        assert!(!gate.claim());
        assert!(!timeout.claim());
    }
}
