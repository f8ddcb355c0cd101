//! Composition root helpers: configuration and Dioxus launch

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::LobbyService;
use crate::infrastructure::account::SimulatedAccountService;
use crate::infrastructure::catalog::{demo_catalog, demo_recent_wins, demo_stats};
use crate::ports::outbound::{AccountPort, PlatformPort};
use crate::state::Platform;

/// Configuration types for the player runner.
pub mod config {
    use std::str::FromStr;

    use anyhow::{anyhow, Context, Result};

    pub const SHELL_ENV: &str = "REELHOUSE_SHELL";
    pub const LATENCY_ENV: &str = "REELHOUSE_SIMULATED_LATENCY_MS";
    pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1500;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub enum ShellKind {
        #[default]
        Desktop,
        Mobile,
    }

    impl FromStr for ShellKind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "desktop" => Ok(Self::Desktop),
                "mobile" => Ok(Self::Mobile),
                other => Err(format!("unknown shell kind: {other}")),
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RunnerConfig {
        pub shell: ShellKind,
        pub simulated_latency_ms: u64,
    }

    impl Default for RunnerConfig {
        fn default() -> Self {
            Self {
                shell: ShellKind::default(),
                simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            }
        }
    }

    impl RunnerConfig {
        /// Build from a variable lookup. Each invalid value is logged and
        /// replaced by its default.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let defaults = Self::default();

            let shell = match lookup(SHELL_ENV).map(|raw| parse_shell(&raw)) {
                Some(Ok(shell)) => shell,
                Some(Err(e)) => {
                    tracing::warn!("{:#}; using {:?}", e, defaults.shell);
                    defaults.shell
                }
                None => defaults.shell,
            };

            let simulated_latency_ms = match lookup(LATENCY_ENV).map(|raw| parse_latency(&raw)) {
                Some(Ok(ms)) => ms,
                Some(Err(e)) => {
                    tracing::warn!("{:#}; using {}ms", e, defaults.simulated_latency_ms);
                    defaults.simulated_latency_ms
                }
                None => defaults.simulated_latency_ms,
            };

            Self {
                shell,
                simulated_latency_ms,
            }
        }

        /// Build from the process environment
        pub fn from_env() -> Self {
            Self::from_lookup(|key| std::env::var(key).ok())
        }
    }

    fn parse_shell(raw: &str) -> Result<ShellKind> {
        raw.parse::<ShellKind>()
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("invalid {SHELL_ENV}"))
    }

    fn parse_latency(raw: &str) -> Result<u64> {
        raw.trim()
            .parse::<u64>()
            .with_context(|| format!("invalid {LATENCY_ENV} '{raw}'"))
    }
}

use config::RunnerConfig;

pub struct RunnerDeps {
    pub platform: Platform,
    pub accounts: Arc<dyn AccountPort>,
    pub lobby: LobbyService,
    pub config: RunnerConfig,
}

impl RunnerDeps {
    /// Wire the shipped adapters: simulated accounts and the demo lobby
    pub fn simulated(platform: Platform, config: RunnerConfig) -> Self {
        let latency = Duration::from_millis(config.simulated_latency_ms);
        Self {
            platform,
            accounts: Arc::new(SimulatedAccountService::new(latency)),
            lobby: LobbyService::new(demo_catalog(), demo_recent_wins(), demo_stats()),
            config,
        }
    }
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps {
        platform,
        accounts,
        lobby,
        config,
    } = deps;

    // Wrap Platform in Arc<dyn PlatformPort> for UI layer abstraction
    let platform_port: Arc<dyn PlatformPort> = Arc::new(platform);

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("Reelhouse");
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    // Convert runner's ShellKind to the UI's ShellKind for context
    let ui_shell = match config.shell {
        config::ShellKind::Desktop => crate::ui::ShellKind::Desktop,
        config::ShellKind::Mobile => crate::ui::ShellKind::Mobile,
    };

    builder
        .with_context(platform_port.clone())
        .with_context(ui_shell)
        .with_context(crate::ui::presentation::Services::new(
            accounts,
            platform_port,
            lobby,
        ))
        .launch(crate::ui::app);
}
