//! Reelhouse Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelhouse_player::runner::{self, config::RunnerConfig, RunnerDeps};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelhouse_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Reelhouse Player");

    let platform = reelhouse_player::infrastructure::platform::create_platform();

    #[allow(unused_mut)]
    let mut config = RunnerConfig::from_env();

    // In the browser the layout follows the viewport instead of the environment
    #[cfg(target_arch = "wasm32")]
    {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);

        config.shell = if width < 768.0 {
            runner::config::ShellKind::Mobile
        } else {
            runner::config::ShellKind::Desktop
        };
    }

    tracing::debug!(?config, "Runner configuration");

    runner::run(RunnerDeps::simulated(platform, config));
}
