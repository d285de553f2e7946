//! Landing Player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use landing_player::infrastructure::{config, platform, submission::SimulatedSubmitter};
use landing_player::ui::{presentation::Services, ShellKind, PAGE_TITLE};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "landing_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting landing page");

    let config = config::load_config();

    // Platform
    let platform = platform::create_platform();

    // Submission adapter
    let submitter = Arc::new(SimulatedSubmitter::new(
        platform.clone(),
        config.timings.submission_delay_ms,
    ));
    let services = Services::new(config, submitter);

    // Shell kind (desktop vs mobile layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
            ShellKind::for_width(platform.viewport_size().0)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::env::var("LANDING_SHELL")
                .ok()
                .and_then(|s| ShellKind::parse(&s))
                .unwrap_or_default()
        }
    };
    tracing::debug!(?shell, "Selected shell");

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title(PAGE_TITLE);
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(shell)
        .with_context(services)
        .launch(landing_player::ui::app);
}
