//! brightbar: display brightness slider in the macOS menu bar.

#[cfg(target_os = "macos")]
mod macos_main;

/// Initialize logging to stderr. `RUST_LOG` overrides the default `info` filter.
fn init_logger() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format_target(false);
    builder.init();
}

fn main() {
    init_logger();

    if !brightbar::events::init_event_bus() {
        log::error!("Event bus initialized twice");
    }

    #[cfg(target_os = "macos")]
    macos_main::run();

    #[cfg(not(target_os = "macos"))]
    {
        log::error!("brightbar only runs on macOS");
        std::process::exit(1);
    }
}
