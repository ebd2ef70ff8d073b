use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;
use twinchat::app::App;
use twinchat::ui::custom_head;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Twinchat v{}", env!("CARGO_PKG_VERSION"));

    let window = WindowBuilder::new()
        .with_title("Twinchat")
        .with_inner_size(LogicalSize::new(960.0, 820.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(window)
                .with_custom_head(custom_head()),
        )
        .launch(App);
}
