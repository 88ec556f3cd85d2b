// BRANDKIT UI: the brief form, its undo/redo wiring, and the output panel.

pub mod app;
pub mod form;

pub use app::{ActiveTab, App, AppState};
pub use form::FormController;

/// Install the global tracing subscriber. Honors `RUST_LOG`, defaults to info.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
