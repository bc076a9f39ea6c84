mod app_state;
mod components;
mod fonts;

pub use app_state::AppState;
