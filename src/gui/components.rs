mod config_panel;
mod fortune_box;
mod wheel_canvas;

pub use config_panel::render_config_panel;
pub use fortune_box::render_fortune_box;
pub use wheel_canvas::render_wheel_canvas;
