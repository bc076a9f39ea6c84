use eframe::egui;

use crate::config::WheelConfig;

pub fn render_config_panel(ui: &mut egui::Ui, config: &mut WheelConfig) {
    egui::CollapsingHeader::new("Wheel Settings")
        .default_open(false)
        .show(ui, |ui| {
            render_spin_settings(ui, config);
        });
}

fn render_spin_settings(ui: &mut egui::Ui, config: &mut WheelConfig) {
    egui::CollapsingHeader::new("Spin")
        .default_open(true)
        .show(ui, |ui| {
            ui.add_space(4.0);
            egui::Grid::new("spin_settings_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Min Speed:")
                        .on_hover_text("Slowest possible kick, in degrees per frame");
                    ui.add(egui::Slider::new(&mut config.min_speed, 5.0..=60.0).suffix("°/f"));
                    ui.end_row();

                    ui.label("Max Speed:")
                        .on_hover_text("Fastest possible kick, in degrees per frame");
                    ui.add(egui::Slider::new(&mut config.max_speed, 5.0..=60.0).suffix("°/f"));
                    ui.end_row();

                    ui.label("Decay:")
                        .on_hover_text("Speed kept each frame - closer to 1 = longer spins");
                    ui.add(egui::Slider::new(&mut config.decay_factor, 0.80..=0.995));
                    ui.end_row();

                    ui.label("Stop Threshold:")
                        .on_hover_text("The wheel settles once it is slower than this");
                    ui.add(egui::Slider::new(&mut config.stop_threshold, 0.05..=2.0));
                    ui.end_row();
                });
        });
}
