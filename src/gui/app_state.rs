use crate::config::{APP_VERSION, WheelConfig};
use crate::controller::Controller;
use crate::starfield::Starfield;
use eframe::egui;
use log::{debug, info, warn};

use super::components::{render_config_panel, render_fortune_box, render_wheel_canvas};
use super::fonts;

pub struct AppState {
    controller: Controller,
    starfield: Starfield,
    pending_config: WheelConfig, // Local copy for sliders
    settings_error: Option<String>,
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // advance first, then draw what the frame ended up with
        self.controller.frame();
        self.starfield.step();

        self.render_top_panel(ctx);
        self.render_bottom_panel(ctx);
        self.render_central_panel(ctx);

        ctx.request_repaint();
    }
}

impl AppState {
    pub fn new(cc: &eframe::CreationContext<'_>, controller: Controller) -> Self {
        debug!("Initializing GUI state...");
        fonts::install_cjk_fallback(&cc.egui_ctx);

        let pending_config = controller.engine().config().clone();
        debug!(
            "Initial config loaded: speed=[{}, {}), decay={}, stop={}",
            pending_config.min_speed,
            pending_config.max_speed,
            pending_config.decay_factor,
            pending_config.stop_threshold
        );

        Self {
            controller,
            starfield: Starfield::default(),
            pending_config,
            settings_error: None,
        }
    }

    fn apply_settings(&mut self) {
        debug!("Applying settings - Config: {:?}", self.pending_config);

        match self
            .controller
            .engine()
            .reconfigured(self.pending_config.clone())
        {
            Ok(engine) => {
                self.controller.replace_engine(engine);
                self.settings_error = None;
                info!("Settings applied successfully");
            }
            Err(err) => {
                warn!("Rejected wheel settings: {err:#}");
                self.settings_error = Some(format!("{err:#}"));
            }
        }
    }

    fn reset_to_default(&mut self) {
        debug!("Resetting config to defaults");
        self.pending_config = WheelConfig::default();
        self.settings_error = None;
    }

    fn disable_apply_button(&self) -> bool {
        let config_unchanged = self.pending_config == *self.controller.engine().config();
        config_unchanged || self.controller.engine().is_spinning()
    }

    fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(format!("Fortune Wheel {APP_VERSION}"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.controller.engine().is_spinning() {
                        ui.colored_label(egui::Color32::GREEN, "Spinning");
                    } else {
                        ui.colored_label(egui::Color32::GRAY, "Idle");
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn render_bottom_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            render_fortune_box(ui, self.controller.display());
            ui.add_space(8.0);

            render_config_panel(ui, &mut self.pending_config);

            if let Some(err) = &self.settings_error {
                ui.colored_label(egui::Color32::RED, err);
            }

            ui.horizontal(|ui| {
                ui.add_space(4.0);
                ui.add_enabled_ui(!self.disable_apply_button(), |ui| {
                    if ui.button("Apply Settings").clicked() {
                        self.apply_settings();
                    }
                });

                if ui.button("↺ Reset to Default").clicked() {
                    self.reset_to_default();
                }
            });
            ui.add_space(8.0);
        });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default().inner_margin(0.0))
            .show(ctx, |ui| {
                let pressed = render_wheel_canvas(
                    ui,
                    self.controller.engine().state().angle.rem_euclid(360.0) as f32,
                    self.controller.engine().archive(),
                    self.starfield.stars(),
                );

                if pressed {
                    self.controller.press();
                }
            });
    }
}
