use eframe::egui::{self, Color32};

use crate::display::{Emphasis, FORTUNE_BOX_ID, FortuneDisplay};

const BLESSING: Color32 = Color32::from_rgb(0xF5, 0xD0, 0x6F);
const CURSE: Color32 = Color32::from_rgb(0xE0, 0x5A, 0x5A);
const PLAIN: Color32 = Color32::from_gray(120);

pub fn render_fortune_box(ui: &mut egui::Ui, display: &FortuneDisplay) {
    let (accent, fill) = match display.emphasis() {
        Some(Emphasis::Blessing) => (BLESSING, Color32::from_rgb(58, 46, 20)),
        Some(Emphasis::Curse) => (CURSE, Color32::from_rgb(60, 20, 24)),
        None => (PLAIN, Color32::from_gray(24)),
    };

    let (headline, meaning) = display.lines();

    ui.push_id(FORTUNE_BOX_ID, |ui| {
        egui::Frame::default()
            .fill(fill)
            .stroke(egui::Stroke::new(2.0, accent))
            .corner_radius(8)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(headline).size(18.0).strong().color(accent));
                    if let Some(meaning) = meaning {
                        ui.add_space(4.0);
                        ui.label(meaning);
                    }
                });
            });
    });
}
