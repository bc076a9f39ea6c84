use eframe::egui::{self, Color32, FontId, Pos2, Vec2, emath::Rot2, epaint::TextShape};

use crate::archive::FortuneEntry;
use crate::consts;
use crate::starfield::Star;
use crate::wheel::sector_width;

const BACKGROUND: Color32 = Color32::from_rgb(26, 11, 46);
// white at ~70% opacity
const STAR_COLOR: Color32 = Color32::from_rgba_premultiplied(180, 180, 180, 180);
const LABEL_COLOR: Color32 = Color32::from_rgb(0xFF, 0xF8, 0xDC);
const POINTER_COLOR: Color32 = Color32::from_rgb(0xFF, 0xF3, 0x85);

/// Maps the square logical canvas onto whatever rect egui gave us.
struct Canvas {
    center: Pos2,
    scale: f32,
}

impl Canvas {
    fn fit(rect: egui::Rect) -> Self {
        let side = rect.width().min(rect.height());
        Self {
            center: rect.center(),
            scale: side / consts::CANVAS_SIZE,
        }
    }

    /// Canvas coordinates, origin top-left.
    fn point(&self, x: f32, y: f32) -> Pos2 {
        let half = consts::CANVAS_SIZE / 2.0;
        self.center + Vec2::new(x - half, y - half) * self.scale
    }

    /// Offset from the wheel centre, in canvas units.
    fn around_center(&self, offset: Vec2) -> Pos2 {
        self.center + offset * self.scale
    }
}

/// Draws the backdrop, the wheel at `angle` degrees and the pointer.
/// Returns true when the primary button went down over the canvas.
pub fn render_wheel_canvas(
    ui: &mut egui::Ui,
    angle: f32,
    archive: &[FortuneEntry],
    stars: &[Star],
) -> bool {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
    let canvas = Canvas::fit(response.rect);

    painter.rect_filled(response.rect, 0.0, BACKGROUND);

    for star in stars {
        painter.circle_filled(
            canvas.point(star.x, star.y),
            star.size / 2.0 * canvas.scale,
            STAR_COLOR,
        );
    }

    let width = sector_width(archive.len());
    for (i, entry) in archive.iter().enumerate() {
        let start = angle + i as f32 * width;
        draw_sector(&painter, &canvas, start, width, entry.color);

        let mid = (start + width / 2.0).to_radians();
        draw_label(
            &painter,
            &canvas,
            entry.label_cn,
            22.0,
            mid,
            Vec2::new(consts::LABEL_RADIUS, -10.0),
        );
        draw_label(
            &painter,
            &canvas,
            entry.label_en,
            14.0,
            mid,
            Vec2::new(consts::LABEL_RADIUS, 18.0),
        );
    }

    // the pointer never rotates with the wheel
    painter.add(egui::Shape::convex_polygon(
        pointer_triangle(consts::POINTER_OFFSET)
            .into_iter()
            .map(|vertex| canvas.around_center(vertex))
            .collect(),
        POINTER_COLOR,
        egui::Stroke::NONE,
    ));

    response.hovered() && ui.input(|i| i.pointer.primary_pressed())
}

/// Pointer vertices around the wheel centre, in canvas units. The tip sits
/// just inside the rim at `offset` degrees, the same angle the landing lookup
/// reads from.
fn pointer_triangle(offset: f32) -> [Vec2; 3] {
    let rot = Rot2::from_angle(offset.to_radians());
    [
        rot * Vec2::new(260.0, -20.0),
        rot * Vec2::new(260.0, 20.0),
        rot * Vec2::new(220.0, 0.0),
    ]
}

fn draw_sector(
    painter: &egui::Painter,
    canvas: &Canvas,
    start_deg: f32,
    width_deg: f32,
    color: Color32,
) {
    let mut points = Vec::with_capacity(consts::ARC_SEGMENTS + 2);
    points.push(canvas.center);

    for step in 0..=consts::ARC_SEGMENTS {
        let t = step as f32 / consts::ARC_SEGMENTS as f32;
        let theta = (start_deg + t * width_deg).to_radians();
        points.push(canvas.around_center(Vec2::angled(theta) * consts::WHEEL_RADIUS));
    }

    painter.add(egui::Shape::convex_polygon(points, color, egui::Stroke::NONE));
}

/// Text centred on `offset` in the frame rotated by `rotation`, and rotated with it.
fn draw_label(
    painter: &egui::Painter,
    canvas: &Canvas,
    text: &str,
    size: f32,
    rotation: f32,
    offset: Vec2,
) {
    let rot = Rot2::from_angle(rotation);
    let galley = painter.layout_no_wrap(
        text.to_owned(),
        FontId::proportional(size * canvas.scale),
        LABEL_COLOR,
    );

    let anchor = canvas.around_center(rot * offset);
    let top_left = anchor - rot * (galley.size() / 2.0);

    painter.add(egui::Shape::Text(
        TextShape::new(top_left, galley, LABEL_COLOR).with_angle(rotation),
    ));
}
