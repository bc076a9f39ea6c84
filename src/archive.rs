//! The six symbols of Xiao Liu Ren (小六壬).
//!
//! Order matters: entry `i` owns sector `i` on the wheel.

use eframe::egui::Color32;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Emotion {
    Good,
    Neutral,
    Bad,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FortuneEntry {
    pub label_cn: &'static str,
    pub label_en: &'static str,
    pub meaning: &'static str,
    pub emotion: Emotion,
    pub color: Color32,
}

pub static ARCHIVE: [FortuneEntry; 6] = [
    FortuneEntry {
        label_cn: "大安",
        label_en: "Great Peace",
        meaning: "Things remain calm and stable. Peace brings quiet, steady fortune.",
        emotion: Emotion::Good,
        color: Color32::from_rgb(0xEA, 0xE0, 0xD7),
    },
    FortuneEntry {
        label_cn: "留连",
        label_en: "Lingering Delay",
        meaning: "Progress slows down. Repetition or delays appear — patience is required.",
        emotion: Emotion::Neutral,
        color: Color32::from_rgb(0x75, 0x80, 0x9C),
    },
    FortuneEntry {
        label_cn: "速喜",
        label_en: "Swift Joy",
        meaning: "Good luck is approaching quickly. Something delightful is coming soon.",
        emotion: Emotion::Good,
        color: Color32::from_rgb(0x8E, 0x9A, 0xAB),
    },
    FortuneEntry {
        label_cn: "赤口",
        label_en: "Red Mouth",
        meaning: "Arguments or tension may arise. Be cautious with speech and conflict.",
        emotion: Emotion::Bad,
        color: Color32::from_rgb(0xE8, 0xC0, 0xBD),
    },
    FortuneEntry {
        label_cn: "小吉",
        label_en: "Small Blessing",
        meaning: "A small moment of good fortune appears. Subtle but meaningful progress.",
        emotion: Emotion::Good,
        color: Color32::from_rgb(0x8D, 0x8F, 0xA4),
    },
    FortuneEntry {
        label_cn: "空亡",
        label_en: "Void Misfortune",
        meaning: "Plans may dissolve or fail to manifest. Step back and wait for a better time.",
        emotion: Emotion::Bad,
        color: Color32::from_rgb(0x8A, 0x8A, 0x8A),
    },
];
