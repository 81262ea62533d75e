use common::render::Color;
use eframe::egui;

pub fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

pub const BANNER_TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x99, 0x99, 0x99);
pub const INFO_TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x33, 0x33, 0x33);
