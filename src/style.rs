use egui::Color32;

pub const TEXT_ERROR: Color32 = Color32::from_rgb(232, 80, 80);
