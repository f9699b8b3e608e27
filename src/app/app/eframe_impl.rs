//! eframe::App implementation for KeyVox

use super::KeyVox;
use eframe::egui;

impl eframe::App for KeyVox {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
