//! Login screen. Any non-empty username and password pair gets in.

use super::app::KeyVox;
use crate::session::{Action, Screen};
use crate::ui::components::{back_button, flat_button, heading, primary_button, text_field};
use crate::ui::theme::{ERROR, LIGHT_PINK};

use eframe::egui::{self, RichText, Ui};

impl KeyVox {
    pub(super) fn display_page_login(&mut self, ui: &mut Ui) -> Option<Action> {
        let Screen::Login(form) = self.session.screen_mut() else {
            return None;
        };
        let mut action = None;

        if back_button(ui).clicked() {
            action = Some(Action::Back);
        }

        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            heading(ui, "Login to KeyVox", 28.0);
            ui.add_space(20.0);

            text_field(ui, &mut form.username, "Username", false, 300.0);
            ui.add_space(10.0);
            let password = text_field(ui, &mut form.password, "Password", true, 300.0);
            let pressed_enter =
                password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.add_space(25.0);

            if primary_button(ui, "Login", egui::vec2(200.0, 40.0)).clicked() || pressed_enter {
                action = Some(Action::SubmitLogin);
            }
            ui.add_space(10.0);

            let enroll = RichText::new("No account? Enroll your voice").color(LIGHT_PINK);
            if flat_button(ui, enroll).clicked() {
                action = Some(Action::StartEnrollment);
            }

            if let Some(error) = &form.error {
                ui.add_space(5.0);
                ui.label(RichText::new(error.to_string()).size(12.0).color(ERROR));
            }
        });

        action
    }
}
