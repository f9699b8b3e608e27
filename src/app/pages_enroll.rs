//! Enrollment flow: user info, voice phrases, OTP, summary.
//!
//! Nothing here is validated or recorded beyond the step 1 snapshot.

use super::app::{log_inert_click, KeyVox};
use super::content::{OTP_PROMPT, VOICE_PHRASE, VOICE_PHRASE_COUNT};
use crate::session::{Action, EnrollmentField, Screen};
use crate::ui::components::{back_button, heading, primary_button, text_field};
use crate::ui::theme::TEXT_PRIMARY;

use eframe::egui::{self, RichText, Ui};

impl KeyVox {
    pub(super) fn display_enroll_user_info(&mut self, ui: &mut Ui) -> Option<Action> {
        let Screen::EnrollUserInfo(form) = self.session.screen_mut() else {
            return None;
        };
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            heading(ui, "Enrollment - Step 1: User Information", 24.0);
            ui.add_space(20.0);

            for field in EnrollmentField::ALL {
                text_field(
                    ui,
                    form.field_mut(field),
                    field.label(),
                    field.is_secret(),
                    300.0,
                );
                ui.add_space(8.0);
            }
            ui.add_space(17.0);

            if primary_button(ui, "Next", egui::vec2(200.0, 40.0)).clicked() {
                action = Some(Action::SubmitUserInfo);
            }
            ui.add_space(5.0);
            if back_button(ui).clicked() {
                action = Some(Action::Back);
            }
        });

        action
    }

    pub(super) fn display_enroll_voice(&self, ui: &mut Ui) -> Option<Action> {
        let mut action = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    heading(ui, "Enrollment - Step 2: Voice Enrollment", 24.0);
                    ui.add_space(20.0);

                    for i in 1..=VOICE_PHRASE_COUNT {
                        ui.label(
                            RichText::new(format!("Voice Phrase {}: \"{}\"", i, VOICE_PHRASE))
                                .size(16.0)
                                .color(TEXT_PRIMARY),
                        );
                        ui.add_space(5.0);
                        let label = format!("Record Phrase {}", i);
                        if primary_button(ui, &label, egui::vec2(200.0, 35.0)).clicked() {
                            log_inert_click(&label);
                        }
                        ui.add_space(5.0);
                    }
                    ui.add_space(20.0);

                    if primary_button(ui, "Next", egui::vec2(200.0, 40.0)).clicked() {
                        action = Some(Action::Next);
                    }
                    ui.add_space(5.0);
                    if back_button(ui).clicked() {
                        action = Some(Action::Back);
                    }
                });
            });

        action
    }

    pub(super) fn display_enroll_otp(&mut self, ui: &mut Ui) -> Option<Action> {
        let Screen::EnrollOtp(form) = self.session.screen_mut() else {
            return None;
        };
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            heading(ui, "Enrollment - Step 3: OTP Verification", 24.0);
            ui.add_space(30.0);

            ui.label(RichText::new(OTP_PROMPT).size(16.0).color(TEXT_PRIMARY));
            ui.add_space(10.0);
            text_field(ui, &mut form.code, "", false, 150.0);
            ui.add_space(10.0);

            if primary_button(ui, "Send Code", egui::vec2(150.0, 35.0)).clicked() {
                log_inert_click("Send Code");
            }
            ui.add_space(20.0);
            if primary_button(ui, "Verify", egui::vec2(150.0, 35.0)).clicked() {
                action = Some(Action::VerifyOtp);
            }
            ui.add_space(5.0);
            if back_button(ui).clicked() {
                action = Some(Action::Back);
            }
        });

        action
    }

    pub(super) fn display_enroll_summary(&self, ui: &mut Ui) -> Option<Action> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            heading(ui, "Enrollment Complete!", 26.0);
            ui.add_space(30.0);

            if let Some(record) = self.session.enrollment() {
                for (label, value) in record.entries() {
                    ui.label(
                        RichText::new(format!("{}: {}", label, value))
                            .size(14.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(2.0);
                }
            }
            ui.add_space(30.0);

            if primary_button(ui, "Proceed to Dashboard", egui::vec2(250.0, 40.0)).clicked() {
                action = Some(Action::ProceedToDashboard);
            }
        });

        action
    }
}
