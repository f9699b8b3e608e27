//! Dashboard chrome: logo, nav tabs, status and help/about icons

mod about;
mod applications;
mod help;
mod home;
mod profile;

use super::app::KeyVox;
use crate::assets::Asset;
use crate::session::{Action, Dashboard, DashboardContent, NavTab};
use crate::ui::components::{asset_image, glyph_button, icon_button, nav_button};
use crate::ui::theme::{TEXT_PRIMARY, TEXT_SECONDARY};

use eframe::egui::{self, RichText, Ui};

impl KeyVox {
    pub(super) fn display_dashboard_nav(&self, ui: &mut Ui, dash: &Dashboard) -> Option<Action> {
        let mut action = None;

        ui.horizontal_centered(|ui| {
            match self.assets.get(Asset::Logo) {
                Some(logo) => {
                    ui.add(asset_image(logo, 75.0));
                }
                None => {
                    ui.label(RichText::new("KeyVox").size(36.0).strong().color(TEXT_PRIMARY));
                }
            }
            ui.add_space(30.0);

            for tab in NavTab::ALL {
                if nav_button(ui, tab.label(), dash.highlighted == tab).clicked() {
                    action = Some(Action::SelectTab(tab));
                }
                ui.add_space(10.0);
            }

            // Right to left: the last widget added sits leftmost
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match self.assets.status_icons() {
                    Some((help, about)) => {
                        if icon_button(ui, about, 24.0).on_hover_text("About").clicked() {
                            action = Some(Action::ShowAbout);
                        }
                        if icon_button(ui, help, 24.0).on_hover_text("Help").clicked() {
                            action = Some(Action::ShowHelp);
                        }
                    }
                    None => {
                        if glyph_button(ui, "i").on_hover_text("About").clicked() {
                            action = Some(Action::ShowAbout);
                        }
                        if glyph_button(ui, "?").on_hover_text("Help").clicked() {
                            action = Some(Action::ShowHelp);
                        }
                    }
                }
                ui.add_space(10.0);
                ui.label(
                    RichText::new(format!("Signed in as {}", dash.user)).color(TEXT_SECONDARY),
                );
            });
        });

        action
    }

    pub(super) fn display_dashboard_content(
        &self,
        ui: &mut Ui,
        content: DashboardContent,
    ) -> Option<Action> {
        match content {
            DashboardContent::Home => self.display_home(ui),
            DashboardContent::Applications => self.display_applications(ui),
            DashboardContent::Profile => return self.display_profile(ui),
            DashboardContent::About => self.display_about(ui),
            DashboardContent::Help => self.display_help(ui),
        }
        None
    }
}
