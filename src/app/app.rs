// Core app structure and per-frame dispatch

mod eframe_impl;

use crate::assets::AssetStore;
use crate::session::{Action, Screen, Session};
use crate::ui::theme::{page_frame, BG};

use eframe::egui;
use std::path::Path;

pub struct KeyVox {
    pub session: Session,
    pub assets: AssetStore,
}

impl KeyVox {
    pub fn new(ctx: &egui::Context, asset_dir: &Path) -> Self {
        let assets = AssetStore::load_all(ctx, asset_dir);
        let missing = assets.missing();
        if !missing.is_empty() {
            tracing::info!(
                "{} of {} images missing from {}, using text fallbacks",
                missing.len(),
                crate::assets::Asset::ALL.len(),
                assets.dir().display()
            );
        }

        Self {
            session: Session::new(),
            assets,
        }
    }

    /// Lay out the current screen, then apply whatever the user pressed.
    pub fn show(&mut self, ctx: &egui::Context) {
        let mut action: Option<Action> = None;

        if let Screen::Dashboard(dash) = self.session.screen() {
            let dash = dash.clone();

            // Chrome stays put; only the central panel follows `dash.content`
            egui::TopBottomPanel::top("dashboard_nav")
                .exact_height(90.0)
                .frame(
                    egui::Frame::NONE
                        .fill(BG)
                        .inner_margin(egui::Margin::symmetric(30, 7)),
                )
                .show_separator_line(false)
                .show(ctx, |ui| {
                    action = self.display_dashboard_nav(ui, &dash);
                });

            egui::CentralPanel::default()
                .frame(page_frame())
                .show(ctx, |ui| {
                    if let Some(pressed) = self.display_dashboard_content(ui, dash.content) {
                        action = Some(pressed);
                    }
                });
        } else {
            egui::CentralPanel::default()
                .frame(page_frame())
                .show(ctx, |ui| {
                    action = match self.session.screen() {
                        Screen::Welcome => self.display_page_welcome(ui),
                        Screen::Login(_) => self.display_page_login(ui),
                        Screen::EnrollUserInfo(_) => self.display_enroll_user_info(ui),
                        Screen::EnrollVoice => self.display_enroll_voice(ui),
                        Screen::EnrollOtp(_) => self.display_enroll_otp(ui),
                        Screen::EnrollSummary => self.display_enroll_summary(ui),
                        Screen::Dashboard(_) => None,
                    };
                });
        }

        if let Some(action) = action {
            self.session.apply(action);
            ctx.request_repaint();
        }
    }
}

/// Buttons the mockup draws without behaviour behind them
pub(super) fn log_inert_click(label: &str) {
    tracing::debug!("'{}' has no action in this build", label);
}
