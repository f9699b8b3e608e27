// Navigation state machine

use crate::session::pure::login::check_credentials;
use crate::session::types::{
    Action, Dashboard, DashboardContent, EnrollmentRecord, LoginForm, OtpForm, Screen,
    Transition, UserInfoForm,
};

/// Shown on the dashboard when it is opened without an enrollment record.
///
/// The summary screen is only reached after step 1 stores a record, so the
/// action API never hits this; it keeps `ProceedToDashboard` total.
pub const DEFAULT_USER: &str = "User";

/// Process-lifetime UI state: the current screen plus the last enrollment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    screen: Screen,
    enrollment: Option<EnrollmentRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Mutable access for binding form drafts to text fields
    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn enrollment(&self) -> Option<&EnrollmentRecord> {
        self.enrollment.as_ref()
    }

    /// Apply one user action. Actions that mean nothing on the current screen
    /// leave the session untouched.
    pub fn apply(&mut self, action: Action) -> Transition {
        let from = self.screen.name();

        let next = match (&mut self.screen, action) {
            (Screen::Welcome, Action::GetStarted) => Screen::Login(LoginForm::default()),

            (Screen::Login(_), Action::Back) => Screen::Welcome,
            (Screen::Login(form), Action::SubmitLogin) => {
                match check_credentials(&form.username, &form.password) {
                    Ok(()) => Screen::Dashboard(Dashboard::new(form.username.clone())),
                    Err(e) => {
                        tracing::info!("login refused: {}", e);
                        form.error = Some(e);
                        return Transition::Rejected(e);
                    }
                }
            }
            (Screen::Login(_), Action::StartEnrollment) => {
                Screen::EnrollUserInfo(UserInfoForm::default())
            }

            (Screen::EnrollUserInfo(form), Action::SubmitUserInfo) => {
                self.enrollment = Some(EnrollmentRecord::from(std::mem::take(form)));
                Screen::EnrollVoice
            }
            (Screen::EnrollUserInfo(_), Action::Back) => Screen::Login(LoginForm::default()),

            (Screen::EnrollVoice, Action::Next) => Screen::EnrollOtp(OtpForm::default()),
            (Screen::EnrollVoice, Action::Back) => {
                Screen::EnrollUserInfo(UserInfoForm::default())
            }

            // The code is never compared against anything
            (Screen::EnrollOtp(_), Action::VerifyOtp) => Screen::EnrollSummary,
            (Screen::EnrollOtp(_), Action::Back) => Screen::EnrollVoice,

            (Screen::EnrollSummary, Action::ProceedToDashboard) => {
                let user = self
                    .enrollment
                    .as_ref()
                    .map(|record| record.username().to_string())
                    .unwrap_or_else(|| DEFAULT_USER.to_string());
                Screen::Dashboard(Dashboard::new(user))
            }

            // Dashboard changes only touch the content region
            (Screen::Dashboard(dash), Action::SelectTab(tab)) => {
                dash.highlighted = tab;
                dash.content = tab.into();
                tracing::debug!("{} -> {}", from, dash.content.name());
                return Transition::Navigated;
            }
            (Screen::Dashboard(dash), Action::ShowHelp) => {
                dash.content = DashboardContent::Help;
                tracing::debug!("{} -> {}", from, dash.content.name());
                return Transition::Navigated;
            }
            (Screen::Dashboard(dash), Action::ShowAbout) => {
                dash.content = DashboardContent::About;
                tracing::debug!("{} -> {}", from, dash.content.name());
                return Transition::Navigated;
            }
            (Screen::Dashboard(dash), Action::Deactivate)
                if dash.content == DashboardContent::Profile =>
            {
                Screen::Welcome
            }

            (_, action) => {
                tracing::debug!("ignoring {:?} on {}", action, from);
                return Transition::Ignored;
            }
        };

        self.screen = next;
        tracing::info!("{} -> {}", from, self.screen.name());
        Transition::Navigated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::types::{EnrollmentField, LoginError, NavTab};

    fn login_with(session: &mut Session, username: &str, password: &str) -> Transition {
        if let Screen::Login(form) = session.screen_mut() {
            form.username = username.to_string();
            form.password = password.to_string();
        }
        session.apply(Action::SubmitLogin)
    }

    fn sample_form() -> UserInfoForm {
        UserInfoForm {
            full_name: "  Ashley Jewel Heart Malasa ".to_string(),
            username: "ashley_m".to_string(),
            password: "voice-key".to_string(),
            confirm_password: "something else".to_string(),
            email: "not an email".to_string(),
        }
    }

    fn enroll(session: &mut Session, form: UserInfoForm) {
        session.apply(Action::GetStarted);
        session.apply(Action::StartEnrollment);
        if let Screen::EnrollUserInfo(draft) = session.screen_mut() {
            *draft = form;
        }
        session.apply(Action::SubmitUserInfo);
        session.apply(Action::Next);
        session.apply(Action::VerifyOtp);
    }

    fn dashboard(session: &Session) -> &Dashboard {
        match session.screen() {
            Screen::Dashboard(dash) => dash,
            other => panic!("expected dashboard, got {:?}", other),
        }
    }

    #[test]
    fn test_starts_on_welcome_without_enrollment() {
        let session = Session::new();
        assert_eq!(session.screen(), &Screen::Welcome);
        assert!(session.enrollment().is_none());
    }

    #[test]
    fn test_login_with_both_fields_opens_dashboard() {
        for (user, pass) in [("ashley_m", "pw"), ("x", "y"), (" ", "\t"), ("名前", "パス")] {
            let mut session = Session::new();
            session.apply(Action::GetStarted);
            assert_eq!(login_with(&mut session, user, pass), Transition::Navigated);

            let dash = dashboard(&session);
            assert_eq!(dash.user, user);
            assert_eq!(dash.highlighted, NavTab::Home);
            assert_eq!(dash.content, DashboardContent::Home);
        }
    }

    #[test]
    fn test_login_with_empty_field_stays_with_error() {
        for (user, pass) in [("", "pw"), ("ashley_m", ""), ("", "")] {
            let mut session = Session::new();
            session.apply(Action::GetStarted);
            assert_eq!(
                login_with(&mut session, user, pass),
                Transition::Rejected(LoginError::MissingCredentials)
            );

            match session.screen() {
                Screen::Login(form) => {
                    assert_eq!(form.error, Some(LoginError::MissingCredentials));
                    assert_eq!(form.username, user);
                    assert_eq!(form.password, pass);
                }
                other => panic!("expected login, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_repeated_failure_then_success() {
        let mut session = Session::new();
        session.apply(Action::GetStarted);
        login_with(&mut session, "", "");
        login_with(&mut session, "", "");
        assert_eq!(login_with(&mut session, "ashley_m", "pw"), Transition::Navigated);
        assert_eq!(dashboard(&session).user, "ashley_m");
    }

    #[test]
    fn test_enrollment_snapshot_is_verbatim() {
        let mut session = Session::new();
        enroll(&mut session, sample_form());
        assert_eq!(session.screen(), &Screen::EnrollSummary);

        let record = session.enrollment().expect("record stored on step 1");
        assert_eq!(record, &EnrollmentRecord::from(sample_form()));
        assert_eq!(
            record.get(EnrollmentField::FullName),
            "  Ashley Jewel Heart Malasa "
        );
        // Mismatched passwords are kept as typed
        assert_ne!(
            record.get(EnrollmentField::Password),
            record.get(EnrollmentField::ConfirmPassword)
        );

        let labels: Vec<&str> = record.entries().map(|(label, _)| label).collect();
        assert_eq!(
            labels,
            [
                "Full Name",
                "Username",
                "Password",
                "Confirm Password",
                "Email Address"
            ]
        );
    }

    #[test]
    fn test_empty_enrollment_is_accepted() {
        let mut session = Session::new();
        enroll(&mut session, UserInfoForm::default());
        assert_eq!(session.screen(), &Screen::EnrollSummary);
        assert_eq!(session.enrollment(), Some(&EnrollmentRecord::default()));

        session.apply(Action::ProceedToDashboard);
        assert_eq!(dashboard(&session).user, "");
    }

    #[test]
    fn test_resubmitting_step_one_overwrites_record() {
        let mut session = Session::new();
        session.apply(Action::GetStarted);
        session.apply(Action::StartEnrollment);
        if let Screen::EnrollUserInfo(draft) = session.screen_mut() {
            *draft = sample_form();
        }
        session.apply(Action::SubmitUserInfo);
        assert_eq!(session.screen(), &Screen::EnrollVoice);

        // Step 2 back to step 1 opens an empty form
        assert_eq!(session.apply(Action::Back), Transition::Navigated);
        assert_eq!(
            session.screen(),
            &Screen::EnrollUserInfo(UserInfoForm::default())
        );
        assert_eq!(
            session.enrollment(),
            Some(&EnrollmentRecord::from(sample_form()))
        );

        let replacement = UserInfoForm {
            username: "second".to_string(),
            ..UserInfoForm::default()
        };
        if let Screen::EnrollUserInfo(draft) = session.screen_mut() {
            *draft = replacement.clone();
        }
        session.apply(Action::SubmitUserInfo);
        assert_eq!(session.screen(), &Screen::EnrollVoice);
        assert_eq!(session.enrollment(), Some(&EnrollmentRecord::from(replacement)));
    }

    #[test]
    fn test_summary_without_record_uses_default_user() {
        // Not reachable through actions; the summary always follows step 1
        let mut session = Session {
            screen: Screen::EnrollSummary,
            enrollment: None,
        };
        assert_eq!(session.apply(Action::ProceedToDashboard), Transition::Navigated);
        assert_eq!(dashboard(&session).user, DEFAULT_USER);
        assert_eq!(DEFAULT_USER, "User");
    }

    #[test]
    fn test_summary_proceeds_with_enrolled_username() {
        let mut session = Session::new();
        enroll(&mut session, sample_form());
        assert_eq!(session.apply(Action::ProceedToDashboard), Transition::Navigated);
        assert_eq!(dashboard(&session).user, "ashley_m");
    }

    #[test]
    fn test_otp_verify_ignores_code() {
        let mut session = Session::new();
        session.apply(Action::GetStarted);
        session.apply(Action::StartEnrollment);
        session.apply(Action::SubmitUserInfo);
        session.apply(Action::Next);
        if let Screen::EnrollOtp(form) = session.screen_mut() {
            form.code = "not-a-code".to_string();
        }
        assert_eq!(session.apply(Action::VerifyOtp), Transition::Navigated);
        assert_eq!(session.screen(), &Screen::EnrollSummary);
    }

    #[test]
    fn test_back_edges() {
        let mut session = Session::new();
        session.apply(Action::GetStarted);
        session.apply(Action::Back);
        assert_eq!(session.screen(), &Screen::Welcome);

        session.apply(Action::GetStarted);
        session.apply(Action::StartEnrollment);
        session.apply(Action::Back);
        assert!(matches!(session.screen(), Screen::Login(_)));

        session.apply(Action::StartEnrollment);
        session.apply(Action::SubmitUserInfo);
        session.apply(Action::Next);
        session.apply(Action::Back);
        assert_eq!(session.screen(), &Screen::EnrollVoice);
    }

    #[test]
    fn test_tab_navigation_keeps_record_and_highlight() {
        let mut session = Session::new();
        enroll(&mut session, sample_form());
        session.apply(Action::ProceedToDashboard);
        let record = session.enrollment().cloned();

        for tab in [NavTab::Home, NavTab::Applications, NavTab::Profile, NavTab::Home] {
            assert_eq!(session.apply(Action::SelectTab(tab)), Transition::Navigated);
            let dash = dashboard(&session);
            assert_eq!(dash.highlighted, tab);
            assert_eq!(dash.content, DashboardContent::from(tab));
            assert_eq!(dash.user, "ashley_m");
            assert_eq!(session.enrollment().cloned(), record);
        }
    }

    #[test]
    fn test_help_and_about_keep_highlight() {
        let mut session = Session::new();
        session.apply(Action::GetStarted);
        login_with(&mut session, "u", "p");
        session.apply(Action::SelectTab(NavTab::Applications));

        session.apply(Action::ShowHelp);
        assert_eq!(dashboard(&session).content, DashboardContent::Help);
        assert_eq!(dashboard(&session).highlighted, NavTab::Applications);

        session.apply(Action::ShowAbout);
        assert_eq!(dashboard(&session).content, DashboardContent::About);
        assert_eq!(dashboard(&session).highlighted, NavTab::Applications);
    }

    #[test]
    fn test_deactivate_returns_to_welcome_and_keeps_record() {
        let mut session = Session::new();
        enroll(&mut session, sample_form());
        session.apply(Action::ProceedToDashboard);
        session.apply(Action::SelectTab(NavTab::Profile));

        assert_eq!(session.apply(Action::Deactivate), Transition::Navigated);
        assert_eq!(session.screen(), &Screen::Welcome);
        assert_eq!(
            session.enrollment(),
            Some(&EnrollmentRecord::from(sample_form()))
        );
    }

    #[test]
    fn test_deactivate_only_from_profile() {
        let mut session = Session::new();
        session.apply(Action::GetStarted);
        login_with(&mut session, "u", "p");

        assert_eq!(session.apply(Action::Deactivate), Transition::Ignored);
        assert!(matches!(session.screen(), Screen::Dashboard(_)));
    }

    #[test]
    fn test_unrelated_actions_are_ignored() {
        let mut session = Session::new();
        let before = session.clone();
        for action in [
            Action::Back,
            Action::SubmitLogin,
            Action::VerifyOtp,
            Action::ProceedToDashboard,
            Action::SelectTab(NavTab::Profile),
            Action::ShowHelp,
        ] {
            assert_eq!(session.apply(action), Transition::Ignored);
        }
        assert_eq!(session, before);
    }

    #[test]
    fn test_leaving_login_discards_drafts() {
        let mut session = Session::new();
        session.apply(Action::GetStarted);
        login_with(&mut session, "", "typed");
        session.apply(Action::Back);
        session.apply(Action::GetStarted);
        assert_eq!(session.screen(), &Screen::Login(LoginForm::default()));
    }
}
