//! Screen, action and enrollment types for the navigation state machine

// =============================================================================
// Screens
// =============================================================================

/// The single screen currently on display.
///
/// Drafts typed into a screen's fields live inside its variant, so replacing
/// the screen discards them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Login(LoginForm),
    EnrollUserInfo(UserInfoForm),
    EnrollVoice,
    EnrollOtp(OtpForm),
    EnrollSummary,
    Dashboard(Dashboard),
}

impl Screen {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Login(_) => "login",
            Screen::EnrollUserInfo(_) => "enroll-user-info",
            Screen::EnrollVoice => "enroll-voice",
            Screen::EnrollOtp(_) => "enroll-otp",
            Screen::EnrollSummary => "enroll-summary",
            Screen::Dashboard(dash) => dash.content.name(),
        }
    }
}

/// Tabs reachable from the dashboard nav bar
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub enum NavTab {
    #[default]
    Home,
    Applications,
    Profile,
}

impl NavTab {
    pub const ALL: [NavTab; 3] = [NavTab::Home, NavTab::Applications, NavTab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Applications => "Applications",
            NavTab::Profile => "User Profile",
        }
    }
}

/// What the dashboard's content region is showing
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub enum DashboardContent {
    #[default]
    Home,
    Applications,
    Profile,
    About, // Opened from the status icons, no nav highlight of its own
    Help,
}

impl DashboardContent {
    pub fn name(self) -> &'static str {
        match self {
            DashboardContent::Home => "dashboard-home",
            DashboardContent::Applications => "dashboard-applications",
            DashboardContent::Profile => "dashboard-profile",
            DashboardContent::About => "dashboard-about",
            DashboardContent::Help => "dashboard-help",
        }
    }
}

impl From<NavTab> for DashboardContent {
    fn from(tab: NavTab) -> Self {
        match tab {
            NavTab::Home => DashboardContent::Home,
            NavTab::Applications => DashboardContent::Applications,
            NavTab::Profile => DashboardContent::Profile,
        }
    }
}

/// Dashboard state: the outer chrome persists while `content` changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub user: String,
    /// Nav button drawn as active
    pub highlighted: NavTab,
    pub content: DashboardContent,
}

impl Dashboard {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            highlighted: NavTab::Home,
            content: DashboardContent::Home,
        }
    }
}

// =============================================================================
// Form drafts
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<LoginError>,
}

/// Enrollment step 1 fields as typed, before submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserInfoForm {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OtpForm {
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Please enter both username and password.")]
    MissingCredentials,
}

// =============================================================================
// Enrollment snapshot
// =============================================================================

/// Field labels of enrollment step 1, in display order
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum EnrollmentField {
    FullName,
    Username,
    Password,
    ConfirmPassword,
    Email,
}

impl EnrollmentField {
    pub const ALL: [EnrollmentField; 5] = [
        EnrollmentField::FullName,
        EnrollmentField::Username,
        EnrollmentField::Password,
        EnrollmentField::ConfirmPassword,
        EnrollmentField::Email,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EnrollmentField::FullName => "Full Name",
            EnrollmentField::Username => "Username",
            EnrollmentField::Password => "Password",
            EnrollmentField::ConfirmPassword => "Confirm Password",
            EnrollmentField::Email => "Email Address",
        }
    }

    /// Password fields are masked while typing
    pub fn is_secret(self) -> bool {
        matches!(
            self,
            EnrollmentField::Password | EnrollmentField::ConfirmPassword
        )
    }
}

impl UserInfoForm {
    pub fn field_mut(&mut self, field: EnrollmentField) -> &mut String {
        match field {
            EnrollmentField::FullName => &mut self.full_name,
            EnrollmentField::Username => &mut self.username,
            EnrollmentField::Password => &mut self.password,
            EnrollmentField::ConfirmPassword => &mut self.confirm_password,
            EnrollmentField::Email => &mut self.email,
        }
    }
}

/// Values submitted on enrollment step 1, stored verbatim.
///
/// Nothing is validated: the two password fields may differ and the email
/// may be anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnrollmentRecord {
    full_name: String,
    username: String,
    password: String,
    confirm_password: String,
    email: String,
}

impl EnrollmentRecord {
    pub fn get(&self, field: EnrollmentField) -> &str {
        match field {
            EnrollmentField::FullName => &self.full_name,
            EnrollmentField::Username => &self.username,
            EnrollmentField::Password => &self.password,
            EnrollmentField::ConfirmPassword => &self.confirm_password,
            EnrollmentField::Email => &self.email,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `(label, value)` pairs in field order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        EnrollmentField::ALL
            .into_iter()
            .map(|field| (field.label(), self.get(field)))
    }
}

impl From<UserInfoForm> for EnrollmentRecord {
    fn from(form: UserInfoForm) -> Self {
        Self {
            full_name: form.full_name,
            username: form.username,
            password: form.password,
            confirm_password: form.confirm_password,
            email: form.email,
        }
    }
}

// =============================================================================
// Actions
// =============================================================================

/// User intents produced by button presses
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Action {
    GetStarted,
    Back,
    SubmitLogin,
    StartEnrollment,
    SubmitUserInfo,
    Next,
    VerifyOtp,
    ProceedToDashboard,
    SelectTab(NavTab),
    ShowHelp,
    ShowAbout,
    Deactivate,
}

/// Outcome of applying an action to the session
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Transition {
    /// The screen changed (or the dashboard content did)
    Navigated,
    /// A guarded transition refused; the screen now shows the error
    Rejected(LoginError),
    /// The action means nothing on the current screen
    Ignored,
}
