//! Placeholder copy shown by the dashboard and enrollment screens

pub const TAGLINE: &str = "Your voice, your key — secure and smart access control";
pub const COPYRIGHT: &str = "© 2025 KeyVox Technologies";

pub const VOICE_PHRASE: &str = "This is my secure voice.";
pub const VOICE_PHRASE_COUNT: usize = 5;
pub const OTP_PROMPT: &str = "Enter the 6-digit code sent to your email address:";

pub const TOKEN_ID: &str = "f3d4-9a7b-23ce-8e6f";
pub const LAST_SYNC: &str = "5 seconds ago";

pub struct AppCard {
    pub title: &'static str,
    pub info: &'static str,
    pub button: &'static str,
}

/// Applications page, in the same order as `AssetStore::card_icons`
pub const APP_CARDS: [AppCard; 3] = [
    AppCard {
        title: "Password",
        info: "********",
        button: "Edit Password",
    },
    AppCard {
        title: "Voice Biometrics",
        info: "Status: Enrolled",
        button: "Edit Biometrics",
    },
    AppCard {
        title: "OTP Settings",
        info: "Account: a***@gmail.com",
        button: "Edit Email Address",
    },
];

pub const PROFILE_FIELDS: [(&str, &str); 4] = [
    ("Name", "Ashley Jewel Heart Malasa"),
    ("Username", "ashley_m"),
    ("Email Address", "ashley.m@example.com"),
    ("Date of Enrollment", "October 5, 2025"),
];

pub const ABOUT_TEXT: &str = "\
KeyVox is a cutting-edge voice biometrics security application designed to provide
secure and convenient access control. Leveraging advanced AI, KeyVox identifies
users by their unique voice patterns, offering a robust alternative to traditional
passwords and tokens.

Our mission is to enhance digital security through innovative and user-friendly
solutions. With KeyVox, your voice truly becomes your key.

Version: 1.0.0
Developed by: KeyVox Technologies
© 2025 All Rights Reserved.";

pub const HELP_SECTIONS: [(&str, &str); 5] = [
    (
        "Getting Started",
        "Learn how to enroll your voice and set up your applications.",
    ),
    (
        "Troubleshooting Voice Enrollment",
        "Tips for successful voice enrollment and common issues.",
    ),
    (
        "Managing Applications",
        "How to add, remove, and configure your applications with KeyVox.",
    ),
    (
        "Account Security",
        "Best practices for keeping your account secure.",
    ),
    (
        "Contact Support",
        "Reach out to our support team for personalized assistance.",
    ),
];

pub const SUPPORT_FOOTER: &str = "For urgent issues, please email support@keyvox.com";
