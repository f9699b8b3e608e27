mod app;
mod content;
mod pages_dashboard;
mod pages_enroll;
mod pages_login;
mod pages_welcome;

pub use app::KeyVox;
