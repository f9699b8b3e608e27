pub mod operations;
pub mod types;

pub use operations::load_settings;
pub use types::Settings;
