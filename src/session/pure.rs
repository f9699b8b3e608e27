pub mod login;
pub mod transitions;

pub use transitions::Session;
