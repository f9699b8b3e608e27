pub mod operations;
pub mod types;

pub use operations::AssetStore;
pub use types::Asset;
