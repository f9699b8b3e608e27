// Asset I/O and texture caching

pub mod load;
pub mod store;

pub use store::AssetStore;
