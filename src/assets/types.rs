//! Image assets read from the asset directory at startup

use std::path::PathBuf;

/// Every image the UI knows how to draw
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Asset {
    Logo,
    Help,
    About,
    Key,
    Mic,
    Otp,
}

impl Asset {
    pub const ALL: [Asset; 6] = [
        Asset::Logo,
        Asset::Help,
        Asset::About,
        Asset::Key,
        Asset::Mic,
        Asset::Otp,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Asset::Logo => "logo.png",
            Asset::Help => "help.png",
            Asset::About => "about.png",
            Asset::Key => "key.png",
            Asset::Mic => "mic.png",
            Asset::Otp => "otp.png",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
