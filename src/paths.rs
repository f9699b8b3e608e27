use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

/// `$XDG_CONFIG_HOME/keyvox`, falling back to `~/.config/keyvox`
pub static PATH_CONFIG: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    config_dir_from(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok())
});

pub fn config_dir_from(xdg_config_home: Option<String>, home: Option<String>) -> Option<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(xdg).join("keyvox"));
    }
    home.filter(|dir| !dir.is_empty())
        .map(|home| PathBuf::from(home).join(".config/keyvox"))
}

pub fn settings_path() -> Option<PathBuf> {
    PATH_CONFIG.as_ref().map(|dir| dir.join("settings.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xdg_wins_over_home() {
        assert_eq!(
            config_dir_from(Some("/xdg".into()), Some("/home/ashley".into())),
            Some(PathBuf::from("/xdg/keyvox"))
        );
    }

    #[test]
    fn test_home_fallback() {
        assert_eq!(
            config_dir_from(None, Some("/home/ashley".into())),
            Some(PathBuf::from("/home/ashley/.config/keyvox"))
        );
        assert_eq!(
            config_dir_from(Some(String::new()), Some("/home/ashley".into())),
            Some(PathBuf::from("/home/ashley/.config/keyvox"))
        );
    }

    #[test]
    fn test_no_location() {
        assert_eq!(config_dir_from(None, None), None);
    }
}
