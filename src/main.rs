mod app;
mod assets;
mod config;
mod paths;
mod session;
mod ui;

use crate::app::KeyVox;
use crate::config::{load_settings, Settings};

use eframe::egui;
use std::path::PathBuf;

fn main() -> eframe::Result {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let cli = match CliArgs::parse(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("[keyvox] {}", e);
            eprintln!("{}", USAGE_TEXT);
            std::process::exit(1);
        }
    };
    if cli.help {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let mut settings = load_settings();
    cli.apply_to(&mut settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("KeyVox")
            .with_inner_size(settings.inner_size())
            .with_resizable(settings.resizable)
            .with_fullscreen(settings.fullscreen),
        ..Default::default()
    };

    let asset_dir = settings.asset_dir();
    let zoom = settings.effective_zoom();
    tracing::info!("Starting KeyVox (assets from {})", asset_dir.display());

    eframe::run_native(
        "KeyVox",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_zoom_factor(zoom);
            crate::ui::theme::apply_theme(&cc.egui_ctx);

            Ok(Box::new(KeyVox::new(&cc.egui_ctx, &asset_dir)))
        }),
    )
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("keyvox=info")),
        )
        .init();
}

/// Command line flags; each one overrides the matching settings field
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    help: bool,
    fullscreen: bool,
    asset_dir: Option<PathBuf>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum CliError {
    #[error("--assets needs a directory")]
    MissingAssetDir,
}

impl CliArgs {
    /// `args[0]` is the program name and is skipped
    fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut cli = CliArgs {
            help: args.iter().any(|arg| arg == "--help"),
            fullscreen: args.iter().any(|arg| arg == "--fullscreen"),
            asset_dir: None,
        };

        if let Some(index) = args.iter().skip(1).position(|arg| arg == "--assets") {
            match args.get(index + 2) {
                Some(dir) if !dir.starts_with("--") => cli.asset_dir = Some(PathBuf::from(dir)),
                _ => return Err(CliError::MissingAssetDir),
            }
        }

        Ok(cli)
    }

    fn apply_to(self, settings: &mut Settings) {
        if self.fullscreen {
            settings.fullscreen = true;
        }
        if let Some(dir) = self.asset_dir {
            settings.asset_dir = Some(dir);
        }
    }
}

static USAGE_TEXT: &str = r#"
Usage: keyvox [OPTIONS]

Options:
    --assets <dir>   Load logo.png and the icon images from <dir> instead of the working directory
    --fullscreen     Start the window in fullscreen mode
    --help           Show this message

Settings are read from $XDG_CONFIG_HOME/keyvox/settings.json when present.
Set RUST_LOG (e.g. RUST_LOG=keyvox=debug) to change log verbosity.
"#;
