use anyhow::Context as _;
use clap::Parser;
use gtk4::gdk::Display;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Box as GtkBox, CssProvider, Label, Orientation};
use livesupport_widgets::config::{AppConfig, WindowConfig};
use livesupport_widgets::core::{configure_from, WidgetError, WidgetFactory};
use livesupport_widgets::ui::{render_preview, BlueBin, WHITE_BACKGROUND};
use livesupport_widgets::ButtonType;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const APP_ID: &str = "org.livesupport.WidgetGallery";

/// widget-gallery - Shows the LiveSupport themed widgets
#[derive(Parser, Debug, Clone)]
#[command(name = "widget-gallery")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Theme image directory (overrides the configured widgetFactory path)
    #[arg(short = 'i', long = "images", value_name = "DIR")]
    images: Option<PathBuf>,

    /// Only check that the theme loads, then exit
    #[arg(long = "check")]
    check: bool,

    /// Render an offscreen preview of the theme to a PNG file, then exit
    #[arg(long = "snapshot", value_name = "PNG")]
    snapshot: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Configuration file to load instead of the default one
    #[arg(value_name = "CONFIG_FILE")]
    config_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut app_config = load_config(cli.config_file.as_deref());
    if let Some(ref images) = cli.images {
        app_config.set_widget_image_path(images);
    }

    // Images are decoded here, before GTK starts; gdk-pixbuf needs no display
    let factory = WidgetFactory::instance();
    if let Err(e) = configure_from(&app_config.elements, factory.as_ref()) {
        error!("Failed to configure widget factory: {}", e);
        return ExitCode::FAILURE;
    }

    if cli.check {
        if let Some(path) = factory.image_path() {
            println!("Theme OK: {}", path.display());
        }
        return ExitCode::SUCCESS;
    }

    if let Some(ref snapshot) = cli.snapshot {
        return match write_snapshot(&factory, &app_config.window, snapshot) {
            Ok(()) => {
                println!("Preview written to {}", snapshot.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to write preview: {:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    let app = Application::builder().application_id(APP_ID).build();

    let window_config = app_config.window.clone();
    app.connect_activate(move |app| build_ui(app, &window_config));

    // Pass empty args since we already parsed them
    let status = app.run_with_args(&["widget-gallery"]);
    if status == gtk4::glib::ExitCode::SUCCESS {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Load the configuration file, falling back to defaults
fn load_config(path: Option<&Path>) -> AppConfig {
    match path {
        Some(path) => match AppConfig::load_from_path(path) {
            Ok(config) => {
                info!("Loaded configuration from: {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config file '{}': {}", path.display(), e);
                AppConfig::load().unwrap_or_default()
            }
        },
        None => match AppConfig::load() {
            Ok(config) => {
                info!("Loaded configuration from disk");
                config
            }
            Err(e) => {
                warn!("Failed to load config, using defaults: {}", e);
                AppConfig::default()
            }
        },
    }
}

fn write_snapshot(
    factory: &WidgetFactory,
    window: &WindowConfig,
    path: &Path,
) -> anyhow::Result<()> {
    let assets = factory.assets()?;
    let surface: cairo::ImageSurface = render_preview(&assets, window.width, window.height)?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Could not create {}", path.display()))?;
    surface.write_to_png(&mut file)?;
    Ok(())
}

fn build_ui(app: &Application, window_config: &WindowConfig) {
    info!("Building gallery window");

    load_css();

    let factory = WidgetFactory::instance();
    let content = match build_gallery(&factory) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to build gallery: {}", e);
            app.quit();
            return;
        }
    };

    let window = ApplicationWindow::builder()
        .application(app)
        .title(window_config.title.as_str())
        .default_width(window_config.width)
        .default_height(window_config.height)
        .build();
    window.set_child(Some(content.widget()));
    window.present();
}

/// Lay out one of each widget the factory makes inside a white window frame
fn build_gallery(factory: &WidgetFactory) -> Result<BlueBin, WidgetError> {
    let window_bin = BlueBin::new(factory.white_window_corners()?, WHITE_BACKGROUND);
    let row = GtkBox::new(Orientation::Horizontal, 16);

    let status = Label::new(Some("Ready"));

    // Blue bin: playlist selector and transport buttons
    let blue_bin = factory.create_blue_bin()?;
    let column = GtkBox::new(Orientation::Vertical, 8);

    let combo = factory.create_combo_box_text()?;
    for name in ["Morning show", "Afternoon mix", "Night playlist"] {
        combo.append_text(name);
    }
    combo.set_active(Some(0));
    let status_for_combo = status.clone();
    combo.connect_changed(move |text| {
        status_for_combo.set_text(text.as_deref().unwrap_or("No playlist"));
    });
    column.append(combo.widget());

    for label in ["Play", "Cue", "Stop"] {
        let button = factory.create_button(label)?;
        let status_for_button = status.clone();
        let message = format!("{} pressed", label);
        button.connect_clicked(move || status_for_button.set_text(&message));
        column.append(button.widget());
    }
    column.append(&status);
    blue_bin.set_child(Some(&column));

    // Dark blue bin: stock buttons
    let dark_bin = factory.create_dark_blue_bin()?;
    let delete = factory.create_stock_button(ButtonType::Delete)?;
    let status_for_delete = status.clone();
    delete.connect_clicked(move || status_for_delete.set_text("Delete pressed"));
    dark_bin.set_child(Some(delete.widget()));

    row.append(blue_bin.widget());
    row.append(dark_bin.widget());
    window_bin.set_child(Some(&row));

    Ok(window_bin)
}

fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(
        "
        button.livesupport-button,
        button.livesupport-image-button {
            padding: 0;
            min-height: 0;
            min-width: 0;
            background: transparent;
        }

        .livesupport-combo-box dropdown button {
            background: transparent;
        }
        ",
    );

    match Display::default() {
        Some(display) => gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => warn!("No display available, skipping widget CSS"),
    }
}
