use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::Parser;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use unsplash_picker::{Photo, decode_photos, photo::UrlKind, unsplash};

#[derive(Debug, Error)]
enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Unsplash(#[from] unsplash::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("No configuration folder available, pass --config-dir")]
    NoConfigDir,

    #[error("A default configuration file has been created at {0}, please review it before proceeding")]
    RequiresConfigure(PathBuf),
}

type Result<T> = core::result::Result<T, Error>;

/// Inspect photos from a saved Unsplash API response.
#[derive(Debug, Parser)]
#[clap(name = "photo-picker", version, about)]
struct Cli {
    /// JSON file holding a photo, a list of photos or a search page
    file: PathBuf,

    /// Print each photo as a JSON object instead of a summary line
    #[clap(long)]
    json: bool,

    /// Folder holding config.json and .env
    #[clap(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    url_kind: UrlKind,
    show_exif: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url_kind: UrlKind::Regular,
            show_exif: false,
        }
    }
}

fn configure<P: AsRef<Path>>(config_folder: P) -> Result<Config> {
    let config_folder = config_folder.as_ref();

    if !config_folder.exists() {
        fs::create_dir_all(config_folder)?;
    }

    let env_path = config_folder.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path).map_err(|err| match err {
            dotenvy::Error::Io(err) => Error::Io(err),
            err => Error::Io(io::Error::new(io::ErrorKind::InvalidData, err)),
        })?;
    }

    let config_path = config_folder.join("config.json");
    if !config_path.exists() {
        let content = serde_json::to_string_pretty(&Config::default())?;
        fs::write(&config_path, content)?;

        return Err(Error::RequiresConfigure(config_path));
    }

    let content = fs::read_to_string(&config_path)?;

    Ok(serde_json::from_str(&content)?)
}

fn summary(photo: &Photo, config: &Config) -> String {
    let mut line = format!("{} {}x{}", photo.id(), photo.width(), photo.height());

    if let Some(user) = photo.user() {
        line.push_str(&format!(" by {}", user.display_name()));
    }

    if let Some(color) = photo.color() {
        line.push_str(&format!(" {color}"));
    }

    line.push_str(&format!(" likes:{}", photo.likes_count()));

    if let Some(url) = photo.url(config.url_kind) {
        line.push_str(&format!(" {url}"));
    }

    if config.show_exif {
        if let Some(exif) = photo.exif() {
            line.push_str(&format!(
                " [{} {} f/{} {}s ISO {}]",
                exif.make(),
                exif.model(),
                exif.aperture(),
                exif.exposure_time(),
                exif.iso()
            ));
        }
    }

    line
}

fn run(cli: Cli) -> Result<()> {
    let config_folder = match cli.config_dir {
        Some(path) => path,
        None => dirs::config_dir()
            .ok_or(Error::NoConfigDir)?
            .join("PhotoPicker"),
    };

    let config = configure(&config_folder)?;

    env_logger::builder().format_timestamp(None).init();
    debug!("Loaded configuration {config:?}");

    let content = fs::read_to_string(&cli.file)?;
    let photos = decode_photos(&content)?;
    info!("Decoded {} photos from {}", photos.len(), cli.file.display());

    for photo in &photos {
        if cli.json {
            println!("{}", serde_json::Value::Object(photo.json()));
        } else {
            println!("{}", summary(photo, &config));
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
