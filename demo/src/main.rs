//! Splash screen demo.
//!
//! Opens a splash with "Loading...", runs two slow jobs on a worker thread
//! with status updates in between, shows "Loading complete!" and closes.
//!
//! ```text
//! splash-demo path/to/image.jpg --app-info "Your Application v1.0.0"
//! splash-demo --config splash.json
//! RUST_LOG=splashscreen=debug splash-demo
//! ```

mod jobs;

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use image::{ImageFormat, Rgb, RgbImage};
use splashscreen::{ImageSource, SplashOptions, SplashScreen};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Delay before the jobs start, so the first frame is on screen.
const JOBS_DELAY: Duration = Duration::from_millis(5);

#[derive(Parser, Debug)]
#[command(name = "splash-demo")]
#[command(about = "Show a splash screen while fake startup work runs", long_about = None)]
struct Args {
    /// Splash image; a gradient is generated when omitted
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// JSON file with splash options (takes precedence over the flags below)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial status line
    #[arg(long, default_value = "Loading...")]
    status: String,

    /// Application name and version shown in the header
    #[arg(long, default_value = "Your Application v1.0.0")]
    app_info: String,

    /// Seconds each fake job takes
    #[arg(long, default_value_t = 2)]
    job_secs: u64,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = build_options(&args)?;
    let mut splash = SplashScreen::new(options).context("Failed to open splash screen")?;

    let handle = splash.handle();
    let job_time = Duration::from_secs(args.job_secs);
    splash.after(JOBS_DELAY, move |_| {
        jobs::spawn(handle, job_time);
    });

    splash.mainloop().context("Splash loop failed")?;
    info!("startup finished");
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

fn build_options(args: &Args) -> Result<SplashOptions> {
    if let Some(path) = &args.config {
        let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let value: serde_json::Value =
            serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))?;
        return SplashOptions::from_json(&value).with_context(|| format!("Invalid options in {}", path.display()));
    }

    let image: ImageSource = match &args.image {
        Some(path) => path.clone().into(),
        None => gradient_png(960, 540)?.into(),
    };

    Ok(SplashOptions::new(image)
        .initial_status_value(args.status.as_str())
        .app_info(args.app_info.as_str())
        .app_info_font("helvetica", 36)
        .app_info_text_color("#333333")
        .status_font("helvetica", 18)
        .status_text_colour("#222222"))
}

/// Light vertical gradient, encoded as PNG in memory.
fn gradient_png(
    width: u32,
    height: u32,
) -> Result<Vec<u8>> {
    let image = RgbImage::from_fn(width, height, |_, y| {
        let t = (y * 96 / height.max(1)) as u8;
        Rgb([250 - t, 245 - t / 2, 235])
    });
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png).context("Failed to encode generated splash image")?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args(extra: &[&str]) -> Args { Args::parse_from(std::iter::once("splash-demo").chain(extra.iter().copied())) }

    #[test]
    fn test_generated_image_decodes() {
        let bytes = gradient_png(30, 20).unwrap();
        let image = image::load_from_memory(&bytes).unwrap();
        assert_eq!((image.width(), image.height()), (30, 20));
    }

    #[test]
    fn test_options_from_flags() {
        let options = build_options(&args(&["logo.png", "--status", "Starting", "--app-info", "Demo 2.0"])).unwrap();
        assert_eq!(options.image, ImageSource::Path(PathBuf::from("logo.png")));
        assert_eq!(options.initial_status_value, "Starting");
        assert_eq!(options.app_info, "Demo 2.0");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_options_without_image_use_gradient() {
        let options = build_options(&args(&[])).unwrap();
        assert!(matches!(options.image, ImageSource::Bytes(ref b) if !b.is_empty()));
        assert_eq!(options.initial_status_value, "Loading...");
    }

    #[test]
    fn test_options_from_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"image": "a.png", "status_font": ["mono", 14]}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let options = build_options(&args(&["--config", &path])).unwrap();
        assert_eq!(options.status_font, splashscreen::FontSpec::new("mono", 14));
    }

    #[test]
    fn test_bad_config_file_reports_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"image": "a.png", "status_font": ["mono", 14, 2]}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let err = build_options(&args(&["--config", &path])).unwrap_err();
        assert!(format!("{err:#}").contains("status_font"), "got {err:#}");
    }
}
