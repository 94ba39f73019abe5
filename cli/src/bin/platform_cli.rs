use clap::{Parser, Subcommand};
use cli::{DetectionSettings, LevelConfig, OutputFormat};
use color_eyre::eyre::Result;
use platforms::{DetectedPlatforms, PlatformError};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect platforms in a background image
    Detect {
        /// Path to the background image
        #[arg(short, long)]
        image: PathBuf,
        /// Path to save the generated platform code (defaults next to the image)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format: js or json
        #[arg(short, long, default_value = "js")]
        format: OutputFormat,
        /// Intensity threshold; all RGB channels must be strictly below it
        #[arg(long, default_value = "30")]
        threshold: u8,
        /// Components must have strictly more pixels than this
        #[arg(long, default_value = "50")]
        min_pixels: usize,
        /// Minimum platform width in pixels
        #[arg(long, default_value = "15")]
        min_width: u32,
        /// Minimum platform height in pixels
        #[arg(long, default_value = "8")]
        min_height: u32,
    },
    /// Detect platforms using an existing configuration file
    Process {
        /// Path to the TOML or JSON configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print the JSON schema for configuration files
    Schema,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect {
            image,
            output,
            format,
            threshold,
            min_pixels,
            min_width,
            min_height,
        } => {
            let settings = DetectionSettings {
                threshold,
                min_pixels,
                min_width,
                min_height,
            };
            let output =
                output.unwrap_or_else(|| image.with_file_name(default_output_name(format)));
            detect(&image, &output, format, &settings)?;
        }
        Commands::Process { config } => {
            let config = LevelConfig::from_file(&config)?;
            info!("Loaded config: {:?}", config);
            detect(
                Path::new(&config.image_path),
                Path::new(&config.output_path),
                config.format,
                &config.detection,
            )?;
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&LevelConfig::schema())?);
        }
    }

    Ok(())
}

fn default_output_name(format: OutputFormat) -> String {
    format!("detected_platforms.{}", format.extension())
}

fn detect(
    image_path: &Path,
    output_path: &Path,
    format: OutputFormat,
    settings: &DetectionSettings,
) -> Result<()> {
    info!("Loading image: {}", image_path.display());

    let pipeline = settings.pipeline();
    let detected = match pipeline.process_path(image_path) {
        Ok(detected) => detected,
        Err(PlatformError::ImageLoad(e)) => {
            // An unreadable image means zero platforms, not a crash.
            error!("Error analyzing image: {e}");
            warn!("No platforms detected");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    info!(
        "Image size: {} x {}",
        detected.image_width, detected.image_height
    );

    if detected.is_empty() {
        warn!("No platforms detected. Check if the image has black rectangles.");
        return Ok(());
    }

    report_platforms(&detected);

    match format {
        OutputFormat::Js => detected.save_javascript(output_path)?,
        OutputFormat::Json => detected.save_json(output_path)?,
    }
    info!("Code saved to: {}", output_path.display());

    Ok(())
}

fn report_platforms(detected: &DetectedPlatforms) {
    info!("Detected {} valid platforms:", detected.len());
    for (i, p) in detected.platforms.iter().enumerate() {
        info!(
            "{:2}. x:{:4} y:{:3} w:{:3} h:{:2}",
            i + 1,
            p.x,
            p.y,
            p.width,
            p.height
        );
    }
}
