use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mathpad::capture::{CaptureOptions, FileSaveConfig, capture_whiteboard, save_capture};
use mathpad::input::{InputState, SurfaceEvent};
use mathpad::quiz::Catalog;
use mathpad::tutor::{GeminiClient, InlineImage, Tutor};
use mathpad::Config;
use std::fs;
use std::path::{Path, PathBuf};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("MATHPAD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "mathpad")]
#[command(version = VERSION, about = "Math practice whiteboard with an AI tutor")]
struct Cli {
    /// Read configuration from this file instead of ~/.config/mathpad/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List subjects and classes
    Subjects,

    /// Generate a practice question
    Question {
        /// Subject, e.g. Maths
        #[arg(long, short = 's')]
        subject: String,

        /// Class level, e.g. 9
        #[arg(long = "class", short = 'l', value_name = "N")]
        class_level: u8,
    },

    /// Ask for a hint, optionally based on a whiteboard image
    Hint {
        #[arg(long, short = 'q')]
        question: String,

        /// PNG of the student's work so far
        #[arg(long, short = 'i', value_name = "PNG")]
        image: Option<PathBuf>,
    },

    /// Grade a solution drawn on the whiteboard
    Verify {
        #[arg(long, short = 'q')]
        question: String,

        /// PNG of the student's solution
        #[arg(long, short = 'i', value_name = "PNG")]
        image: PathBuf,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay recorded surface events and write the resulting board as PNG
    Replay {
        /// JSON array of surface events
        #[arg(value_name = "EVENTS")]
        events: PathBuf,

        /// Exact output file
        #[arg(long, short = 'o', value_name = "PNG", conflicts_with = "save_dir")]
        output: Option<PathBuf>,

        /// Save a timestamped PNG into this directory (default: ~/Pictures/Mathpad)
        #[arg(long, value_name = "DIR")]
        save_dir: Option<PathBuf>,
    },

    /// Write a default config file
    InitConfig,

    /// Print the config file JSON schema
    Schema,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Subjects => print_catalog(&Catalog::from_config(&config.catalog)),
        Command::Question {
            subject,
            class_level,
        } => {
            let selection = Catalog::from_config(&config.catalog).select(&subject, class_level)?;
            let tutor = Tutor::new(GeminiClient::from_config(&config.tutor)?);
            let question = runtime()?.block_on(
                tutor.generate_question(&selection.subject, selection.class_level),
            )?;
            println!("{question}");
        }
        Command::Hint { question, image } => {
            let image = image.as_deref().map(read_png).transpose()?;
            let tutor = Tutor::new(GeminiClient::from_config(&config.tutor)?);
            let hint = runtime()?.block_on(tutor.generate_hint(&question, image.as_ref()))?;
            println!("{hint}");
        }
        Command::Verify {
            question,
            image,
            json,
        } => {
            let image = read_png(&image)?;
            let tutor = Tutor::new(GeminiClient::from_config(&config.tutor)?);
            let verdict = runtime()?.block_on(tutor.verify_answer(&question, &image))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                println!(
                    "{}",
                    if verdict.is_correct {
                        "Correct!"
                    } else {
                        "Not quite."
                    }
                );
                println!("{}", verdict.feedback);
                if let (false, Some(answer)) = (verdict.is_correct, &verdict.correct_answer) {
                    println!("Correct answer: {answer}");
                }
            }
        }
        Command::Replay {
            events,
            output,
            save_dir,
        } => replay(&config, &events, output.as_deref(), save_dir)?,
        Command::InitConfig => {
            let path = Config::create_default_file()?;
            println!("Wrote default config to {}", path.display());
        }
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&Config::json_schema())?);
        }
    }

    Ok(())
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("Failed to start async runtime")
}

fn read_png(path: &Path) -> Result<InlineImage> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read image {}", path.display()))?;
    Ok(InlineImage::from_png(&bytes))
}

fn print_catalog(catalog: &Catalog) {
    println!("Subjects:");
    for subject in catalog.subjects() {
        if catalog.is_active(subject) {
            println!("  {subject}");
        } else {
            println!("  {subject} (coming soon)");
        }
    }
    let classes: Vec<String> = catalog.classes().iter().map(u8::to_string).collect();
    println!("Classes: {}", classes.join(", "));
}

fn replay(
    config: &Config,
    events: &Path,
    output: Option<&Path>,
    save_dir: Option<PathBuf>,
) -> Result<()> {
    let text = fs::read_to_string(events)
        .with_context(|| format!("Failed to read events from {}", events.display()))?;
    let events: Vec<SurfaceEvent> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse events from {}", events.display()))?;

    let mut board = InputState::from_config(config);
    for event in &events {
        board.handle_event(*event);
    }
    log::info!(
        "Replayed {} event(s): {} stroke(s), board ends {}",
        events.len(),
        board.paths().len(),
        board.session_state().name()
    );

    let image = capture_whiteboard(&board, &CaptureOptions::from_config(config))?;
    let output = match output {
        Some(path) => {
            fs::write(path, &image.png)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path.to_path_buf()
        }
        None => {
            let mut save = FileSaveConfig::default();
            if let Some(dir) = save_dir {
                save.save_directory = dir;
            }
            save_capture(&image, &save)?
        }
    };
    println!(
        "Wrote {}x{} board to {}",
        image.width,
        image.height,
        output.display()
    );
    Ok(())
}
