use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

use coach_core::model::SectionId;
use services::Clock;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSection { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSection { raw } => {
                write!(f, "invalid --start-section value: {raw}")
            }
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    start_section: SectionId,
    clock: Clock,
    seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn start_section(&self) -> SectionId {
        self.start_section
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn encouragement_seed(&self) -> Option<u64> {
        self.seed
    }
}

struct Args {
    start_section: SectionId,
    seed: Option<u64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--start-section <key>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --start-section basics");
    eprintln!();
    eprintln!("Section keys:");
    for section in SectionId::ALL {
        eprintln!("  {} ({})", section.key(), section.title());
    }
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COACH_START_SECTION, COACH_SEED");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut start_section = std::env::var("COACH_START_SECTION")
            .ok()
            .and_then(|value| SectionId::from_key(&value))
            .unwrap_or(SectionId::Basics);
        let mut seed = std::env::var("COACH_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--start-section" => {
                    let value = require_value(args, "--start-section")?;
                    start_section = SectionId::from_key(&value)
                        .ok_or(ArgsError::InvalidSection { raw: value })?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            start_section,
            seed,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        start_section: parsed.start_section,
        clock: Clock::default(),
        seed: parsed.seed,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev
    // setups. Explicitly disable it so the app doesn't behave like a modal
    // window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Learning Coach")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
