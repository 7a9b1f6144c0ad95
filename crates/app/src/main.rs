use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use portfolio_core::model::{ChartBackend, NavStyle, Section};
use services::{CatalogSource, PortfolioConfig, PortfolioService, RandomSource};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidValue { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidValue { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
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

fn parse_flag<T: FromStr>(flag: &'static str, raw: String) -> Result<T, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidValue { flag, raw })
}

fn env_value<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|value| value.parse().ok())
}

struct DesktopApp {
    portfolio: Arc<PortfolioService>,
    animation_step: Duration,
}

impl UiApp for DesktopApp {
    fn portfolio(&self) -> Arc<PortfolioService> {
        Arc::clone(&self.portfolio)
    }

    fn animation_step(&self) -> Duration {
        self.animation_step
    }
}

struct Args {
    config: PortfolioConfig,
    log_filter: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --nav sidebar|dropdown    section menu style (default: sidebar)");
    eprintln!("  --charts native|svg       chart renderer (default: native)");
    eprintln!("  --assets <dir>            image directory (default: assets)");
    eprintln!("  --catalog <file.json>     content catalog (default: built in)");
    eprintln!("  --section <slug>          first section shown (default: home)");
    eprintln!("  --step-ms <n>             sort animation frame delay (default: 100)");
    eprintln!("  --seed <n>                deterministic random choices");
    eprintln!("  --log <filter>            tracing filter (default: info)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PORTFOLIO_NAV, PORTFOLIO_CHARTS, PORTFOLIO_ASSETS_DIR, PORTFOLIO_CATALOG,");
    eprintln!("  PORTFOLIO_SECTION, PORTFOLIO_STEP_MS, PORTFOLIO_SEED, RUST_LOG");
}

impl Args {
    fn defaults_from_env() -> PortfolioConfig {
        let mut config = PortfolioConfig::default();
        if let Some(nav) = env_value::<NavStyle>("PORTFOLIO_NAV") {
            config.variant.nav = nav;
        }
        if let Some(charts) = env_value::<ChartBackend>("PORTFOLIO_CHARTS") {
            config.variant.charts = charts;
        }
        if let Ok(dir) = std::env::var("PORTFOLIO_ASSETS_DIR") {
            config.assets_dir = PathBuf::from(dir);
        }
        if let Ok(path) = std::env::var("PORTFOLIO_CATALOG") {
            config.catalog = CatalogSource::File(PathBuf::from(path));
        }
        if let Some(section) = env_value::<Section>("PORTFOLIO_SECTION") {
            config.initial_section = section;
        }
        if let Some(ms) = env_value::<u64>("PORTFOLIO_STEP_MS") {
            config.step_delay = Duration::from_millis(ms);
        }
        if let Some(seed) = env_value::<u64>("PORTFOLIO_SEED") {
            config.random = RandomSource::Seeded(seed);
        }
        config
    }

    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut config = Self::defaults_from_env();
        let mut log_filter = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--nav" => {
                    config.variant.nav = parse_flag("--nav", require_value(args, "--nav")?)?;
                }
                "--charts" => {
                    config.variant.charts =
                        parse_flag("--charts", require_value(args, "--charts")?)?;
                }
                "--assets" => {
                    let value = require_value(args, "--assets")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidValue {
                            flag: "--assets",
                            raw: value,
                        });
                    }
                    config.assets_dir = PathBuf::from(value);
                }
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    config.catalog = CatalogSource::File(PathBuf::from(value));
                }
                "--section" => {
                    config.initial_section =
                        parse_flag("--section", require_value(args, "--section")?)?;
                }
                "--step-ms" => {
                    let ms: u64 = parse_flag("--step-ms", require_value(args, "--step-ms")?)?;
                    config.step_delay = Duration::from_millis(ms);
                }
                "--seed" => {
                    let seed: u64 = parse_flag("--seed", require_value(args, "--seed")?)?;
                    config.random = RandomSource::Seeded(seed);
                }
                "--log" => {
                    log_filter = Some(require_value(args, "--log")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { config, log_filter })
    }
}

/// `--log` wins over `RUST_LOG`; without either, `info`.
fn init_logging(filter: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging(parsed.log_filter.as_deref())?;

    let portfolio = PortfolioService::from_config(&parsed.config)?;
    let app = DesktopApp {
        portfolio: Arc::new(portfolio),
        animation_step: parsed.config.step_delay,
    };

    let context = build_app_context(Arc::new(app));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Biotech Portfolio")
            .with_always_on_top(false),
    );

    tracing::info!("launching desktop window");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
