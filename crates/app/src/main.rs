use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{PageChanged, PageListener};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};
use walkthrough_core::{ContentCatalog, Error as CoreError};
use walkthrough_core::builtin::home_network_security;
use walkthrough_core::model::PageDescriptor;

const LOG_ENV: &str = "WALKTHROUGH_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidLogFilter { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidLogFilter { raw } => write!(f, "invalid --log value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui      [--log <filter>] [--always-on-top]");
    eprintln!("  cargo run -p app -- outline [--json] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {LOG_ENV}");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Outline,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "outline" => Some(Self::Outline),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Help,
    Run(Args),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    command: Command,
    log_filter: String,
    always_on_top: bool,
    json: bool,
}

impl Args {
    /// Parse everything after the program name. `env_log` is the value of
    /// `WALKTHROUGH_LOG`, overridden by `--log`.
    fn parse(argv: Vec<String>, env_log: Option<String>) -> Result<Parsed, ArgsError> {
        let mut iter = argv.into_iter().peekable();

        // Launching the UI is the default when no subcommand is given.
        let command = match iter.peek().map(String::as_str) {
            None => Command::Ui,
            Some(first) if first.starts_with('-') => Command::Ui,
            Some(first) => {
                let command = Command::from_arg(first)
                    .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?;
                iter.next();
                command
            }
        };

        let mut args = Self {
            command,
            log_filter: env_log
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            always_on_top: false,
            json: false,
        };

        while let Some(arg) = iter.next() {
            match (arg.as_str(), command) {
                ("--log", _) => {
                    let value = require_value(&mut iter, "--log")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLogFilter { raw: value });
                    }
                    args.log_filter = value;
                }
                ("--always-on-top", Command::Ui) => args.always_on_top = true,
                ("--json", Command::Outline) => args.json = true,
                ("--help" | "-h", _) => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(args))
    }
}

fn init_tracing(filter: &str) -> Result<(), ArgsError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|_| ArgsError::InvalidLogFilter {
        raw: filter.to_string(),
    })?;
    // stderr keeps `outline` output on stdout clean.
    let stderr_layer = log_fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
    Ok(())
}

//
// ─── COMPOSITION ───────────────────────────────────────────────────────────────
//

struct PageLogger;

impl PageListener for PageLogger {
    fn page_changed(&self, event: &PageChanged) {
        info!(from = %event.from, to = %event.to, kind = ?event.kind, "page changed");
    }
}

struct DesktopApp {
    catalog: Arc<ContentCatalog>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<ContentCatalog> {
        Arc::clone(&self.catalog)
    }

    fn page_listener(&self) -> Option<Arc<dyn PageListener>> {
        Some(Arc::new(PageLogger))
    }
}

fn launch_ui(catalog: Arc<ContentCatalog>, always_on_top: bool) {
    let title = catalog.title().to_string();
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { catalog });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(always_on_top),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn load_catalog() -> Result<ContentCatalog, CoreError> {
    Ok(home_network_security()?)
}

fn render_outline(catalog: &ContentCatalog) -> String {
    let mut out = format!("{} ({} pages)\n", catalog.title(), catalog.len());
    for (idx, page) in catalog.pages().iter().enumerate() {
        let heading = page.title().unwrap_or("Introduction");
        let kind = format!("{:?}", page.kind()).to_lowercase();
        out.push_str(&format!("{:>3}. [{kind}] {heading}", idx + 1));
        match page {
            PageDescriptor::Lesson { sections, .. } => {
                out.push_str(&format!(" ({} sections)", sections.len()));
            }
            PageDescriptor::Quiz { questions, .. } => {
                out.push_str(&format!(" ({} questions)", questions.len()));
            }
            PageDescriptor::Completion { references, .. } => {
                out.push_str(&format!(" ({} references)", references.len()));
            }
            PageDescriptor::Welcome { .. } | PageDescriptor::Introduction { .. } => {}
        }
        out.push('\n');
    }
    out
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = Args::parse(argv, std::env::var(LOG_ENV).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    init_tracing(&args.log_filter)?;

    let catalog = Arc::new(load_catalog()?);
    info!(
        title = catalog.title(),
        pages = catalog.len(),
        quizzes = catalog.quiz_count(),
        "catalog loaded"
    );

    match args.command {
        Command::Ui => launch_ui(catalog, args.always_on_top),
        Command::Outline if args.json => println!("{}", serde_json::to_string_pretty(&*catalog)?),
        Command::Outline => print!("{}", render_outline(&catalog)),
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
