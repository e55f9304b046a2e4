use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use services::{
    AppServices, Clock, LearnerService, LessonService, LessonSessionService, ServicesConfig,
    SubscriptionService,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

/// SignLearn: sign language lessons on the desktop.
#[derive(Parser, Debug)]
#[command(name = "signlearn", version)]
struct Args {
    /// Catalog JSON file to load instead of the bundled lessons.
    #[arg(long, env = "SIGNLEARN_CATALOG")]
    catalog: Option<PathBuf>,

    /// How long the simulated payment takes.
    #[arg(long, env = "SIGNLEARN_PAYMENT_DELAY_MS", default_value_t = 2000)]
    payment_delay_ms: u64,

    /// Start with premium already unlocked. The variable also takes `1` or `yes`.
    #[arg(
        long,
        env = "SIGNLEARN_PREMIUM",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    premium: bool,

    /// Log filter, e.g. `info` or `services=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log: String,
}

impl Args {
    fn services_config(&self) -> ServicesConfig {
        ServicesConfig {
            clock: Clock::system(),
            payment_delay: Duration::from_millis(self.payment_delay_ms),
            premium: self.premium,
        }
    }
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn lessons(&self) -> Arc<LessonService> {
        self.services.lessons()
    }

    fn lesson_sessions(&self) -> Arc<LessonSessionService> {
        self.services.lesson_sessions()
    }

    fn subscription(&self) -> Arc<SubscriptionService> {
        self.services.subscription()
    }

    fn learner(&self) -> Arc<LearnerService> {
        self.services.learner()
    }
}

fn init_logging(filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| -> Box<dyn std::error::Error> { err })?;
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log)?;

    let config = args.services_config();
    tracing::info!(
        catalog = ?args.catalog,
        payment_delay_ms = args.payment_delay_ms,
        premium = args.premium,
        "starting signlearn"
    );
    let services = AppServices::load(args.catalog.as_deref(), config)?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // Some dev setups default tao windows to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("SignLearn")
            .with_inner_size(LogicalSize::new(430.0, 900.0))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
