use std::{io, sync::OnceLock};

use application::{args::Action, render, Args, Config, Service};
use common::Handler as _;
use service::{command::CreateListing, query::Explore};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    if start().await.is_err() {
        std::process::exit(1);
    }
}

async fn start() -> Result<(), ()> {
    let Args { config, action } = Args::parse().map_err(|e| {
        if !e.use_stderr() {
            // `--help` and `--version` output.
            e.exit();
        }
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { source, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service = Service::new(source.into());
    log::debug!(
        "using listings file `{}`",
        service.source().path().display(),
    );

    match action {
        Action::Explore(args) => {
            let feed =
                service.execute(Explore::from(args)).await.map_err(|e| {
                    log::error!("failed to explore listings: {e}");
                })?;
            println!("{}", render::feed(&feed));
        }
        Action::Sell(args) => {
            let listing = service
                .execute(CreateListing::from(args))
                .await
                .map_err(|e| {
                    if let Some(hint) = render::hint(e.as_ref()) {
                        log::warn!("{e}. {hint}");
                    } else if e.as_ref().is_validation() {
                        log::warn!("{e}");
                    } else {
                        log::error!("failed to create listing: {e}");
                    }
                })?;
            println!("{}", render::listed(&listing));
        }
    }

    Ok(())
}
