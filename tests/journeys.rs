//! Journey suite entry point
//!
//! This binary drives the full browser suite against a live ParaBank
//! deployment. It only runs when PARABANK_E2E=1 is set; otherwise it
//! exits immediately so plain `cargo test` stays offline.
//!
//! Run with: PARABANK_E2E=1 cargo test --test journeys

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use parabank_e2e::config::SuiteConfig;
use parabank_e2e::error::HarnessResult;
use parabank_e2e::fixtures::FixtureStore;
use parabank_e2e::runner::{JourneyEnv, Runner};
use parabank_e2e::{journeys, setup, BrowserHandle};

#[derive(Parser, Debug)]
#[command(name = "parabank-e2e")]
#[command(about = "Browser + API journey suite for ParaBank")]
struct Args {
    /// Environment profile (selects env/.env.<env>)
    #[arg(short, long, env = "TEST_ENV", default_value = "prod")]
    env: String,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,

    /// Log in with stored credentials instead of registering a new user
    #[arg(long)]
    reuse_session: bool,

    /// Run only journeys whose name contains this string
    #[arg(short, long)]
    filter: Option<String>,

    /// Root directory for test-data/ and results/
    #[arg(long, default_value = ".")]
    fixtures_root: PathBuf,

    /// Retries per failed journey
    #[arg(long, default_value = "1")]
    retries: usize,
}

fn main() {
    if std::env::var("PARABANK_E2E").as_deref() != Ok("1") {
        eprintln!("PARABANK_E2E not set, skipping journey suite");
        std::process::exit(0);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    let args = Args::parse();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let result = rt.block_on(async_main(args));

    match result {
        Ok(success) => {
            if success {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

async fn async_main(args: Args) -> HarnessResult<bool> {
    let mut config = SuiteConfig::load_env(&args.env)?;
    config.headless = !args.headed;

    let store = FixtureStore::new(&args.fixtures_root);
    let browser = BrowserHandle::launch(&config).await?;

    let ctx = if args.reuse_session {
        setup::auth_setup(&config, &store, &browser).await?
    } else {
        setup::global_setup(&config, &store, &browser).await?
    };

    let journeys: Vec<_> = journeys::all()
        .into_iter()
        .filter(|j| {
            args.filter
                .as_deref()
                .map_or(true, |needle| j.name.contains(needle))
        })
        .collect();

    let mut env = JourneyEnv::new(config, store, browser, ctx);
    let runner = Runner::new(args.retries);
    let suite = runner.run(&mut env, &journeys).await?;
    runner.write_results(&env.store, &suite)?;
    env.shutdown().await?;

    Ok(suite.failed == 0)
}
