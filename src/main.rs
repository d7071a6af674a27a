//! Wiring & DI. Entry point: bootstrap adapters, inject into the notify
//! service, map the outcome to the process exit status.
//!
//! No business logic here. Exit statuses: 0 success (including the no-op
//! "no tags triggered" path), 1 fatal run failure, 2 interrupted.

use mention_relay::adapters::github::GithubForge;
use mention_relay::adapters::persistence::GroupFiles;
use mention_relay::ports::{ForgeGateway, GroupSource};
use mention_relay::shared::config::AppConfig;
use mention_relay::usecases::{NotifyService, RunOutcome, RunRequest};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // SIGINT/SIGTERM abort immediately, bypassing any in-progress publish.
    let code = tokio::select! {
        _ = shutdown_signal() => {
            warn!("interrupted; aborting run");
            2
        }
        code = run() => code,
    };
    std::process::exit(code);
}

async fn run() -> i32 {
    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "failed to load configuration");
            return 1;
        }
    };

    let request = RunRequest {
        repo: cfg.repo.clone().unwrap_or_default(),
        event_name: cfg.event_name.clone().unwrap_or_default(),
        issue_number: cfg.issue_number.clone().unwrap_or_default(),
        pr_number: cfg.pr_number.clone().unwrap_or_default(),
        comment_id: cfg.comment_id.clone().unwrap_or_default(),
        metadata_path: cfg.metadata_path.clone().unwrap_or_default(),
    };

    info!(
        repo = %request.repo,
        event_name = %request.event_name,
        issue_number = %request.issue_number,
        pr_number = %request.pr_number,
        comment_id = %request.comment_id,
        "received request payload"
    );

    let forge: Arc<dyn ForgeGateway> = Arc::new(GithubForge::new(
        cfg.api_url_or_default(),
        cfg.token.clone().unwrap_or_default(),
    ));
    let groups: Arc<dyn GroupSource> = Arc::new(GroupFiles::new(cfg.groups_dir_or_default()));
    let service = NotifyService::new(forge, groups);

    match service.run(&request).await {
        Ok(RunOutcome::Published) => {
            info!("notification published");
            0
        }
        Ok(RunOutcome::NothingToNotify) => 0,
        Err(e) => {
            error!(error = %e, "run failed");
            1
        }
    }
}

/// Resolves on SIGINT (Ctrl-C) or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
