//! CrossToast demo binary
//!
//! Fires one toast per severity plus an actionable toast with buttons
//! and a payload, then waits for activations until Ctrl-C.

use std::collections::HashMap;
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use crosstoast::infrastructure::{create_notifier, load_config, NotifierPreference};
use crosstoast::{FacadeConfig, Toast, ToastButton, ToastDuration, ToastOptions};

/// CrossToast - desktop notification demo
#[derive(Parser, Debug)]
#[command(name = "crosstoast-demo")]
#[command(about = "Send a batch of demo desktop notifications")]
struct Cli {
    /// Application identifier registered with the platform
    #[arg(long, value_name = "ID")]
    app_id: Option<String>,

    /// Human readable application name
    #[arg(long, value_name = "NAME")]
    display_name: Option<String>,

    /// Path to the app icon
    #[arg(long, value_name = "PATH")]
    icon: Option<String>,

    /// Backend to use (auto, notify-rust, notify-send, console, noop)
    #[arg(short = 'n', long, value_name = "BACKEND")]
    notifier: Option<String>,

    /// Optional TOML config file
    #[arg(short = 'c', long, value_name = "PATH")]
    config: Option<String>,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // File config under CLI overrides, defaults at the bottom
    let file_config = match cli.config.as_deref() {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{} {}", "✗".red(), e);
                return ExitCode::FAILURE;
            }
        },
        None => FacadeConfig::default(),
    };
    let cli_config = FacadeConfig {
        app_id: cli.app_id,
        display_name: cli.display_name,
        icon_path: cli.icon,
        notifier: cli.notifier,
    };
    let config = FacadeConfig::defaults()
        .merge(file_config)
        .merge(cli_config);

    let preference = match config
        .notifier
        .as_deref()
        .unwrap_or("auto")
        .parse::<NotifierPreference>()
    {
        Ok(preference) => preference,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            return ExitCode::FAILURE;
        }
    };

    let (notifier, backend) = match create_notifier(preference).await {
        Ok(selected) => selected,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            return ExitCode::FAILURE;
        }
    };
    eprintln!("{} using {} backend", "ℹ".cyan(), backend);

    let toast = Toast::new(notifier);
    if let Err(e) = toast
        .initialize(
            config.app_id.as_deref().unwrap_or("dev.crosstoast.demo"),
            config.display_name.as_deref().unwrap_or("CrossToast Demo"),
            config.icon_path.as_deref(),
        )
        .await
    {
        eprintln!("{} {}", "✗".red(), e);
        return ExitCode::FAILURE;
    }

    toast.subscribe(|event| {
        let token = if event.action_token().is_empty() {
            "<body>"
        } else {
            event.action_token()
        };
        eprintln!("{} activated: {}", "●".green(), token.bold());
        for (key, value) in event.payload() {
            eprintln!("    {}={}", key.cyan(), value);
        }
    });

    let sent = send_demo_batch(&toast).await;
    if let Err(e) = sent {
        eprintln!("{} {}", "✗".red(), e);
        return ExitCode::FAILURE;
    }

    eprintln!(
        "{} notifications sent; waiting for activations (Ctrl-C to quit)",
        "✓".green()
    );
    let _ = tokio::signal::ctrl_c().await;

    ExitCode::SUCCESS
}

async fn send_demo_batch(toast: &Toast) -> Result<(), crosstoast::ToastError> {
    toast
        .info("Build finished", "Your package was published.", None)
        .await?;
    toast
        .success("Backup complete", "All files synced.", None)
        .await?;
    toast
        .warning("High CPU", "Indexer is using 92% CPU.", None)
        .await?;
    toast
        .error("Service crashed", "Watcher stopped unexpectedly.", None)
        .await?;

    let options = ToastOptions {
        primary_button: Some(ToastButton::new("Deploy now").with_action("deploy")),
        secondary_button: Some(ToastButton::new("Later").with_action("later")),
        duration: ToastDuration::Long,
        payload: HashMap::from([("pipelineId".to_string(), "a1b2c3".to_string())]),
        ..Default::default()
    };
    toast
        .show("Deploy ready", "Promote to production?", Some(options))
        .await
}
