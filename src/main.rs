mod cli;

use clap::Parser;
use sentinel_core::bootstrap::{AppBuilder, resolve_config_path};

use crate::cli::{Cli, Command, SubscriptionCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber();

    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config.as_deref());
    let app = AppBuilder::from_path(config_path)?;
    tracing::debug!(
        config = %app.config_path().display(),
        provider = %app.provider_kind(),
        "configuration loaded"
    );

    match cli.command {
        Command::Report { project, days } => {
            let reporter = app.build_reporter().await?;
            let (report, path) = reporter
                .export_progress_by_date_range(&project, days)
                .await?;
            println!("{report}");
            println!();
            println!("Report saved to {}", path.display());
        }
        Command::Generate { activity } => {
            let reporter = app.build_reporter().await?;
            let (report, path) = reporter.generate_from_file(&activity).await?;
            println!("{report}");
            println!();
            println!("Report saved to {}", path.display());
        }
        Command::Subscriptions { command } => {
            let subs = app.build_subscriptions();
            match command {
                SubscriptionCommand::List => {
                    for project in subs.list_subscriptions().await? {
                        println!("{project}");
                    }
                }
                SubscriptionCommand::Add { project } => {
                    if subs.add_subscription(&project).await? {
                        println!("Subscribed to {project}");
                    } else {
                        println!("Already subscribed to {project}");
                    }
                }
                SubscriptionCommand::Remove { project } => {
                    if subs.remove_subscription(&project).await? {
                        println!("Unsubscribed from {project}");
                    } else {
                        println!("Not subscribed to {project}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn init_subscriber() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
