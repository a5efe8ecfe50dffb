use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use onboard_client::{
    app::{self, AppConfig},
    domains::{
        ui::feedback_ui::{ToastLevel, ToastManager},
        user_creation::{
            form::FormField,
            messages::{Message, UserCreationEvent},
        },
    },
    runtime::FormRuntime,
};
use onboard_model::options::OptionPair;

/// Headless front end for the user-registration form
#[derive(Debug, Parser)]
#[command(name = "onboard", version, about)]
struct Cli {
    /// Base URL of the user directory backend
    #[arg(long, global = true)]
    server_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and print the profile and role option lists
    Options,
    /// Fill in the registration form and submit it
    Create(CreateArgs),
}

#[derive(Debug, Args)]
struct CreateArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    alias: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    /// Role identifier, as listed by `onboard options`
    #[arg(long)]
    role: String,
    /// Profile identifier. Selected on the form but not sent with the request.
    #[arg(long)]
    profile: Option<String>,
}

impl CreateArgs {
    fn field_messages(&self) -> Vec<Message> {
        let mut messages: Vec<Message> = [
            (FormField::FirstName, &self.first_name),
            (FormField::LastName, &self.last_name),
            (FormField::Alias, &self.alias),
            (FormField::Username, &self.username),
            (FormField::Email, &self.email),
        ]
        .into_iter()
        .map(|(field, value)| Message::field_changed(field.as_str(), value.as_str()))
        .collect();
        if let Some(profile) = &self.profile {
            messages.push(Message::ProfileSelected(profile.clone()));
        }
        messages.push(Message::RoleSelected(self.role.clone()));
        messages
    }
}

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("onboard", LevelFilter::Debug)
        .filter_module("onboard_client", LevelFilter::Debug)
        .init();
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::from_environment().context("invalid environment configuration")?;
    if let Some(url) = &cli.server_url {
        config = config.with_server_url(url).context("invalid --server-url")?;
    }
    if let Some(secs) = cli.timeout_secs {
        config = config
            .with_timeout_secs(secs)
            .context("invalid --timeout-secs")?;
    }
    Ok(config)
}

fn print_options(title: &str, options: Option<&Vec<OptionPair>>) {
    println!("{title}:");
    match options {
        Some(options) if !options.is_empty() => {
            for option in options {
                println!("  {:<24} {}", option.value, option.label);
            }
        }
        Some(_) => println!("  (none)"),
        None => println!("  (unavailable)"),
    }
}

fn print_toasts(toasts: &ToastManager) {
    for toast in toasts.toasts() {
        let notification = &toast.notification;
        println!(
            "[{}] {}: {}",
            notification.level, notification.title, notification.message
        );
    }
}

async fn load_options(runtime: &mut FormRuntime) {
    runtime.dispatch(Message::Initialize);
    runtime.run_until_idle().await;
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    log::info!("Starting with {:?}", config);

    let toasts = Arc::new(ToastManager::new());
    let mut runtime =
        app::build_runtime(&config, toasts.clone()).context("failed to set up API client")?;

    match &cli.command {
        Command::Options => {
            load_options(&mut runtime).await;
            print_options("Profiles", runtime.state().profile_options.as_ref());
            print_options("Roles", runtime.state().role_options.as_ref());
            Ok(())
        }
        Command::Create(args) => {
            load_options(&mut runtime).await;
            for message in args.field_messages() {
                runtime.dispatch(message);
            }
            runtime.dispatch(Message::Submit);
            runtime.run_until_idle().await;

            print_toasts(&toasts);
            for event in runtime.take_events() {
                let UserCreationEvent::UserCreated(payload) = event;
                log::debug!("Created user payload: {}", payload);
            }

            if toasts.count_level(ToastLevel::Error) > 0 {
                anyhow::bail!("user was not created");
            }
            Ok(())
        }
    }
}
