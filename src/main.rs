// Main entry point
mod application;
mod domain;
mod infrastructure;
mod interfaces;
mod presentation;
mod state;

use application::capture::{self, CaptureLoop};
use application::gesture::GestureDetector;
use clap::Parser;
use colored::Colorize;
use domain::model::Provider;
use infrastructure::config::load_config;
use infrastructure::input::clipboard::SystemClipboard;
use infrastructure::input::hotkey::{spawn_listener, Hotkey};
use infrastructure::settings::SwitchOutcome;
use interfaces::cli::Cli;
use interfaces::events::{ShellEvent, ShellNotifier};
use presentation::shell::{self, Shell};
use presentation::theme::Theme;
use state::AppState;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        infrastructure::config::generate_config_sample()?;
        return Ok(());
    }

    let settings_path = infrastructure::config::get_settings_path();
    let state = AppState::new(settings_path, config.clone()).await?;

    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    if cli.status {
        let settings = state.settings.snapshot().await;
        println!("{}", (theme.title)("floattrans Status"));
        println!("{}", (theme.line)(&"━".repeat(40)));
        print!(
            "{}",
            shell::format_status(&settings, Some(state.settings.path()))
        );
        return Ok(());
    }

    if let Some(provider) = cli.configure {
        let provider = Provider::from(provider);
        let id = cli.app_id.as_deref().unwrap_or_default();
        let key = cli.app_key.as_deref().unwrap_or_default();
        state.settings.save_credentials(provider, id, key).await?;
        println!("{}", format!("{}配置已更新", provider).green());
        if cli.use_provider.is_none() && cli.text.is_empty() {
            return Ok(());
        }
    }

    if let Some(provider) = cli.use_provider {
        let provider = Provider::from(provider);
        match state.settings.switch_active(provider).await? {
            SwitchOutcome::Switched | SwitchOutcome::AlreadyActive => {
                println!("{}", format!("已切换到{}", provider).green());
            }
            SwitchOutcome::ConfigurationRequired(p) => {
                eprintln!(
                    "{}",
                    format!(
                        "{} is not configured, run: ft --configure {} --app-id <ID> --app-key <KEY>",
                        p,
                        p.wire_name().trim_end_matches("API").to_lowercase()
                    )
                    .red()
                );
                std::process::exit(1);
            }
        }
        if cli.text.is_empty() {
            return Ok(());
        }
    }

    if !cli.text.is_empty() {
        let text = capture::normalize(&cli.text.join(" "));
        return translate_once(&state, &text, &theme, cli.json).await;
    }

    listen(state, theme).await
}

/// Translate the command-line text once through the dispatcher
async fn translate_once(
    state: &AppState,
    text: &str,
    theme: &Theme,
    json: bool,
) -> anyhow::Result<()> {
    let (notifier, mut events) = ShellNotifier::channel();
    let dispatcher = state.dispatcher(notifier);

    match dispatcher.dispatch(text).await {
        Some(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
        Some(result) => print!(
            "{}",
            shell::format_translation(
                &result.translated,
                &result.original,
                theme,
                state.config.enable_emoji
            )
        ),
        None => {
            if let Ok(ShellEvent::ConfigurationRequired(p)) = events.try_recv() {
                eprintln!("{}", format!("{} credentials are not configured", p).red());
            } else {
                eprintln!("{}", "Translation failed, see log for details".red());
            }
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Background hotkey capture plus the interactive shell
async fn listen(state: AppState, theme: Theme) -> anyhow::Result<()> {
    let hotkey: Hotkey = state.config.hotkey.combo.parse()?;
    let detector = GestureDetector::new(
        state.config.hotkey.presses,
        Duration::from_millis(state.config.hotkey.window_ms),
    );

    let (notifier, events) = ShellNotifier::channel();
    let controls = state.controls(notifier.clone());
    let dispatcher = state.dispatcher(notifier);

    let presses = spawn_listener(hotkey)?;
    let capture_loop = CaptureLoop::new(presses, detector, SystemClipboard::new());
    let capture_task = tokio::spawn(capture::run(capture_loop, dispatcher));

    println!(
        "{}",
        format!(
            "floattrans: press {} x{} to translate the clipboard ({})",
            state.config.hotkey.combo,
            state.config.hotkey.presses,
            controls.current_provider().await
        )
        .green()
    );
    println!("{}", "Type `help` for commands.".bright_black());

    controls.startup_check().await;

    let shell = Shell::new(controls, theme, state.config.enable_emoji);
    shell::run(shell, events).await;

    info!("Shutting down");
    capture_task.abort();
    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &infrastructure::config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
