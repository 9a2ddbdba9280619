// Terminal stand-in for the floating window and tray menu
use crate::application::control::Controls;
use crate::domain::error::FtError;
use crate::domain::model::{CredentialState, Provider};
use crate::infrastructure::settings::{Settings, SwitchOutcome};
use crate::interfaces::events::ShellEvent;
use crate::presentation::theme::Theme;
use std::fmt::Write;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Use(Provider),
    Config,
    Reload,
    Status,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or("").to_ascii_lowercase();
    match head.as_str() {
        "use" | "switch" => {
            let name = words.next().ok_or("usage: use <baidu|youdao>")?;
            Ok(Command::Use(name.parse()?))
        }
        "config" | "configure" => Ok(Command::Config),
        "reload" => Ok(Command::Reload),
        "status" => Ok(Command::Status),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command: {} (try `help`)", other)),
    }
}

/// Credential prompt state; the prompt is modal while active
#[derive(Debug, Clone, PartialEq, Eq)]
enum Prompt {
    Idle,
    AppId(Provider),
    AppKey(Provider, String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    controls: Controls,
    theme: Theme,
    enable_emoji: bool,
    prompt: Prompt,
}

impl Shell {
    pub fn new(controls: Controls, theme: Theme, enable_emoji: bool) -> Self {
        Self {
            controls,
            theme,
            enable_emoji,
            prompt: Prompt::Idle,
        }
    }

    pub fn is_prompting(&self) -> bool {
        self.prompt != Prompt::Idle
    }

    pub fn handle_event(&mut self, event: ShellEvent) -> String {
        match event {
            ShellEvent::TranslationReady {
                translated,
                original,
            } => format_translation(&translated, &original, &self.theme, self.enable_emoji),
            ShellEvent::ConfigurationRequired(provider) => {
                if self.is_prompting() {
                    debug!("Already prompting, ignoring request for {}", provider);
                    return String::new();
                }
                self.prompt = Prompt::AppId(provider);
                format!(
                    "{}\nAppID: ",
                    (self.theme.warn)(&format!("配置{} ({})", provider, provider.display_name()))
                )
            }
            ShellEvent::ProviderSwitched(provider) => {
                format!("{}\n", (self.theme.notice)(&format!("已切换到{}", provider)))
            }
            ShellEvent::CredentialsSaved(provider) => {
                format!("{}\n", (self.theme.notice)(&format!("{}配置已更新", provider)))
            }
        }
    }

    pub async fn handle_line(&mut self, line: &str) -> (Flow, String) {
        let line = line.trim();

        match std::mem::replace(&mut self.prompt, Prompt::Idle) {
            Prompt::AppId(provider) => {
                self.prompt = Prompt::AppKey(provider, line.to_string());
                return (Flow::Continue, "API Key: ".to_string());
            }
            Prompt::AppKey(provider, id) => {
                let output = match self.controls.save_credentials(provider, &id, line).await {
                    Ok(()) => String::new(),
                    Err(FtError::Validation(_)) => {
                        format!("{}\n", (self.theme.warn)("AppID和API Key不能为空！"))
                    }
                    Err(e) => {
                        warn!("Saving credentials failed: {}", e);
                        format!("{}\n", (self.theme.warn)(&format!("保存配置失败：{}", e)))
                    }
                };
                return (Flow::Continue, output);
            }
            Prompt::Idle => {}
        }

        if line.is_empty() {
            return (Flow::Continue, String::new());
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(msg) => return (Flow::Continue, format!("{}\n", (self.theme.warn)(&msg))),
        };

        let output = match command {
            Command::Quit => return (Flow::Quit, String::new()),
            Command::Help => help_text(),
            Command::Status => {
                let settings = self.controls.settings().await;
                format_status(&settings, None)
            }
            Command::Config => {
                let provider = self.controls.current_provider().await;
                self.handle_event(ShellEvent::ConfigurationRequired(provider))
            }
            Command::Reload => match self.controls.reload_settings().await {
                Ok(()) => format!("{}\n", (self.theme.notice)("配置已重新加载")),
                Err(e) => format!("{}\n", (self.theme.warn)(&format!("加载配置文件失败: {}", e))),
            },
            Command::Use(provider) => match self.controls.switch_active_provider(provider).await {
                Ok(SwitchOutcome::AlreadyActive) => {
                    format!("{}\n", (self.theme.notice)(&format!("{}已在使用中", provider)))
                }
                // Switched / ConfigurationRequired are reported through events
                Ok(_) => String::new(),
                Err(e) => format!("{}\n", (self.theme.warn)(&format!("切换失败: {}", e))),
            },
        };
        (Flow::Continue, output)
    }
}

pub fn format_translation(translated: &str, original: &str, theme: &Theme, enable_emoji: bool) -> String {
    let mut output = String::new();
    let cutoff = "⸺".repeat(20);
    let (orig_label, trans_label) = if enable_emoji {
        ("📋 原文：", "🌐 译文：")
    } else {
        ("原文：", "译文：")
    };

    writeln!(output, "{}", (theme.line)(&cutoff)).ok();
    writeln!(output, "{}", (theme.label)(orig_label)).ok();
    writeln!(output, "    {}", (theme.original)(original)).ok();
    writeln!(output, "{}", (theme.label)(trans_label)).ok();
    writeln!(output, "    {}", (theme.translated)(translated)).ok();
    output
}

pub fn format_status(settings: &Settings, path: Option<&Path>) -> String {
    let mut output = String::new();
    if let Some(path) = path {
        writeln!(output, "Settings: {}", path.display()).ok();
    }
    writeln!(output, "Active provider: {}", settings.active).ok();
    for provider in Provider::ALL {
        let state = match settings.credentials(provider).state() {
            CredentialState::Configured => "Configured",
            CredentialState::Unconfigured => "Not configured",
        };
        writeln!(output, "{} ({}): {}", provider, provider.display_name(), state).ok();
    }
    output
}

fn help_text() -> String {
    [
        "Commands:",
        "  use <baidu|youdao>   switch translation provider",
        "  config               enter credentials for the current provider",
        "  reload               re-read the settings file",
        "  status               show provider status",
        "  quit                 exit",
        "",
    ]
    .join("\n")
}

/// Drive the shell until `quit`, Ctrl-C, or both inputs close
pub async fn run(mut shell: Shell, mut events: mpsc::UnboundedReceiver<ShellEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        let output = tokio::select! {
            event = events.recv() => match event {
                Some(event) => shell.handle_event(event),
                None => break,
            },
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => {
                    let (flow, output) = shell.handle_line(&line).await;
                    emit(&output);
                    if flow == Flow::Quit {
                        break;
                    }
                    continue;
                }
                Ok(None) => {
                    debug!("stdin closed, shell keeps displaying results");
                    stdin_open = false;
                    continue;
                }
                Err(e) => {
                    warn!("Failed to read stdin: {}", e);
                    stdin_open = false;
                    continue;
                }
            },
            _ = tokio::signal::ctrl_c() => break,
        };
        emit(&output);
    }
}

fn emit(output: &str) {
    if output.is_empty() {
        return;
    }
    print!("{}", output);
    std::io::Write::flush(&mut std::io::stdout()).ok();
}
