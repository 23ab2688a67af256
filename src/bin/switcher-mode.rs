use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use window_switcher::services::{create_hotkey_daemon, ModeState, ModeToggle};
use window_switcher::utils::{init_tracing, paths};
use window_switcher::Config;

#[derive(Parser, Debug)]
#[command(name = "switcher-mode")]
#[command(about = "Включение и выключение горячих клавиш переключателя окон")]
#[command(after_help = "Без команды выполняется toggle.\n\nПримеры:\n  switcher-mode          # переключить\n  switcher-mode status   # текущее состояние\n  switcher-mode on       # включить")]
struct Args {
    #[command(subcommand)]
    command: Option<ModeCommand>,

    /// Путь к файлу конфигурации
    #[arg(short, long, global = true, env = "WINDOW_SWITCHER_CONFIG")]
    config: Option<PathBuf>,

    /// Режим сухого запуска (демон не трогаем)
    #[arg(long, global = true)]
    dry_run: bool,

    /// Уровень логирования
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum ModeCommand {
    /// Включить горячие клавиши
    On,
    /// Выключить горячие клавиши
    Off,
    /// Переключить состояние
    Toggle,
    /// Показать текущее состояние и привязки
    Status,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse_from(normalize_command(std::env::args_os()));

    if let Err(e) = init_tracing(&args.log_level) {
        eprintln!("Не удалось инициализировать логирование: {e}");
        return ExitCode::FAILURE;
    }

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| paths::DEFAULT_CONFIG_PATH.clone());
    let config = Config::load_or_default(&config_path);

    let daemon = create_hotkey_daemon(config.settings.hotkey_config(), args.dry_run);
    let mode = ModeToggle::new(daemon, config.settings.state_file());

    let result = match args.command.unwrap_or(ModeCommand::Toggle) {
        ModeCommand::On => mode.activate().await,
        ModeCommand::Off => mode.deactivate().await,
        ModeCommand::Toggle => mode.toggle().await,
        ModeCommand::Status => Ok(mode.status()),
    };

    match result {
        Ok(state) => {
            print_state(state, &config);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Не удалось переключить режим: {e}");
            ExitCode::FAILURE
        }
    }
}

const COMMANDS: [&str; 5] = ["on", "off", "toggle", "status", "help"];

// Опции, за которыми следует отдельное значение
const VALUE_OPTIONS: [&str; 3] = ["-c", "--config", "--log-level"];

/// Команда без учёта регистра: `switcher-mode ON` == `switcher-mode on`
fn normalize_command(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args: Vec<OsString> = args.into_iter().collect();
    let mut index = 1;

    while index < args.len() {
        let Some(arg) = args[index].to_str() else {
            break;
        };

        if VALUE_OPTIONS.contains(&arg) {
            index += 2;
            continue;
        }
        if arg.starts_with('-') {
            index += 1;
            continue;
        }

        let lower = arg.to_lowercase();
        if COMMANDS.contains(&lower.as_str()) {
            args[index] = lower.into();
        }
        break;
    }

    args
}

fn print_state(state: ModeState, config: &Config) {
    println!("Горячие клавиши: {}", state);

    if state.is_active() {
        for (key, app_id) in &config.shortcuts {
            let name = config
                .application(app_id)
                .map(|app| app.name.as_str())
                .unwrap_or(app_id.as_str());
            println!("   {} → {}", key, name);
        }
    } else {
        println!("   Привязки отключены");
    }
}
