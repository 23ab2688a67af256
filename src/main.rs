use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};

use window_switcher::services::{create_activator, Orchestrator, Outcome, WmctrlWindowSource};
use window_switcher::utils::{init_tracing, paths};
use window_switcher::Config;

#[derive(Parser, Debug)]
#[command(name = "window-switcher")]
#[command(about = "Фокусирует окно приложения, привязанного к клавише, или запускает его")]
#[command(after_help = "Пример: window-switcher F1")]
struct Args {
    /// Клавиша из таблицы shortcuts (или id/псевдоним приложения с --app)
    key: String,

    /// Трактовать аргумент как id приложения или псевдоним
    #[arg(long)]
    app: bool,

    /// Путь к файлу конфигурации
    #[arg(short, long, env = "WINDOW_SWITCHER_CONFIG")]
    config: Option<PathBuf>,

    /// Режим сухого запуска (без реальных действий)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_tracing(&args.log_level) {
        eprintln!("Не удалось инициализировать логирование: {e}");
        return ExitCode::FAILURE;
    }

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| paths::DEFAULT_CONFIG_PATH.clone());
    let config = Arc::new(Config::load_or_default(&config_path));

    if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
    }

    let orchestrator = Orchestrator::new(
        config,
        Box::new(WmctrlWindowSource::new()),
        create_activator(args.dry_run),
    );

    let result = if args.app {
        orchestrator.handle_app(&args.key).await
    } else {
        orchestrator.handle_key(&args.key).await
    };

    match result {
        Ok(Outcome::Focused(window)) => {
            info!("Фокус на существующем окне {}", window);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Launched { command }) => {
            info!("Запущено: {}", command);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
