use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use window_switcher::services::create_hotkey_daemon;
use window_switcher::services::hotkey_daemon::{render_bindings, write_bindings};
use window_switcher::utils::{init_tracing, paths};
use window_switcher::Config;

#[derive(Parser, Debug)]
#[command(name = "switcher-setup")]
#[command(about = "Генерирует конфиг xbindkeys из конфигурации переключателя и перезапускает демон")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, env = "WINDOW_SWITCHER_CONFIG")]
    config: Option<PathBuf>,

    /// Путь к бинарнику window-switcher (по умолчанию рядом с этим)
    #[arg(long)]
    switcher: Option<PathBuf>,

    /// Режим сухого запуска (демон не трогаем)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| paths::DEFAULT_CONFIG_PATH.clone());
    // xbindkeys запускает команды из своего каталога: нужен абсолютный путь
    let config_path = std::fs::canonicalize(&config_path).unwrap_or(config_path);
    let config = Config::load_or_default(&config_path);

    if config.bound_applications().next().is_none() {
        anyhow::bail!("В {:?} нет ни одной рабочей привязки клавиш", config_path);
    }

    let switcher = match args.switcher {
        Some(path) => path,
        None => std::env::current_exe()
            .context("Не удалось определить путь к текущему бинарнику")?
            .with_file_name("window-switcher"),
    };

    let hotkey_config = config.settings.hotkey_config();
    // Путь по умолчанию window-switcher найдёт сам
    let custom_config = (config_path != *paths::DEFAULT_CONFIG_PATH).then_some(config_path.as_path());
    write_bindings(
        &hotkey_config,
        &render_bindings(&config, &switcher, custom_config),
    )?;

    let daemon = create_hotkey_daemon(hotkey_config, args.dry_run);
    if !daemon.is_installed().await {
        daemon.install().await?;
    }
    daemon.restart().await?;
    info!("xbindkeys перезапущен");

    println!("Настроены клавиши:");
    for (key, app) in config.bound_applications() {
        println!("  {} -> {}", key, app.name);
    }
    println!();
    println!("Чтобы xbindkeys стартовал автоматически, добавьте его в автозагрузку.");
    println!("После правки {:?} запустите switcher-setup ещё раз.", config_path);

    if args.dry_run {
        warn!("Режим сухого запуска - демон не перезапускался");
    }

    Ok(())
}
