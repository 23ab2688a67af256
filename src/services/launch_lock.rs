use crate::error::{Result, SwitcherError};
use nix::errno::Errno;
use nix::fcntl::{Flock, FlockArg};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tokio::time::{sleep, Duration, Instant};
use tracing::debug;

/// Сколько ждать предыдущий запуск того же приложения
pub const DEFAULT_LOCK_WAIT: Duration = Duration::from_secs(3);

const RETRY_INTERVAL: Duration = Duration::from_millis(50);

/// Advisory-блокировка на одно приложение.
///
/// Держится от поиска окна до конца паузы после запуска, так что второе
/// нажатие той же клавиши ждёт и затем находит уже созданное окно.
/// Ожидание ограничено: зависший предыдущий вызов не блокирует клавишу навсегда.
/// Снимается при drop.
pub struct LaunchLock {
    _lock: Flock<File>,
    path: PathBuf,
}

impl LaunchLock {
    pub async fn acquire(lock_dir: &Path, app_id: &str, wait: Duration) -> Result<Self> {
        fs::create_dir_all(lock_dir)?;
        let path = lock_dir.join(format!("{}.lock", lock_file_stem(app_id)));

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)?;

        debug!("Ожидание блокировки {:?}", path);
        let deadline = Instant::now() + wait;
        loop {
            match Flock::lock(file, FlockArg::LockExclusiveNonblock) {
                Ok(lock) => return Ok(Self { _lock: lock, path }),
                Err((returned, Errno::EAGAIN)) if Instant::now() < deadline => {
                    file = returned;
                    sleep(RETRY_INTERVAL).await;
                }
                Err((_, Errno::EAGAIN)) => {
                    return Err(SwitcherError::Io(io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("{:?} занят дольше {:?}", path, wait),
                    )));
                }
                Err((_, errno)) => return Err(SwitcherError::Io(errno.into())),
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Имя файла блокировки из id приложения.
///
/// Разные id могут дать одно имя (`a/b` и `a_b`): такие приложения
/// просто сериализуются друг с другом.
fn lock_file_stem(app_id: &str) -> String {
    let stem: String = app_id
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
            _ => '_',
        })
        .collect();

    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        format!("_{}", stem)
    } else {
        stem
    }
}
