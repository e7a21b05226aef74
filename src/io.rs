use crate::error::{AppError, AppResult};
use crate::logging::{log, LogLevel};
use crate::utils;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

fn map_io_error(error: std::io::Error, path: &Path) -> AppError {
    AppError::Io(format!("I/O error at path '{}': {}", path.display(), error))
}

async fn write_file_async(fpath: &Path, data: &[u8]) -> AppResult<()> {
    let mut file = File::create(fpath)
        .await
        .map_err(|e| map_io_error(e, fpath))?;
    file.write_all(data)
        .await
        .map_err(|e| map_io_error(e, fpath))?;
    Ok(())
}

/// Pretty-serializes `data` off the async thread and overwrites `fpath`
/// unconditionally. serde_json emits non-ASCII text literally, which the
/// downstream reader expects.
pub async fn save_json<T>(fpath: PathBuf, data: T, log_ctx: String) -> AppResult<()>
where
    T: Serialize + Send + Sync + 'static,
{
    let json_string =
        utils::run_blocking(move || serde_json::to_string_pretty(&data).map_err(AppError::from))
            .await
            .map_err(|e| {
                log(
                    LogLevel::Error,
                    &format!(
                        "Save JSON ({}) FAIL - Serialize Error: {}. File: '{}'",
                        log_ctx,
                        e,
                        fpath.display()
                    ),
                );
                e
            })?;

    write_file_async(&fpath, json_string.as_bytes())
        .await
        .map_err(|e| {
            log(
                LogLevel::Error,
                &format!(
                    "Save JSON ({}) FAIL - Write Error: {}. File: '{}'",
                    log_ctx,
                    e,
                    fpath.display()
                ),
            );
            e
        })
}

pub async fn load_json<T>(fpath: &Path) -> AppResult<T>
where
    T: DeserializeOwned,
{
    let text = fs::read_to_string(fpath)
        .await
        .map_err(|e| map_io_error(e, fpath))?;
    serde_json::from_str(&text).map_err(AppError::from)
}
