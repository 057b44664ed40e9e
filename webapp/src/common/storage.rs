use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

const KEY_PREFIX: &str = "showroom";

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("{KEY_PREFIX}_{key}");

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a missing key is the normal first-visit case, so callers get an error they are
// expected to swallow; only genuinely broken values are worth a console line
pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("{KEY_PREFIX}_{key}");

    LocalStorage::get(key.clone()).map_err(|err| {
        if !matches!(err, gloo_storage::errors::StorageError::KeyNotFound(_)) {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
        }
        anyhow::Error::msg(format!("Local storage failure for {key}: {err}"))
    })
}
