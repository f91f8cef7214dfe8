use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".homebudget";
const BUDGETS_FILE: &str = "budgets.json";
const TRANSACTIONS_FILE: &str = "transactions.json";
const CONFIG_FILE: &str = "config.json";

/// Returns the application-specific data directory, defaulting to `~/.homebudget`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("HOMEBUDGET_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Creates `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

/// Path to the serialized budget collection.
pub fn budgets_file_in(base: &Path) -> PathBuf {
    base.join(BUDGETS_FILE)
}

/// Path to the serialized transaction history.
pub fn transactions_file_in(base: &Path) -> PathBuf {
    base.join(TRANSACTIONS_FILE)
}

/// Path to the application configuration file.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
