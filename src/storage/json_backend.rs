//! Filesystem-backed key-value storage: one JSON file per key, written
//! atomically by staging to a temporary file.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use super::{KeyValueStorage, Result};

const DEFAULT_DIR_NAME: &str = ".moneybook";
const FILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.moneybook`.
/// `MONEYBOOK_HOME` overrides it (tests point this at a temp dir).
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("MONEYBOOK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn open(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn open_default() -> Result<Self> {
        Self::open(app_data_dir())
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, FILE_EXTENSION))
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        write_atomic(&self.key_path(key), value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, data)?;
    fs::rename(tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
