//! # Progress Persistence
//!
//! Save/load the current problem id to `~/.eulerpad/progress.json`.
//!
//! The state is one integer plus a timestamp. It is read once at startup
//! and written after every advance. Writes use atomic rename (write
//! `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

const PROGRESS_FILE: &str = "progress.json";

/// The persisted progress: which problem the panel is on.
///
/// `current_problem_id` only ever grows within a session; the store never
/// decides ids, it just records what the app hands it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProgressState {
    pub current_problem_id: u32,
    pub updated_at: i64,
}

impl ProgressState {
    /// State pointing at `id`, stamped with the current time.
    pub fn at(id: u32) -> Self {
        ProgressState {
            current_problem_id: id,
            updated_at: Utc::now().timestamp(),
        }
    }

    /// The state after one "advance" action.
    pub fn advanced(&self) -> Self {
        ProgressState::at(self.current_problem_id + 1)
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        ProgressState {
            current_problem_id: 1,
            updated_at: 0,
        }
    }
}

/// Reads and writes the progress file in a given directory.
pub struct ProgressStore {
    dir: PathBuf,
}

impl ProgressStore {
    pub fn new(dir: PathBuf) -> Self {
        ProgressStore { dir }
    }

    /// Store rooted at `~/.eulerpad/`, creating the directory if needed.
    pub fn open_default() -> io::Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
        let dir = home.join(".eulerpad");
        fs::create_dir_all(&dir)?;
        Ok(ProgressStore::new(dir))
    }

    fn path(&self) -> PathBuf {
        self.dir.join(PROGRESS_FILE)
    }

    /// Load the persisted state. A missing file means first run; a
    /// malformed file is logged and treated the same way.
    pub fn load(&self) -> ProgressState {
        let path = self.path();
        if !path.exists() {
            debug!("No progress file at {}, starting at problem 1", path.display());
            return ProgressState::default();
        }

        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(state) => {
                    debug!("Loaded progress: {:?}", state);
                    state
                }
                Err(e) => {
                    warn!("Malformed progress file {}: {}", path.display(), e);
                    ProgressState::default()
                }
            },
            Err(e) => {
                warn!("Failed to read progress file {}: {}", path.display(), e);
                ProgressState::default()
            }
        }
    }

    /// Persist the state via `.tmp` + rename.
    pub fn save(&self, state: &ProgressState) -> io::Result<()> {
        atomic_write_json(&self.path(), state)
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
