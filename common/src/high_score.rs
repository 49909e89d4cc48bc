use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::log;

/// Persistence collaborator for the best score. The game only proposes candidates.
pub trait HighScoreStore: Send + 'static {
    fn high_score(&self) -> Result<u32, String>;

    /// Stores `score` when it beats the current record.
    fn propose(&self, score: u32) -> Result<HighScoreUpdate, String>;
}

impl<T> HighScoreStore for Arc<T>
where
    T: HighScoreStore + Sync,
{
    fn high_score(&self) -> Result<u32, String> {
        self.as_ref().high_score()
    }

    fn propose(&self, score: u32) -> Result<HighScoreUpdate, String> {
        self.as_ref().propose(score)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighScoreUpdate {
    pub high_score: u32,
    pub is_new_record: bool,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct HighScoreRecord {
    pub high_score: u32,
    #[serde(default)]
    pub achieved_at: Option<String>,
}

impl Validate for HighScoreRecord {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

pub struct FileHighScoreStore {
    manager: ConfigManager<FileContentConfigProvider, HighScoreRecord, YamlConfigSerializer>,
}

impl FileHighScoreStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            manager: ConfigManager::from_yaml_file(file_path),
        }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn high_score(&self) -> Result<u32, String> {
        Ok(self.manager.get_config()?.high_score)
    }

    fn propose(&self, score: u32) -> Result<HighScoreUpdate, String> {
        let current = self.manager.get_config()?;
        if score <= current.high_score {
            return Ok(HighScoreUpdate {
                high_score: current.high_score,
                is_new_record: false,
            });
        }

        let record = HighScoreRecord {
            high_score: score,
            achieved_at: Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string()),
        };
        self.manager.set_config(&record)?;
        log!("New high score: {} (previous {})", score, current.high_score);

        Ok(HighScoreUpdate {
            high_score: score,
            is_new_record: true,
        })
    }
}

#[derive(Default)]
pub struct InMemoryHighScoreStore {
    high_score: Mutex<u32>,
}

impl InMemoryHighScoreStore {
    pub fn new(high_score: u32) -> Self {
        Self {
            high_score: Mutex::new(high_score),
        }
    }
}

impl HighScoreStore for InMemoryHighScoreStore {
    fn high_score(&self) -> Result<u32, String> {
        self.high_score
            .lock()
            .map(|score| *score)
            .map_err(|_| "High score lock poisoned".to_string())
    }

    fn propose(&self, score: u32) -> Result<HighScoreUpdate, String> {
        let mut current = self
            .high_score
            .lock()
            .map_err(|_| "High score lock poisoned".to_string())?;

        let is_new_record = score > *current;
        if is_new_record {
            *current = score;
        }

        Ok(HighScoreUpdate {
            high_score: *current,
            is_new_record,
        })
    }
}
