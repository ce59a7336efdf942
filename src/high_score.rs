use std::cell::Cell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::HighScoreError;

/// Somewhere the best score survives between runs.
pub trait ScoreStore {
    /// The stored score, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<u32>, HighScoreError>;

    /// Replaces whatever was stored with `score`.
    fn save(&mut self, score: u32) -> Result<(), HighScoreError>;
}

/// A plain text file holding a single decimal number.
#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<Option<u32>, HighScoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(HighScoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let first_line = contents.lines().next().unwrap_or("").trim();
        first_line
            .parse()
            .map(Some)
            .map_err(|source| HighScoreError::Parse {
                path: self.path.clone(),
                contents: first_line.to_string(),
                source,
            })
    }

    fn save(&mut self, score: u32) -> Result<(), HighScoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Keeps the score in memory only. Clones share the same slot, so a caller
/// can keep a handle to watch what the game records.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    score: Rc<Cell<Option<u32>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryScoreStore {
    pub fn with_score(score: u32) -> Self {
        let store = MemoryScoreStore::default();
        store.score.set(Some(score));
        store
    }

    pub fn score(&self) -> Option<u32> {
        self.score.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<Option<u32>, HighScoreError> {
        Ok(self.score.get())
    }

    fn save(&mut self, score: u32) -> Result<(), HighScoreError> {
        self.score.set(Some(score));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// The best score seen so far, backed by a [`ScoreStore`].
pub struct HighScore {
    store: Box<dyn ScoreStore>,
    best: u32,
}

impl HighScore {
    /// Reads the stored best. A missing or unreadable store counts as 0; read
    /// failures are logged and never stop the game.
    pub fn load(store: Box<dyn ScoreStore>) -> Self {
        let best = match store.load() {
            Ok(Some(score)) => {
                tracing::info!(score, "loaded high score");
                score
            }
            Ok(None) => 0,
            Err(e) => {
                tracing::warn!("Failed to load high score: {}", e);
                0
            }
        };
        HighScore { store, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Records `score` if it beats the current best and returns whether it
    /// did. The store is written once per new best; a failed write is logged
    /// and the in-memory best is kept.
    pub fn submit(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }

        self.best = score;
        tracing::info!(score, "new high score");
        if let Err(e) = self.store.save(score) {
            tracing::warn!("Failed to save high score: {}", e);
        }
        true
    }
}
