use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::VecDeque;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_CAPACITY: usize = 100;

/// A bounded log of past calculations, newest first.
///
/// Once full, adding an entry drops the oldest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl History {
    pub fn new(capacity: usize) -> History {
        History {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, entry: impl Into<String>) {
        self.entries.push_front(entry.into());
        self.entries.truncate(self.capacity);
    }

    /// Adds a successful calculation as `<expression> = <result>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use calculator::history::History;
    ///
    /// let mut history = History::default();
    /// history.record("1 + 2", 3.0);
    /// assert_eq!(history.last(), Some("1 + 2 = 3"));
    /// ```
    pub fn record(&mut self, expression: &str, result: f64) {
        self.add(format!("{} = {}", expression.trim(), result));
    }

    /// All entries, newest first.
    pub fn all(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Writes one entry per line, newest first, creating missing directories.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create directory {}", parent.display()))?;
        }
        let file = fs::File::create(path)
            .with_context(|| format!("Could not create history file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        for entry in &self.entries {
            writeln!(writer, "{}", entry)
                .with_context(|| format!("Could not write to {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("Could not write to {}", path.display()))?;

        info!("Saved {} history entries to {}", self.len(), path.display());
        Ok(())
    }

    /// Replaces the entries with the non-blank lines of the file, in file order.
    /// A missing file leaves the history untouched.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            debug!("No history file at {}", path.display());
            return Ok(());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read history file {}", path.display()))?;

        self.entries = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .take(self.capacity)
            .map(str::to_string)
            .collect();

        info!("Loaded {} history entries from {}", self.len(), path.display());
        Ok(())
    }

    /// `<home>/.calculator/history.txt`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find the home directory")?;
        Ok(home.join(".calculator").join("history.txt"))
    }
}
