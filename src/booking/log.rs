use std::{
    cmp::Reverse,
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use itertools::Itertools;

use crate::{booking::BookingIntent, prelude::*};

/// Where booking intents end up, for the shop to follow up on.
pub trait IntentLog {
    fn append(&self, intent: &BookingIntent) -> Result;

    /// Newest first, by creation time.
    fn latest(&self, limit: Option<usize>) -> Result<Vec<BookingIntent>>;
}

/// One JSON object per line, appended to a file.
pub struct JsonLinesLog {
    path: PathBuf,
}

impl JsonLinesLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IntentLog for JsonLinesLog {
    #[instrument(skip_all, fields(path = %self.path.display(), id = %intent.id))]
    fn append(&self, intent: &BookingIntent) -> Result {
        let mut line = serde_json::to_string(intent)?;
        line.push('\n');
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open `{}`", self.path.display()))?
            .write_all(line.as_bytes())
            .with_context(|| format!("failed to append to `{}`", self.path.display()))?;
        info!("recorded");
        Ok(())
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn latest(&self, limit: Option<usize>) -> Result<Vec<BookingIntent>> {
        if !self.path.is_file() {
            debug!("no leads yet");
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read `{}`", self.path.display()))?;
        let intents = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str::<BookingIntent>(line)
                    .with_context(|| format!("malformed lead on line {}", index + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(intents
            .into_iter()
            .rev()
            .sorted_by_key(|intent| Reverse(intent.created_at))
            .take(limit.unwrap_or(usize::MAX))
            .collect())
    }
}
