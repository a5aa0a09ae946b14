//! Caller-owned workbook cache keyed by content fingerprint.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use callrep_model::Workbook;

use crate::error::Result;
use crate::workbook::{fingerprint, load_workbook};

/// Cache of loaded workbooks keyed by their content fingerprint.
///
/// There is no process-wide instance; callers create one and decide its
/// lifetime. An on-disk edit changes the fingerprint, so the next
/// [`WorkbookCache::get_or_load`] reloads without any explicit reset.
#[derive(Debug, Default)]
pub struct WorkbookCache {
    entries: BTreeMap<String, Arc<Workbook>>,
}

impl WorkbookCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the workbook for the directory's current content, loading
    /// it on first sight of this fingerprint.
    pub fn get_or_load(&mut self, dir: &Path) -> Result<Arc<Workbook>> {
        let key = fingerprint(dir)?;
        if let Some(workbook) = self.entries.get(&key) {
            debug!(fingerprint = %key, "workbook cache hit");
            return Ok(Arc::clone(workbook));
        }
        let workbook = Arc::new(load_workbook(dir)?);
        self.entries.insert(key, Arc::clone(&workbook));
        Ok(workbook)
    }

    /// Drops the entry matching the directory's current content, if any.
    pub fn invalidate(&mut self, dir: &Path) -> Result<()> {
        let key = fingerprint(dir)?;
        self.entries.remove(&key);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
