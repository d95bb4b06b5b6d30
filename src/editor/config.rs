use crate::history::DEFAULT_CAPACITY;
use crate::logging::Logger;
use crate::store::DEFAULT_STORAGE_KEY;

/// Configuration knobs for an editing session.
#[derive(Clone)]
pub struct EditorConfig {
    /// Snapshots retained for undo/redo.
    pub history_capacity: usize,
    /// Key used with the configuration store.
    pub storage_key: String,
    /// Optional structured logger used by the editor.
    pub logger: Option<Logger>,
    /// Target field on emitted log events.
    pub log_target: String,
    /// Collect session counters.
    pub metrics_enabled: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            logger: None,
            log_target: "grid_studio::editor".to_string(),
            metrics_enabled: true,
        }
    }
}

impl EditorConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
