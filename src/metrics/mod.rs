use crate::logging::{LogEvent, LogFields, LogLevel, json_kv};

/// Counters for an editing session.
#[derive(Debug, Default, Clone)]
pub struct EditorMetrics {
    commits: u64,
    ignored: u64,
    undos: u64,
    redos: u64,
    generations: u64,
    saves: u64,
    loads: u64,
}

impl EditorMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_commit(&mut self) {
        self.commits = self.commits.saturating_add(1);
    }

    pub fn record_ignored(&mut self) {
        self.ignored = self.ignored.saturating_add(1);
    }

    /// Count a navigation step; steps that hit either end of the history are not counted.
    pub fn record_navigation(&mut self, undo: bool, moved: bool) {
        if !moved {
            return;
        }
        if undo {
            self.undos = self.undos.saturating_add(1);
        } else {
            self.redos = self.redos.saturating_add(1);
        }
    }

    pub fn record_generation(&mut self) {
        self.generations = self.generations.saturating_add(1);
    }

    pub fn record_save(&mut self) {
        self.saves = self.saves.saturating_add(1);
    }

    pub fn record_load(&mut self) {
        self.loads = self.loads.saturating_add(1);
    }

    pub fn snapshot(&self, history_len: usize) -> MetricSnapshot {
        MetricSnapshot {
            commits: self.commits,
            ignored: self.ignored,
            undos: self.undos,
            redos: self.redos,
            generations: self.generations,
            saves: self.saves,
            loads: self.loads,
            history_len: history_len as u64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub commits: u64,
    pub ignored: u64,
    pub undos: u64,
    pub redos: u64,
    pub generations: u64,
    pub saves: u64,
    pub loads: u64,
    pub history_len: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        [
            json_kv("commits", self.commits),
            json_kv("ignored", self.ignored),
            json_kv("undos", self.undos),
            json_kv("redos", self.redos),
            json_kv("generations", self.generations),
            json_kv("saves", self.saves),
            json_kv("loads", self.loads),
            json_kv("history_len", self.history_len),
        ]
        .into_iter()
        .collect()
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "editor_metrics", self.as_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_only_counts_real_moves() {
        let mut metrics = EditorMetrics::new();
        metrics.record_navigation(true, true);
        metrics.record_navigation(true, false);
        metrics.record_navigation(false, true);
        let snapshot = metrics.snapshot(3);
        assert_eq!((snapshot.undos, snapshot.redos), (1, 1));
        assert_eq!(snapshot.history_len, 3);
    }

    #[test]
    fn snapshot_becomes_log_event() {
        let mut metrics = EditorMetrics::new();
        metrics.record_commit();
        metrics.record_commit();
        metrics.record_generation();
        let event = metrics.snapshot(3).to_log_event("grid_studio::metrics");
        assert_eq!(event.message, "editor_metrics");
        assert_eq!(event.field("commits"), Some(&serde_json::json!(2)));
        assert_eq!(event.field("generations"), Some(&serde_json::json!(1)));
    }
}
