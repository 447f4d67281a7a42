//! Append-only action log shared between animals.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ports::ActionLogPort;

/// Records prefixed action entries in call order and echoes each to stdout.
///
/// One instance is typically shared (via `Arc`) by several animals, in which
/// case every animal's entries end up interleaved in a single ordered log.
#[derive(Debug)]
pub struct LoggingService {
    log_prefix: String,
    logs: Mutex<Vec<String>>,
    echo: bool,
}

impl LoggingService {
    pub const DEFAULT_PREFIX: &'static str = "[LOG]";

    pub fn new(log_prefix: impl Into<String>) -> Self {
        Self {
            log_prefix: log_prefix.into(),
            logs: Mutex::new(Vec::new()),
            echo: true,
        }
    }

    /// Toggle the stdout echo. Entries are recorded either way.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.log_prefix
    }

    /// Append `"{prefix} {message}"` to the log.
    pub fn log_action(&self, message: &str) {
        let entry = format!("{} {}", self.log_prefix, message);
        tracing::debug!(entry = %entry, "Recorded animal action");
        if self.echo {
            println!("{entry}");
        }
        self.entries().push(entry);
    }

    /// Snapshot of every entry recorded so far, oldest first.
    pub fn get_logs(&self) -> Vec<String> {
        self.entries().clone()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    // A poisoned lock still holds a valid log; appends never leave it half-written.
    fn entries(&self) -> MutexGuard<'_, Vec<String>> {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LoggingService {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX)
    }
}

impl ActionLogPort for LoggingService {
    fn log_action(&self, message: &str) {
        LoggingService::log_action(self, message);
    }

    fn logs(&self) -> Vec<String> {
        self.get_logs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn records_entries_in_call_order_with_prefix() {
        let service = LoggingService::new("[Zoo]").with_echo(false);
        service.log_action("first");
        service.log_action("second");
        service.log_action("third");

        assert_eq!(
            service.get_logs(),
            vec!["[Zoo] first", "[Zoo] second", "[Zoo] third"]
        );
    }

    #[test]
    fn default_prefix_is_log() {
        let service = LoggingService::default().with_echo(false);
        service.log_action("hello");
        assert_eq!(service.prefix(), "[LOG]");
        assert_eq!(service.get_logs(), vec!["[LOG] hello"]);
    }

    #[test]
    fn starts_empty() {
        let service = LoggingService::default();
        assert!(service.is_empty());
        assert!(service.get_logs().is_empty());
    }

    #[test]
    fn shared_instance_accumulates_across_holders() {
        let service = Arc::new(LoggingService::new("[Shared]").with_echo(false));
        let first: Arc<dyn ActionLogPort> = service.clone();
        let second: Arc<dyn ActionLogPort> = service.clone();

        first.log_action("a");
        second.log_action("b");
        first.log_action("c");

        assert_eq!(service.len(), 3);
        assert_eq!(
            second.logs(),
            vec!["[Shared] a", "[Shared] b", "[Shared] c"]
        );
    }

    #[test]
    fn empty_message_keeps_separator() {
        let service = LoggingService::new("[P]").with_echo(false);
        service.log_action("");
        assert_eq!(service.get_logs(), vec!["[P] "]);
    }
}
