use chrono::{DateTime, Utc};
use tracing::info;

use crate::{config::AuditConfig, eligibility::engine::CheckOutcome, report::formatters};

/// Writes one audit line per checked transcript to the `audit` log target
pub struct AuditLog {
    channel: Option<String>,
    enabled: bool,
}

impl AuditLog {
    pub fn new(config: &AuditConfig) -> Self {
        if !config.enabled {
            info!("Audit logging is disabled in config");
        }

        Self {
            channel: config.channel.clone(),
            enabled: config.enabled,
        }
    }

    /// Build and emit the audit line for an outcome
    pub fn record(&self, requester: &str, outcome: &CheckOutcome) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let line = self.format_line(Utc::now(), requester, outcome);
        info!(target: "audit", "{}", line);
        Some(line)
    }

    pub fn format_line(
        &self,
        timestamp: DateTime<Utc>,
        requester: &str,
        outcome: &CheckOutcome,
    ) -> String {
        let message = formatters::audit_message(requester, outcome);
        let timestamp = timestamp.format("%Y-%m-%d %H:%M:%S UTC");

        match &self.channel {
            Some(channel) => format!("[{}] #{} {}", timestamp, channel, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }
}
