//! Outbound notifications (e.g. to a parents' group) when a fixture is created.

use crate::models::Fixture;

/// Sending a notification failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NotifyError(pub String);

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Notification failed: {}", self.0)
    }
}

impl std::error::Error for NotifyError {}

/// Best-effort delivery; callers log failures and carry on.
pub trait Notifier: Send + Sync {
    fn fixture_created(&self, fixture: &Fixture) -> Result<(), NotifyError>;
}

/// Writes the message to the log instead of sending it.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

/// Message text for a new fixture.
pub fn fixture_message(fixture: &Fixture) -> String {
    let venue = if fixture.is_home { "home" } else { "away" };
    let mut msg = format!(
        "New fixture: {} vs {} ({}, {})",
        fixture.date.format("%a %-d %b %Y"),
        fixture.opponent,
        venue,
        fixture.format
    );
    if let Some(location) = &fixture.location {
        msg.push_str(&format!(" at {}", location));
    }
    msg
}

impl Notifier for LogNotifier {
    fn fixture_created(&self, fixture: &Fixture) -> Result<(), NotifyError> {
        log::info!("{}", fixture_message(fixture));
        Ok(())
    }
}
