//! A banner message that clears itself after a delay
//!
//! Each `show` hands out a ticket. Only the latest ticket may `expire` the
//! message, so a stale timer from an earlier notice never hides a newer one.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimedNotice {
    message: Option<String>,
    ticket: u64,
}

impl TimedNotice {
    /// Replace the message, returning the ticket that may later expire it.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.ticket += 1;
        self.message = Some(message.into());
        self.ticket
    }

    /// Clear the message if `ticket` is still the latest one handed out.
    pub fn expire(&mut self, ticket: u64) {
        if ticket == self.ticket {
            self.message = None;
        }
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_expires_message() {
        let mut notice = TimedNotice::default();
        let ticket = notice.show("Link sent");
        notice.expire(ticket);
        assert_eq!(notice.message(), None);
    }

    #[test]
    fn stale_timer_keeps_newer_message() {
        let mut notice = TimedNotice::default();
        let first = notice.show("Link sent to a@example.com");
        let second = notice.show("Link sent to b@example.com");

        notice.expire(first);
        assert_eq!(notice.message(), Some("Link sent to b@example.com"));

        notice.expire(second);
        assert_eq!(notice.message(), None);
    }

    #[test]
    fn expiring_after_clear_is_harmless() {
        let mut notice = TimedNotice::default();
        let ticket = notice.show("Link sent");
        notice.clear();
        notice.expire(ticket);
        assert_eq!(notice.message(), None);
    }
}
