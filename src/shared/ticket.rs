//! Request fencing for app-owned state.
//!
//! Every fetch that feeds a state slot is issued a ticket. Only the most
//! recently issued ticket may write into the slot, so a slow response for an
//! old tab or interval cannot overwrite the data of a newer one.

/// Token identifying one in-flight request for a state slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Monotonic ticket source for one state slot.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, invalidating every ticket issued before it.
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// The most recently issued ticket, if any.
    pub fn latest(&self) -> Option<RequestTicket> {
        (self.latest > 0).then_some(RequestTicket(self.latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut seq = RequestSequencer::new();
        assert!(seq.latest().is_none());
        let first = seq.issue();
        assert!(seq.is_current(first));
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(second > first);
        assert_eq!(seq.latest(), Some(second));
    }
}
