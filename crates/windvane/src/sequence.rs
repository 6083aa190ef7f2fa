/// Stamp attached to a weather request
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupTicket(u64);

impl LookupTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Issues tickets in increasing order; only the newest one is current.
/// Responses for older tickets lost the race and must be dropped.
#[derive(Debug, Default)]
pub struct LookupSequence {
    latest: Option<LookupTicket>,
}

impl LookupSequence {
    pub fn issue(&mut self) -> LookupTicket {
        let next = self.latest.map_or(0, |ticket| ticket.0 + 1);
        let ticket = LookupTicket(next);
        self.latest = Some(ticket);
        ticket
    }

    pub fn latest(&self) -> Option<LookupTicket> {
        self.latest
    }

    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        self.latest == Some(ticket)
    }
}
