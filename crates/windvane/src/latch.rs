/// Single-shot reset signal.
///
/// Set when a new location is selected, consumed by exactly one animator
/// tick. Requests made while a reset is already pending collapse into it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetLatch {
    pending: bool,
}

impl ResetLatch {
    /// Returns `true` if this call armed the latch, `false` if it was already pending
    pub fn request(&mut self) -> bool {
        let armed = !self.pending;
        self.pending = true;
        armed
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending request, if any
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_request_is_noop_while_pending() {
        let mut latch = ResetLatch::default();
        assert!(latch.request());
        assert!(!latch.request());
        assert!(latch.is_pending());
    }

    #[test]
    fn test_take_is_single_shot() {
        let mut latch = ResetLatch::default();
        latch.request();
        latch.request();

        assert!(latch.take());
        assert!(!latch.take());
        assert!(!latch.is_pending());
    }

    #[test]
    fn test_request_after_take_arms_again() {
        let mut latch = ResetLatch::default();
        latch.request();
        latch.take();
        assert!(latch.request());
    }
}
