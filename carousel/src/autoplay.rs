/// A cancellable, recurring deadline driven by adapter timestamps.
///
/// The engine never reads a clock: every `poll` carries `now_ms`, and a re-armed timer counts
/// from the latest timestamp it has seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct AutoplayTimer {
    active: bool,
    armed_at_ms: Option<u64>,
    last_now_ms: Option<u64>,
}

impl AutoplayTimer {
    /// Tears the timer down and, if `active`, starts a fresh countdown.
    pub(crate) fn rearm(&mut self, active: bool) {
        self.active = active;
        self.armed_at_ms = if active { self.last_now_ms } else { None };
    }

    pub(crate) fn cancel(&mut self) {
        self.active = false;
        self.armed_at_ms = None;
    }

    /// Returns `true` when one period has elapsed; the next period starts at `now_ms`.
    pub(crate) fn poll(&mut self, now_ms: u64, interval_ms: u64) -> bool {
        self.last_now_ms = Some(now_ms);
        if !self.active {
            return false;
        }
        let Some(armed_at) = self.armed_at_ms else {
            self.armed_at_ms = Some(now_ms);
            return false;
        };
        if now_ms < armed_at {
            // Clock went backwards; restart the countdown.
            self.armed_at_ms = Some(now_ms);
            return false;
        }
        if now_ms - armed_at >= interval_ms {
            self.armed_at_ms = Some(now_ms);
            return true;
        }
        false
    }
}
