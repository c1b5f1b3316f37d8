use std::sync::atomic::{AtomicU32, Ordering};

use portsweep_common::network::range::PortRange;

/// Lock-free work queue handing out each port of a range exactly once.
#[derive(Debug)]
pub(crate) struct PortQueue {
    next: AtomicU32,
    end: u32,
}

impl PortQueue {
    pub(crate) fn new(ports: PortRange) -> Self {
        Self {
            next: AtomicU32::new(u32::from(ports.start())),
            end: u32::from(ports.end()),
        }
    }

    /// Claims the next unscanned port, or `None` once the range is drained.
    pub(crate) fn next_port(&self) -> Option<u16> {
        let claimed = self.next.fetch_add(1, Ordering::Relaxed);
        if claimed > self.end {
            return None;
        }
        u16::try_from(claimed).ok()
    }
}
