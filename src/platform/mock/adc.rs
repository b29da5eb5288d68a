//! Mock analog frontend implementation for testing

use crate::platform::traits::{AdcInterface, ChannelReadings, SCAN_CHANNELS};
use std::vec::Vec;

/// Mock analog frontend
///
/// Serves queued frames in FIFO order, then falls back to a repeating
/// baseline frame. Counts scans so tests can assert conversion cadence.
#[derive(Debug)]
pub struct MockAdc {
    baseline: ChannelReadings,
    queue: Vec<ChannelReadings>,
    scan_count: usize,
}

impl MockAdc {
    /// Create a new mock frontend reading zero on every channel
    pub fn new() -> Self {
        Self {
            baseline: [0; SCAN_CHANNELS],
            queue: Vec::new(),
            scan_count: 0,
        }
    }

    /// Create a new mock frontend with a fixed baseline frame
    pub fn with_baseline(baseline: ChannelReadings) -> Self {
        Self {
            baseline,
            queue: Vec::new(),
            scan_count: 0,
        }
    }

    /// Replace the baseline frame served once the queue is drained
    pub fn set_baseline(&mut self, baseline: ChannelReadings) {
        self.baseline = baseline;
    }

    /// Queue one frame to be served before the baseline
    pub fn queue_frame(&mut self, frame: ChannelReadings) {
        self.queue.push(frame);
    }

    /// Number of scans performed (for test verification)
    pub fn scan_count(&self) -> usize {
        self.scan_count
    }
}

impl Default for MockAdc {
    fn default() -> Self {
        Self::new()
    }
}

impl AdcInterface for MockAdc {
    fn scan(&mut self) -> ChannelReadings {
        self.scan_count += 1;
        if self.queue.is_empty() {
            self.baseline
        } else {
            self.queue.remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_adc_baseline() {
        let mut adc = MockAdc::with_baseline([100; SCAN_CHANNELS]);
        assert_eq!(adc.scan(), [100; SCAN_CHANNELS]);
        assert_eq!(adc.scan(), [100; SCAN_CHANNELS]);
    }

    #[test]
    fn test_mock_adc_queue_order() {
        let mut adc = MockAdc::with_baseline([5; SCAN_CHANNELS]);
        adc.queue_frame([1; SCAN_CHANNELS]);
        adc.queue_frame([2; SCAN_CHANNELS]);

        assert_eq!(adc.scan(), [1; SCAN_CHANNELS]);
        assert_eq!(adc.scan(), [2; SCAN_CHANNELS]);

        // Queue drained, baseline takes over
        assert_eq!(adc.scan(), [5; SCAN_CHANNELS]);
    }

    #[test]
    fn test_mock_adc_scan_count() {
        let mut adc = MockAdc::new();
        assert_eq!(adc.scan_count(), 0);

        adc.scan();
        adc.scan();
        assert_eq!(adc.scan_count(), 2);
    }
}
