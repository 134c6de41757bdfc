//! # Device State Tests
//!
//! Registry lookups with table fallbacks, and completion scheduling and
//! resolution.

use intsim_core::config::Config;
use intsim_core::soc::{Completion, CompletionTracker, DeviceRegistry};
use rstest::rstest;

use crate::common::TestContext;

#[rstest]
#[case(0, 110)]
#[case(2, 50)]
#[case(4, 300)]
#[case(5, 100)]
#[case(999, 100)]
#[case(u64::MAX, 100)]
fn io_delay_falls_back_past_table(#[case] device: u64, #[case] expected: u64) {
    let registry = TestContext::new().with_sample_devices().registry();
    assert_eq!(registry.io_delay(device), expected);
}

#[test]
fn isr_address_falls_back_past_table() {
    let registry = TestContext::new().with_sample_devices().registry();
    assert_eq!(registry.isr_address(0), "0X01E3");
    assert_eq!(registry.isr_address(4), "0X0292");
    assert_eq!(registry.isr_address(5), "0x0000");
}

#[test]
fn default_delay_follows_config() {
    let mut config = Config::default();
    config.timing.default_io_delay = 42;
    config.vectors.unmapped_isr = "0xDEAD".to_owned();
    let registry = DeviceRegistry::new(Vec::new(), Vec::new(), &config);

    assert_eq!(registry.io_delay(0), 42);
    assert_eq!(registry.isr_address(0), "0xDEAD");
    assert_eq!(registry.device_count(), 0);
}

#[test]
fn vector_position_honours_layout() {
    let mut config = Config::default();
    config.vectors.base = 0x100;
    config.vectors.entry_size = 4;
    let registry = DeviceRegistry::new(Vec::new(), Vec::new(), &config);

    assert_eq!(registry.vector_position(0), "0x0100");
    assert_eq!(registry.vector_position(3), "0x010C");
}

#[test]
fn schedule_records_completion() {
    let mut tracker = CompletionTracker::new();
    assert!(tracker.is_empty());

    assert_eq!(tracker.schedule(2, 276, 50), 326);
    assert_eq!(tracker.pending(2), Some(326));
    assert_eq!(tracker.len(), 1);
}

#[test]
fn later_syscall_overwrites_completion() {
    let mut tracker = CompletionTracker::new();
    let _ = tracker.schedule(1, 100, 150);
    let _ = tracker.schedule(1, 400, 150);

    assert_eq!(tracker.pending(1), Some(550));
    assert_eq!(tracker.len(), 1);
}

#[test]
fn resolve_prefers_scheduled_time() {
    let mut tracker = CompletionTracker::new();
    let _ = tracker.schedule(3, 200, 250);

    assert_eq!(tracker.resolve(3, 900, 250), Completion::Scheduled(450));
    // Resolving does not consume the entry.
    assert_eq!(tracker.pending(3), Some(450));
}

#[test]
fn resolve_orphan_falls_back_to_now_plus_delay() {
    let tracker = CompletionTracker::new();
    let completion = tracker.resolve(7, 300, 100);

    assert_eq!(completion, Completion::Orphan(400));
    assert_eq!(completion.time(), 400);
    assert_eq!(tracker.pending(7), None);
}
