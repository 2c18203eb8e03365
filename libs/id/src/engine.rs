//! The ObjectId generator.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::encoding::{self, encode_field, host_fingerprint};
use crate::environment::{Environment, SystemEnvironment};
use crate::ObjectId;

/// Largest counter value before it wraps back to zero.
pub const MAX_COUNTER: u32 = encoding::COUNTER.max_value() as u32;

/// Generates ObjectIds from an [`Environment`] and a monotonic counter.
///
/// The counter is the only mutable state. It starts at 0, so the first ID
/// from a fresh engine carries counter 1, and wraps to 0 after
/// [`MAX_COUNTER`]. Concurrent callers always receive distinct counter values.
#[derive(Debug)]
pub struct Engine<E = SystemEnvironment> {
    environment: E,
    counter: AtomicU32,
}

impl Engine<SystemEnvironment> {
    /// Creates an engine over the real operating-system environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_environment(SystemEnvironment)
    }

    /// The process-wide engine backing [`ObjectId::new`].
    pub fn global() -> &'static Engine {
        static GLOBAL: OnceLock<Engine> = OnceLock::new();
        GLOBAL.get_or_init(Engine::new)
    }
}

impl Default for Engine<SystemEnvironment> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> Engine<E> {
    /// Creates an engine with a fresh counter over the given environment.
    pub fn with_environment(environment: E) -> Self {
        debug!("created ObjectId engine");
        Self {
            environment,
            counter: AtomicU32::new(0),
        }
    }

    /// Seeds the counter as if `last` was the most recently issued value.
    ///
    /// Values above [`MAX_COUNTER`] are reduced to 24 bits.
    #[must_use]
    pub fn with_counter(self, last: u32) -> Self {
        self.counter.store(last & MAX_COUNTER, Ordering::Relaxed);
        self
    }

    /// Returns the most recently issued counter value.
    pub fn counter(&self) -> u32 {
        self.counter.load(Ordering::Relaxed) & MAX_COUNTER
    }

    /// Generates a new ObjectId stamped with the current time.
    pub fn generate(&self) -> ObjectId {
        self.generate_at(self.environment.now())
    }

    /// Generates a new ObjectId stamped with `at` instead of the clock.
    ///
    /// Host, process, and counter fields are sampled as usual and the counter
    /// advances.
    pub fn generate_at(&self, at: DateTime<Utc>) -> ObjectId {
        let counter = self.next_counter();
        let hostname = self.environment.hostname();

        let mut id = String::with_capacity(ObjectId::HEX_LEN);
        encode_field(&mut id, at.timestamp() as u64, encoding::TIMESTAMP);
        encode_field(
            &mut id,
            u64::from(host_fingerprint(&hostname)),
            encoding::HOST,
        );
        encode_field(
            &mut id,
            u64::from(self.environment.process_id()),
            encoding::PROCESS,
        );
        encode_field(&mut id, u64::from(counter), encoding::COUNTER);

        trace!(id = %id, hostname = %hostname, "generated ObjectId");
        ObjectId::from_generated(id)
    }

    fn next_counter(&self) -> u32 {
        // The stored value is allowed to run past 24 bits; 2^32 is a multiple
        // of 2^24 so masking stays consistent across u32 overflow.
        let next = self
            .counter
            .fetch_add(1, Ordering::Relaxed)
            .wrapping_add(1)
            & MAX_COUNTER;
        if next == 0 {
            debug!("ObjectId counter wrapped");
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FixedEnvironment;

    fn fixed() -> FixedEnvironment {
        FixedEnvironment::new(
            "db-01",
            0x86cd,
            DateTime::from_timestamp(0x507f_1f77, 0).unwrap(),
        )
    }

    #[test]
    fn test_first_id_has_counter_one() {
        let engine = Engine::with_environment(fixed());
        let id = engine.generate();
        assert_eq!(id.increment(), 1);
        assert_eq!(engine.counter(), 1);
    }

    #[test]
    fn test_fields_come_from_environment() {
        let engine = Engine::with_environment(fixed());
        let id = engine.generate();
        assert_eq!(id.timestamp(), 0x507f_1f77);
        assert_eq!(id.host_fingerprint(), host_fingerprint("db-01"));
        assert_eq!(id.process_id(), 0x86cd);
        assert!(id.as_str().starts_with("507f1f77"));
    }

    #[test]
    fn test_consecutive_ids_differ() {
        let engine = Engine::with_environment(fixed());
        let a = engine.generate();
        let b = engine.generate();
        assert_ne!(a, b);
        assert_eq!(b.increment(), a.increment() + 1);
        assert!(a < b);
    }

    #[test]
    fn test_counter_wraps_to_zero() {
        let engine = Engine::with_environment(fixed()).with_counter(MAX_COUNTER);
        let id = engine.generate();
        assert_eq!(id.increment(), 0);
        assert_eq!(id.process_id(), 0x86cd);
        assert!(id.as_str().ends_with("86cd000000"));
        assert_eq!(engine.generate().increment(), 1);
    }

    #[test]
    fn test_with_counter_masks_to_24_bits() {
        let engine = Engine::with_environment(fixed()).with_counter(u32::MAX);
        assert_eq!(engine.counter(), MAX_COUNTER);
        assert_eq!(engine.generate().increment(), 0);
    }

    #[test]
    fn test_wide_pid_is_truncated() {
        let mut env = fixed();
        env.process_id = 0x0012_3456;
        let id = Engine::with_environment(env).generate();
        assert_eq!(id.process_id(), 0x1234);
        assert_eq!(&id.as_str()[14..18], "1234");
        assert_eq!(id.as_str().len(), ObjectId::HEX_LEN);
    }

    #[test]
    fn test_generate_at_uses_given_time() {
        let engine = Engine::with_environment(fixed());
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let id = engine.generate_at(at);
        assert_eq!(id.timestamp(), 1_700_000_000);
        assert_eq!(id.generation_time(), at);
        assert_eq!(id.increment(), 1);
    }

    #[test]
    fn test_empty_hostname_still_generates() {
        let mut env = fixed();
        env.hostname = String::new();
        let id = Engine::with_environment(env).generate();
        assert_eq!(id.host_fingerprint(), 0);
        assert!(ObjectId::is_valid(id.as_str()));
    }

    #[test]
    fn test_system_engine_generates_valid_ids() {
        let engine = Engine::new();
        let id = engine.generate();
        assert!(ObjectId::is_valid(id.as_str()));
        let pid = format!("{:04x}", std::process::id());
        assert_eq!(&id.as_str()[14..18], &pid[..4]);
    }
}
