//! Environment sources sampled when generating an ObjectId.
//!
//! The engine never queries the operating system directly. It asks an
//! [`Environment`] for the host name, the process id, and the current time,
//! which lets tests pin every field of a generated ID.

use chrono::{DateTime, Utc};

/// Source of the local machine's host name.
pub trait HostnameSource {
    /// Returns the configured host name, or an empty string when unknown.
    fn hostname(&self) -> String;
}

/// Source of the calling process's OS-level identifier.
pub trait ProcessIdSource {
    fn process_id(&self) -> u32;
}

/// Wall-clock source.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Everything the engine samples from its surroundings.
pub trait Environment: HostnameSource + ProcessIdSource + Clock {}

impl<T> Environment for T where T: HostnameSource + ProcessIdSource + Clock {}

/// The real operating-system environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl HostnameSource for SystemEnvironment {
    fn hostname(&self) -> String {
        // Non-UTF-8 names are lossily converted; an empty name is still a
        // valid fingerprint input.
        gethostname::gethostname().to_string_lossy().into_owned()
    }
}

impl ProcessIdSource for SystemEnvironment {
    fn process_id(&self) -> u32 {
        std::process::id()
    }
}

impl Clock for SystemEnvironment {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// An environment with every input pinned, for deterministic IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedEnvironment {
    pub hostname: String,
    pub process_id: u32,
    pub now: DateTime<Utc>,
}

impl FixedEnvironment {
    pub fn new(hostname: impl Into<String>, process_id: u32, now: DateTime<Utc>) -> Self {
        Self {
            hostname: hostname.into(),
            process_id,
            now,
        }
    }
}

impl HostnameSource for FixedEnvironment {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }
}

impl ProcessIdSource for FixedEnvironment {
    fn process_id(&self) -> u32 {
        self.process_id
    }
}

impl Clock for FixedEnvironment {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Wraps another environment and replaces its host name.
#[derive(Debug, Clone)]
pub struct HostnameOverride<E> {
    inner: E,
    hostname: String,
}

impl<E> HostnameOverride<E> {
    pub fn new(inner: E, hostname: impl Into<String>) -> Self {
        Self {
            inner,
            hostname: hostname.into(),
        }
    }
}

impl<E> HostnameSource for HostnameOverride<E> {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }
}

impl<E: ProcessIdSource> ProcessIdSource for HostnameOverride<E> {
    fn process_id(&self) -> u32 {
        self.inner.process_id()
    }
}

impl<E: Clock> Clock for HostnameOverride<E> {
    fn now(&self) -> DateTime<Utc> {
        self.inner.now()
    }
}
