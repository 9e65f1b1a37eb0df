//! ActionReport entity - per-host outcomes of one fan-out action

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::domain::value_objects::Host;

/// Terminal outcome of one action on one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOutcome {
    /// The action completed
    Success,
    /// Expected, recoverable condition (e.g. file already absent on remove)
    SoftFailure(String),
    /// Unexpected execution error (transport failure, permission denied)
    HardFailure(String),
}

impl HostOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, HostOutcome::Success)
    }

    /// Text to surface as a warning, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            HostOutcome::Success => None,
            HostOutcome::SoftFailure(msg) | HostOutcome::HardFailure(msg) => Some(msg),
        }
    }

    fn status(&self) -> &'static str {
        match self {
            HostOutcome::Success => "success",
            HostOutcome::SoftFailure(_) => "soft_failure",
            HostOutcome::HardFailure(_) => "hard_failure",
        }
    }
}

/// Outcome for a single host, as stored in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReport {
    pub host: Host,
    pub outcome: HostOutcome,
}

impl Serialize for HostReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("HostReport", 3)?;
        s.serialize_field("host", self.host.address())?;
        s.serialize_field("status", self.outcome.status())?;
        s.serialize_field("message", &self.outcome.message())?;
        s.end()
    }
}

/// Ordered per-host outcomes for one invocation.
///
/// Entries stay in host order; the report is only handed out once every
/// host has reached a terminal outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionReport {
    hosts: Vec<HostReport>,
}

impl ActionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, host: Host, outcome: HostOutcome) {
        self.hosts.push(HostReport { host, outcome });
    }

    pub fn iter(&self) -> impl Iterator<Item = &HostReport> {
        self.hosts.iter()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn outcome_for(&self, address: &str) -> Option<&HostOutcome> {
        self.hosts
            .iter()
            .find(|r| r.host.address() == address)
            .map(|r| &r.outcome)
    }

    /// True if every host succeeded
    pub fn is_success(&self) -> bool {
        self.hosts.iter().all(|r| r.outcome.is_success())
    }

    pub fn hard_failures(&self) -> usize {
        self.hosts
            .iter()
            .filter(|r| matches!(r.outcome, HostOutcome::HardFailure(_)))
            .count()
    }

    pub fn soft_failures(&self) -> usize {
        self.hosts
            .iter()
            .filter(|r| matches!(r.outcome, HostOutcome::SoftFailure(_)))
            .count()
    }

    /// (host, message) pairs for every non-success entry, in host order
    pub fn warnings(&self) -> impl Iterator<Item = (&Host, &str)> {
        self.hosts
            .iter()
            .filter_map(|r| r.outcome.message().map(|m| (&r.host, m)))
    }
}

impl FromIterator<(Host, HostOutcome)> for ActionReport {
    fn from_iter<I: IntoIterator<Item = (Host, HostOutcome)>>(iter: I) -> Self {
        let mut report = ActionReport::new();
        for (host, outcome) in iter {
            report.push(host, outcome);
        }
        report
    }
}
