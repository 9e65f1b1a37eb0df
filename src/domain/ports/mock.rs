//! In-memory port implementations for unit tests

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{CommandOutcome, DiagnosticSink, ListError, LocalFileSystem, RemoteError, RemoteExecutor};
use crate::domain::value_objects::Host;

/// In-memory local file system
#[derive(Default)]
pub struct MockLocalFs {
    pub files: Mutex<HashMap<PathBuf, String>>,
    pub dirs: Mutex<HashSet<PathBuf>>,
    list_error: Option<(io::ErrorKind, String)>,
    remove_error: Option<(io::ErrorKind, String)>,
    pub removed: Mutex<Vec<PathBuf>>,
}

impl MockLocalFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.lock().unwrap().insert(dir.into());
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.dirs.lock().unwrap().insert(parent.to_path_buf());
        }
        self.files.lock().unwrap().insert(path, content.to_string());
        self
    }

    pub fn failing_list(mut self, kind: io::ErrorKind, message: &str) -> Self {
        self.list_error = Some((kind, message.to_string()));
        self
    }

    pub fn failing_remove(mut self, kind: io::ErrorKind, message: &str) -> Self {
        self.remove_error = Some((kind, message.to_string()));
        self
    }
}

impl LocalFileSystem for MockLocalFs {
    fn list_directory(&self, path: &Path) -> Result<Vec<String>, ListError> {
        if !self.dirs.lock().unwrap().contains(path) {
            return Err(ListError::NotFound(path.to_path_buf()));
        }
        if let Some((kind, msg)) = &self.list_error {
            return Err(ListError::Unreadable(
                path.to_path_buf(),
                io::Error::new(*kind, msg.clone()),
            ));
        }
        let mut names: Vec<String> = self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        if let Some((kind, msg)) = &self.remove_error {
            return Err(io::Error::new(*kind, msg.clone()));
        }
        self.removed.lock().unwrap().push(path.to_path_buf());
        match self.files.lock().unwrap().remove(path) {
            Some(_) => Ok(()),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            )),
        }
    }
}

/// A call observed by `RecordingExecutor`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    Run { host: String, command: String },
    Copy {
        host: String,
        local_path: PathBuf,
        remote_dir: String,
        sudo: bool,
    },
    Exists { host: String, path: String },
    Read { host: String, path: String },
}

/// Remote executor that records every call and answers from canned state
#[derive(Default)]
pub struct RecordingExecutor {
    pub calls: Mutex<Vec<RemoteCall>>,
    remote_files: HashMap<String, String>,
    run_outcomes: HashMap<String, CommandOutcome>,
    unreachable: HashSet<String>,
    failing_copies: HashSet<String>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file present on every host
    pub fn with_remote_file(mut self, path: &str, content: &str) -> Self {
        self.remote_files.insert(path.to_string(), content.to_string());
        self
    }

    /// Outcome of `run_privileged` on `host` (default: empty success)
    pub fn with_run_outcome(mut self, host: &str, outcome: CommandOutcome) -> Self {
        self.run_outcomes.insert(host.to_string(), outcome);
        self
    }

    /// Every call to `host` fails with a connection error
    pub fn with_unreachable(mut self, host: &str) -> Self {
        self.unreachable.insert(host.to_string());
        self
    }

    /// Copies to `host` fail
    pub fn with_failing_copy(mut self, host: &str) -> Self {
        self.failing_copies.insert(host.to_string());
        self
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, host: &str) -> Vec<RemoteCall> {
        self.calls()
            .into_iter()
            .filter(|c| match c {
                RemoteCall::Run { host: h, .. }
                | RemoteCall::Copy { host: h, .. }
                | RemoteCall::Exists { host: h, .. }
                | RemoteCall::Read { host: h, .. } => h == host,
            })
            .collect()
    }

    fn record(&self, call: RemoteCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_reachable(&self, host: &Host) -> Result<(), RemoteError> {
        if self.unreachable.contains(host.address()) {
            return Err(RemoteError::Connection(format!(
                "ssh: connect to host {} port {}: Connection refused",
                host.address(),
                host.port()
            )));
        }
        Ok(())
    }
}

impl RemoteExecutor for RecordingExecutor {
    fn run_privileged(&self, host: &Host, command: &str) -> Result<CommandOutcome, RemoteError> {
        self.record(RemoteCall::Run {
            host: host.address().to_string(),
            command: command.to_string(),
        });
        self.check_reachable(host)?;
        Ok(self
            .run_outcomes
            .get(host.address())
            .cloned()
            .unwrap_or(CommandOutcome::Success {
                output: String::new(),
            }))
    }

    fn copy_file(
        &self,
        host: &Host,
        local_path: &Path,
        remote_dir: &str,
        use_elevated_privilege: bool,
    ) -> Result<(), RemoteError> {
        self.record(RemoteCall::Copy {
            host: host.address().to_string(),
            local_path: local_path.to_path_buf(),
            remote_dir: remote_dir.to_string(),
            sudo: use_elevated_privilege,
        });
        self.check_reachable(host)?;
        if self.failing_copies.contains(host.address()) {
            return Err(RemoteError::Transfer(format!(
                "scp: {}: Permission denied",
                remote_dir
            )));
        }
        Ok(())
    }

    fn path_exists(&self, host: &Host, path: &str) -> Result<bool, RemoteError> {
        self.record(RemoteCall::Exists {
            host: host.address().to_string(),
            path: path.to_string(),
        });
        self.check_reachable(host)?;
        Ok(self.remote_files.contains_key(path))
    }

    fn read_file(&self, host: &Host, path: &str) -> Result<String, RemoteError> {
        self.record(RemoteCall::Read {
            host: host.address().to_string(),
            path: path.to_string(),
        });
        self.check_reachable(host)?;
        self.remote_files
            .get(path)
            .cloned()
            .ok_or_else(|| RemoteError::CommandFailed(format!("cat: {}: No such file or directory", path)))
    }
}

/// Sink that records warnings as `[host] message` (or bare `message`)
#[derive(Default)]
pub struct RecordingSink {
    pub warnings: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, host: Option<&Host>, message: &str) {
        let line = match host {
            Some(h) => format!("[{}] {}", h, message),
            None => message.to_string(),
        };
        self.warnings.lock().unwrap().push(line);
    }
}

pub fn hosts(names: &[&str]) -> Vec<Host> {
    names.iter().map(|n| Host::new(*n, "root", 22)).collect()
}
