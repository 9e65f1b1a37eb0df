//! Fan-out deployer
//!
//! Applies one action to every target host independently. A failure on one
//! host is recorded in that host's outcome and never stops the others.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::remote_script::{mkdir_command, no_such_file_message, remove_script};
use crate::domain::entities::{ActionReport, HostOutcome, StagedFile};
use crate::domain::ports::{CommandOutcome, RemoteExecutor};
use crate::domain::value_objects::{ConnectorName, DeployTarget, Host};

/// How hosts are visited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One host after another, in topology order
    #[default]
    Sequential,
    /// All hosts at once on the rayon pool
    Parallel,
}

/// Runs deploy/remove actions across a fixed host set
pub struct FanOutDeployer<RE: RemoteExecutor> {
    executor: RE,
    hosts: Vec<Host>,
    mode: ExecutionMode,
}

impl<RE: RemoteExecutor> FanOutDeployer<RE> {
    pub fn new(executor: RE, hosts: Vec<Host>) -> Self {
        Self {
            executor,
            hosts,
            mode: ExecutionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    /// Create `remote_dir` on every host and copy each file into it
    pub fn deploy(&self, files: &[StagedFile], remote_dir: &str) -> ActionReport {
        info!(
            files = files.len(),
            hosts = self.hosts.len(),
            "deploying connector files to {}",
            remote_dir
        );
        self.fan_out(|host| {
            let target = DeployTarget::new(host.clone(), remote_dir);
            self.deploy_to(&target, files)
        })
    }

    /// Remove `<name>.properties` from `remote_dir` on every host
    pub fn remove(&self, name: &ConnectorName, remote_dir: &str) -> ActionReport {
        info!(hosts = self.hosts.len(), "removing connector {}", name);
        self.fan_out(|host| {
            let target = DeployTarget::new(host.clone(), remote_dir);
            self.remove_from(&target, name)
        })
    }

    /// Visit every host; the report is assembled in host order once all are done.
    fn fan_out<F>(&self, action: F) -> ActionReport
    where
        F: Fn(&Host) -> HostOutcome + Sync,
    {
        let outcomes: Vec<(Host, HostOutcome)> = match self.mode {
            ExecutionMode::Sequential => self
                .hosts
                .iter()
                .map(|host| (host.clone(), action(host)))
                .collect(),
            ExecutionMode::Parallel => self
                .hosts
                .par_iter()
                .map(|host| (host.clone(), action(host)))
                .collect(),
        };

        for (host, outcome) in &outcomes {
            match outcome {
                HostOutcome::Success => debug!(host = %host, "done"),
                HostOutcome::SoftFailure(reason) => debug!(host = %host, "soft failure: {}", reason),
                HostOutcome::HardFailure(error) => warn!(host = %host, "failed: {}", error),
            }
        }

        outcomes.into_iter().collect()
    }

    fn deploy_to(&self, target: &DeployTarget, files: &[StagedFile]) -> HostOutcome {
        let host = &target.host;
        let mkdir = mkdir_command(&target.remote_dir);
        debug!(host = %host, "{}", mkdir);

        match self.executor.run_privileged(host, &mkdir) {
            Ok(CommandOutcome::Success { .. }) => {}
            Ok(CommandOutcome::Failure { message }) => {
                return HostOutcome::HardFailure(format!(
                    "Failed to create directory {}: {}",
                    target.remote_dir, message
                ))
            }
            Err(e) => return HostOutcome::HardFailure(e.to_string()),
        }

        for file in files {
            debug!(host = %host, "copying {} to {}", file.local_path().display(), target.remote_dir);
            if let Err(e) = self
                .executor
                .copy_file(host, file.local_path(), &target.remote_dir, true)
            {
                return HostOutcome::HardFailure(e.to_string());
            }
        }

        HostOutcome::Success
    }

    fn remove_from(&self, target: &DeployTarget, name: &ConnectorName) -> HostOutcome {
        let host = &target.host;
        let remote_path = target.remote_path(&name.file_name());

        let exists = match self.executor.path_exists(host, &remote_path) {
            Ok(exists) => exists,
            Err(e) => return HostOutcome::HardFailure(e.to_string()),
        };

        if !exists {
            debug!(host = %host, "{} not present, skipping remote remove", remote_path);
            return HostOutcome::SoftFailure(no_such_file_message(name, &remote_path));
        }

        match self
            .executor
            .run_privileged(host, &remove_script(name, &remote_path))
        {
            Ok(CommandOutcome::Success { output }) if output.trim().is_empty() => {
                HostOutcome::Success
            }
            Ok(CommandOutcome::Success { output }) => HostOutcome::SoftFailure(output),
            Ok(CommandOutcome::Failure { message }) => HostOutcome::SoftFailure(format!(
                "Failed to remove connector {}.\n\t{}",
                name, message
            )),
            Err(e) => HostOutcome::HardFailure(e.to_string()),
        }
    }
}
