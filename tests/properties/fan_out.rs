//! Property tests for the fan-out across hosts.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use proptest::prelude::*;

use connector_admin::domain::ports::CommandOutcome;
use connector_admin::domain::services::FanOutDeployer;
use connector_admin::{
    ExecutionMode, Host, HostOutcome, RemoteError, RemoteExecutor, StagedFile,
};

/// Counts calls per host; hosts in `unreachable` fail every call.
struct CountingExecutor {
    unreachable: HashSet<String>,
    calls: Mutex<Vec<(String, &'static str)>>,
}

impl CountingExecutor {
    fn new(unreachable: HashSet<String>) -> Self {
        Self {
            unreachable,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, host: &Host, kind: &'static str) -> Result<(), RemoteError> {
        self.calls
            .lock()
            .unwrap()
            .push((host.address().to_string(), kind));
        if self.unreachable.contains(host.address()) {
            Err(RemoteError::Connection("Connection refused".into()))
        } else {
            Ok(())
        }
    }

    fn count(&self, host: &str, kind: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(h, k)| h == host && *k == kind)
            .count()
    }
}

impl RemoteExecutor for CountingExecutor {
    fn run_privileged(&self, host: &Host, _command: &str) -> Result<CommandOutcome, RemoteError> {
        self.record(host, "run")?;
        Ok(CommandOutcome::Success {
            output: String::new(),
        })
    }

    fn copy_file(
        &self,
        host: &Host,
        _local_path: &Path,
        _remote_dir: &str,
        _use_elevated_privilege: bool,
    ) -> Result<(), RemoteError> {
        self.record(host, "copy")
    }

    fn path_exists(&self, host: &Host, _path: &str) -> Result<bool, RemoteError> {
        self.record(host, "exists")?;
        Ok(true)
    }

    fn read_file(&self, host: &Host, _path: &str) -> Result<String, RemoteError> {
        self.record(host, "read")?;
        Ok(String::new())
    }
}

fn cluster() -> impl Strategy<Value = (Vec<String>, HashSet<String>)> {
    proptest::collection::btree_set("[a-z]{1,6}[0-9]{0,2}", 1..8).prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().collect();
        let n = names.len();
        (
            Just(names.clone()),
            proptest::collection::vec(any::<bool>(), n).prop_map(move |down| {
                names
                    .iter()
                    .zip(down)
                    .filter(|(_, d)| *d)
                    .map(|(h, _)| h.clone())
                    .collect()
            }),
        )
    })
}

fn staged(count: usize) -> Vec<StagedFile> {
    (0..count)
        .map(|i| StagedFile::in_dir(&PathBuf::from("/staging"), format!("c{}.properties", i)))
        .collect()
}

fn hosts(names: &[String]) -> Vec<Host> {
    names.iter().map(|n| Host::new(n.as_str(), "root", 22)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every host gets exactly one report entry, in topology order,
    /// and reachable hosts get one mkdir plus one copy per file.
    #[test]
    fn property_deploy_visits_every_host(
        (names, down) in cluster(),
        files in 1usize..5,
        parallel in any::<bool>(),
    ) {
        let executor = CountingExecutor::new(down.clone());
        let mode = if parallel { ExecutionMode::Parallel } else { ExecutionMode::Sequential };
        let deployer = FanOutDeployer::new(&executor, hosts(&names)).with_mode(mode);

        let report = deployer.deploy(&staged(files), "/etc/presto/catalog");

        let order: Vec<&str> = report.iter().map(|r| r.host.address()).collect();
        prop_assert_eq!(order, names.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(report.hard_failures(), down.len());

        for name in &names {
            prop_assert_eq!(executor.count(name, "run"), 1);
            if down.contains(name) {
                prop_assert_eq!(executor.count(name, "copy"), 0);
                prop_assert!(matches!(report.outcome_for(name), Some(HostOutcome::HardFailure(_))));
            } else {
                prop_assert_eq!(executor.count(name, "copy"), files);
                prop_assert_eq!(report.outcome_for(name), Some(&HostOutcome::Success));
            }
        }
    }
}
