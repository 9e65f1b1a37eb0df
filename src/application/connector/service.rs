//! Connector Service
//!
//! Public `add` / `remove` operations. Resolution errors abort before any
//! host is contacted; everything that happens per host is turned into one
//! warning per affected host after all hosts have been attempted. A local
//! listing failure is the one exception: a single warning for the first host.

use tracing::{debug, info};

use crate::domain::entities::{ActionReport, HostOutcome};
use crate::domain::ports::{DiagnosticSink, LocalFileSystem, RemoteExecutor};
use crate::domain::services::{CatalogResolution, ConnectorCatalog, FanOutDeployer};
use crate::domain::value_objects::{ConnectorName, Host};
use crate::error::{AdminError, AdminResult};

use super::options::ConnectorOptions;

/// Connector add/remove across the cluster
pub struct ConnectorService<FS, RE, DS>
where
    FS: LocalFileSystem,
    RE: RemoteExecutor,
    DS: DiagnosticSink,
{
    fs: FS,
    deployer: FanOutDeployer<RE>,
    sink: DS,
    options: ConnectorOptions,
}

impl<FS, RE, DS> ConnectorService<FS, RE, DS>
where
    FS: LocalFileSystem,
    RE: RemoteExecutor,
    DS: DiagnosticSink,
{
    pub fn new(fs: FS, executor: RE, sink: DS, hosts: Vec<Host>, options: ConnectorOptions) -> Self {
        let deployer = FanOutDeployer::new(executor, hosts).with_mode(options.mode);
        Self {
            fs,
            deployer,
            sink,
            options,
        }
    }

    fn catalog(&self) -> ConnectorCatalog<&FS> {
        ConnectorCatalog::new(&self.fs, self.options.local_dir.clone())
    }

    /// Deploy one connector, or every staged connector when `name` is `None`
    pub fn add(&self, name: Option<&str>) -> AdminResult<ActionReport> {
        let catalog = self.catalog();

        let files = match name {
            Some(name) => {
                let name = ConnectorName::parse(name)?;
                vec![catalog.resolve_single(&name)?]
            }
            None => match catalog.resolve_all() {
                Ok(CatalogResolution::Files(files)) => files,
                Ok(CatalogResolution::Empty) => {
                    self.sink.warn(
                        None,
                        &format!(
                            "Directory {} is empty. No connectors will be deployed",
                            catalog.local_dir().display()
                        ),
                    );
                    return Ok(ActionReport::new());
                }
                Err(AdminError::ListDirectory { source, .. }) => {
                    // Listing happens once, locally; report it against the host context we run from.
                    let report: ActionReport = self
                        .deployer
                        .hosts()
                        .first()
                        .map(|h| (h.clone(), HostOutcome::HardFailure(source.to_string())))
                        .into_iter()
                        .collect();
                    self.emit(&report);
                    return Ok(report);
                }
                Err(e) => return Err(e),
            },
        };

        for file in &files {
            catalog.validate(file)?;
        }

        let report = self.deployer.deploy(&files, &self.options.remote_dir);
        self.emit(&report);
        info!(
            hosts = report.len(),
            failed = report.hard_failures(),
            "connector add finished"
        );
        Ok(report)
    }

    /// Remove a connector from every host and from local staging
    pub fn remove(&self, name: &str) -> AdminResult<ActionReport> {
        let name = ConnectorName::parse(name)?;
        let catalog = self.catalog();

        let report = self.deployer.remove(&name, &self.options.remote_dir);
        self.emit(&report);

        let local = catalog.local_path(&name);
        match self.fs.remove_file(&local) {
            Ok(()) => debug!("removed local copy {}", local.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no local copy at {}", local.display())
            }
            Err(e) => return Err(AdminError::Io(e)),
        }

        info!(
            hosts = report.len(),
            failed = report.hard_failures() + report.soft_failures(),
            "connector remove finished"
        );
        Ok(report)
    }

    fn emit(&self, report: &ActionReport) {
        for (host, message) in report.warnings() {
            self.sink.warn(Some(host), message);
        }
    }
}
