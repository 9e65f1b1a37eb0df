//! connector-admin CLI
//!
//! Usage: connector-admin [OPTIONS] <COMMAND>
//!
//! Commands:
//!   connector add [NAME]     Deploy staged connector configurations
//!   connector remove NAME    Remove a connector from every host
//!   coordinator endpoint     Print the coordinator URL

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing::info;

use connector_admin::config::Config;
use connector_admin::infrastructure::{LocalFs, SshExecutor, StderrSink};
use connector_admin::presentation::{
    output, use_color, Cli, Commands, ConnectorAction, CoordinatorAction,
};
use connector_admin::{
    logging, ActionReport, ConnectorOptions, ConnectorService, CoordinatorConfig,
    DiagnosticSink, ExecutionMode,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let color = use_color(cli.color, std::io::stderr().is_terminal());

    if let Err(e) = logging::init_logging(cli.verbose, color) {
        eprint!("{}", output::render_error(&e.to_string(), color));
    }

    match run(&cli, color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err, cli.json, color);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, color: bool) -> Result<()> {
    let sink = StderrSink::new(color);
    let (config, warnings) = Config::discover(cli.config.as_deref())?;
    for warning in &warnings {
        sink.warn(None, &warning.to_string());
    }

    match &cli.command {
        Commands::Connector { action } => cmd_connector(cli, &config, &sink, action),
        Commands::Coordinator {
            action: CoordinatorAction::Endpoint,
        } => cmd_coordinator_endpoint(cli, &config),
    }
}

fn cmd_connector(
    cli: &Cli,
    config: &Config,
    sink: &StderrSink,
    action: &ConnectorAction,
) -> Result<()> {
    let hosts = config.select_hosts(&cli.hosts, &cli.exclude_hosts)?;
    let mode = if cli.parallel || config.ssh.parallel {
        ExecutionMode::Parallel
    } else {
        ExecutionMode::Sequential
    };
    let options = ConnectorOptions::new(config.connectors_dir(), config.paths.catalog_dir.clone())
        .with_mode(mode);
    let executor = SshExecutor::new(config.ssh_settings());
    let service = ConnectorService::new(LocalFs::new(), executor, sink, hosts, options);

    let (command, report) = match action {
        ConnectorAction::Add { name } => ("connector add", service.add(name.as_deref())?),
        ConnectorAction::Remove { name } => ("connector remove", service.remove(name)?),
    };
    finish(cli, command, &report)
}

fn cmd_coordinator_endpoint(cli: &Cli, config: &Config) -> Result<()> {
    let executor = SshExecutor::new(config.ssh_settings());
    let coordinator =
        CoordinatorConfig::fetch(&executor, &config.coordinator(), &config.paths.conf_dir);
    let endpoint = coordinator.endpoint()?;

    if cli.json {
        output::emit(&output::endpoint_event(&endpoint))?;
    } else {
        println!("{}", endpoint);
    }
    Ok(())
}

/// Per-host failures were already reported as warnings; they do not fail the command.
fn finish(cli: &Cli, command: &str, report: &ActionReport) -> Result<()> {
    info!("{}", output::summary_line(command, report));
    if cli.json {
        output::emit(&output::report_event(command, report))?;
    }
    Ok(())
}

fn print_error(err: &anyhow::Error, json: bool, color: bool) {
    if json {
        let _ = output::emit(&output::error_event(&err.to_string()));
        return;
    }
    eprint!("{}", output::render_error(&err.to_string(), color));
}
