//! `modcraft module|controller|model|...`: interview, then scaffold.

use tracing::{info, instrument};

use modcraft_core::{
    application::{Interview, Prompter, ScaffoldReport},
    domain::ArtifactKind,
    error::ModcraftResult,
};

use crate::{
    commands::Session,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Run one scaffold command end to end.
///
/// `no_refresh` only matters for modules wired in development mode.
#[instrument(skip_all, fields(kind = %kind))]
pub fn execute(
    kind: ArtifactKind,
    no_refresh: bool,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let prompter = prompt::for_stdin()?;
    let session = Session::open(config, !no_refresh, output.shows_progress())?;

    let report = run(kind, &session, prompter.as_ref())?;
    info!(files = report.written_files.len(), "scaffold finished");

    output.report(&report)
}

fn run(kind: ArtifactKind, session: &Session, prompter: &dyn Prompter) -> CliResult<ScaffoldReport> {
    let interview = Interview::new(prompter);
    let service = &session.service;

    let report: ModcraftResult<ScaffoldReport> = match kind {
        ArtifactKind::Module => {
            let mut request = interview.module()?;
            request.wire_registries = session.config.environment.mode.wires_registries();
            service.create_module(&request)
        }
        ArtifactKind::Model => service.create_model(&interview.model()?),
        ArtifactKind::Event => service.create_event(&interview.event()?),
        ArtifactKind::Migration => service.create_migration(&interview.migration()?),
        ArtifactKind::Controller => service.create_controller(&interview.artifact(kind)?),
        ArtifactKind::Job => service.create_job(&interview.artifact(kind)?),
        ArtifactKind::HttpRequest => service.create_http_request(&interview.artifact(kind)?),
        ArtifactKind::HttpResource => service.create_http_resource(&interview.artifact(kind)?),
        ArtifactKind::DomainCollection => {
            service.create_domain_collection(&interview.artifact(kind)?)
        }
        other => {
            return Err(CliError::config(format!(
                "'{other}' is created together with its parent artifact"
            )));
        }
    };
    Ok(report?)
}
