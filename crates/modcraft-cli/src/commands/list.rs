//! Implementation of the `modcraft list` command.

use std::collections::HashMap;

use serde::Serialize;

use modcraft_core::{
    application::TemplateService,
    domain::{ArtifactKind, TemplateId, TemplateOrigin},
};

use crate::{
    cli::{ListArgs, ListFormat},
    commands::template_store,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One row of the listing.
#[derive(Debug, Serialize)]
struct KindRow {
    kind: ArtifactKind,
    subtree: &'static str,
    template: Option<TemplateId>,
    origin: Option<String>,
    sub_directory: bool,
}

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = TemplateService::new(template_store(&config)?);
    let origins: HashMap<TemplateId, TemplateOrigin> = service
        .list()?
        .into_iter()
        .map(|t| (t.id, t.origin))
        .collect();

    let rows: Vec<KindRow> = ArtifactKind::ALL
        .iter()
        .map(|&kind| KindRow {
            kind,
            subtree: kind.subtree(),
            template: kind.template(),
            origin: kind
                .template()
                .and_then(|id| origins.get(&id))
                .map(ToString::to_string),
            sub_directory: kind.accepts_sub_directory(),
        })
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header("Artifact kinds:")?;
            for row in &rows {
                let template = row
                    .template
                    .map(|id| id.file_name())
                    .unwrap_or_else(|| "-".into());
                output.print(&format!(
                    "  {:<18} {:<24} {} ({})",
                    row.kind.as_str(),
                    if row.subtree.is_empty() { "." } else { row.subtree },
                    template,
                    row.origin.as_deref().unwrap_or("-"),
                ))?;
            }
        }
        ListFormat::List => {
            for row in &rows {
                output.print(row.kind.as_str())?;
            }
        }
        ListFormat::Json => {
            // Printed directly so the array stays parseable in quiet mode.
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}
