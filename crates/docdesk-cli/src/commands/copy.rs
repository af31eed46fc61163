//! Node copy CLI command.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::console::ConsoleNotifier;
use crate::output::{self, OutputFormat};
use docdesk_client::RestContentApi;
use docdesk_core::config::AppConfig;
use docdesk_core::error::AppError;
use docdesk_core::traits::{ContentApi, Translator};
use docdesk_core::traits::destination::FixedDestination;
use docdesk_core::types::CopiedItem;
use docdesk_service::{
    CatalogTranslator, CopyNodeAction, CopyState, IdentityTranslator, NodeActionsService,
    UndoHandler,
};

/// Arguments for the copy command
#[derive(Debug, Args)]
pub struct CopyArgs {
    /// Destination folder ID
    #[arg(short, long)]
    pub destination: String,
    /// IDs of the nodes to copy
    #[arg(required = true)]
    pub nodes: Vec<String>,
    /// Do not prompt for Undo
    #[arg(long)]
    pub no_undo: bool,
    /// Translation catalog (nested JSON) used for messages
    #[arg(short, long)]
    pub messages: Option<String>,
}

/// Created node display row
#[derive(Debug, Serialize, Tabled)]
struct CopiedRow {
    /// Node ID
    id: String,
    /// Name
    name: String,
    /// Parent folder ID
    parent_id: String,
}

/// Execute the copy command
pub async fn execute(
    args: &CopyArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let api = Arc::new(RestContentApi::new(&config.content)?);

    let mut selection = Vec::with_capacity(args.nodes.len());
    for id in &args.nodes {
        selection.push(api.get_node(id).await?);
    }

    let translator: Arc<dyn Translator> = match &args.messages {
        Some(path) => {
            let catalog = tokio::fs::read_to_string(path).await?;
            Arc::new(CatalogTranslator::from_json(&catalog)?)
        }
        None => Arc::new(IdentityTranslator),
    };

    let service = NodeActionsService::new(
        api.clone(),
        Arc::new(FixedDestination(args.destination.clone())),
        config.notifications.event_buffer,
    );
    let action = CopyNodeAction::new(
        service,
        UndoHandler::new(api.clone()),
        Arc::new(ConsoleNotifier::new(!args.no_undo)),
        translator,
        config.notifications.clone(),
    );

    let report = action.trigger(&selection).await?;

    if report.outcome == CopyState::Failed {
        return Err(AppError::external_service(format!(
            "Copy failed ({})",
            report.message_key
        )));
    }

    let rows: Vec<CopiedRow> = CopiedItem::flatten(&report.created)
        .into_iter()
        .map(|node| CopiedRow {
            id: node.id.clone(),
            name: node.name.clone(),
            parent_id: node.parent_id.clone().unwrap_or_default(),
        })
        .collect();
    output::print_list(&rows, format);

    if let Some(undo) = &report.undo {
        output::print_kv("Deleted", &undo.deleted.len().to_string());
        for (node_id, err) in &undo.failures {
            output::print_error(&format!("Could not delete {}: {}", node_id, err));
        }
    }

    Ok(())
}
