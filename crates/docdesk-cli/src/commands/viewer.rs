//! Viewer link CLI command.

use clap::Args;

use crate::output::{self, OutputFormat};
use docdesk_core::config::AppConfig;
use docdesk_core::error::AppError;
use docdesk_service::build_viewer_url;

/// Arguments for the viewer-url command
#[derive(Debug, Args)]
pub struct ViewerUrlArgs {
    /// Node content URL, including the `alf_ticket` parameter
    #[arg(short, long)]
    pub url: String,
    /// Signed-in user ID
    #[arg(short = 'U', long)]
    pub user: String,
}

/// Execute the viewer-url command
pub fn execute(
    args: &ViewerUrlArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let url = build_viewer_url(&args.url, &args.user, &config.viewer)?;
    output::print_value(&url.to_string(), format);
    Ok(())
}
