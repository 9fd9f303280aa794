//! Categorization CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::error::BudgetLensResult;
use crate::models::{TransactionId, UserId};
use crate::services::categorization::{CategorizationClient, CategorizeRequest, HttpTransport};

/// Arguments for `categorize`
#[derive(Args, Debug)]
pub struct CategorizeArgs {
    /// User whose transactions should be categorized
    #[arg(short, long)]
    pub user: UserId,

    /// Limit to specific transactions (repeatable); all uncategorized when omitted
    #[arg(short, long = "transaction")]
    pub transactions: Vec<TransactionId>,

    /// Override the backend base URL from settings
    #[arg(long, env = "BUDGETLENS_API_URL")]
    pub base_url: Option<String>,
}

/// Handle `categorize`
pub fn handle_categorize_command(settings: &Settings, args: CategorizeArgs) -> BudgetLensResult<()> {
    let mut backend = settings.categorization.clone();
    if let Some(url) = args.base_url {
        backend.base_url = url;
    }

    let client = CategorizationClient::new(HttpTransport::from_settings(&backend)?);
    let summary = client.categorize(&CategorizeRequest {
        user_id: args.user,
        transaction_ids: args.transactions,
    })?;

    println!(
        "Categorized {} transaction(s); {} left uncategorized.",
        summary.categorized, summary.uncategorized
    );
    Ok(())
}
