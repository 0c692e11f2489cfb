use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use chefbook_graphql::{Client, Request, recipes_from_data, summaries_from_data};
use chefbook_recipe::{Recipe, RecipeSummary};

use crate::Config;

pub struct QueryArgs {
    pub document: PathBuf,
    pub variables: Option<PathBuf>,
    pub operation: Option<String>,
    pub field: String,
    /// Decode `data.<field>` as list-view summaries instead of full recipes.
    pub summary: bool,
}

/// Runs the query and writes the summaries of the returned recipes in
/// server order.
#[tracing::instrument(skip_all, fields(document = %args.document.display(), field = %args.field))]
pub async fn query(config: &Config, args: QueryArgs, out: &mut impl Write) -> Result<()> {
    let document = std::fs::read_to_string(&args.document)
        .with_context(|| format!("failed to read {}", args.document.display()))?;

    let mut request = Request::new(document);
    if let Some(path) = &args.variables {
        let variables = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let variables = serde_json::from_str(&variables)
            .with_context(|| format!("invalid variables file {}", path.display()))?;
        request = request.variables(variables);
    }
    if let Some(operation) = args.operation {
        request = request.operation_name(operation);
    }

    let client = Client::new(config.graphql.client_options())?;
    tracing::info!(endpoint = %client.endpoint(), "Executing GraphQL query");

    let data: serde_json::Value = client.execute(&request).await?;
    let summaries: Vec<RecipeSummary> = if args.summary {
        summaries_from_data(data, &args.field)?
    } else {
        recipes_from_data(data, &args.field)?
            .iter()
            .map(Recipe::summary)
            .collect()
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;

    Ok(())
}
