pub mod autocomplete;
pub mod cli;
pub mod config;
pub mod definitions;
pub mod error;
pub mod logging;
pub mod model;
pub mod query;
pub mod quick_filters;
pub mod registry;
pub mod resource;
pub mod search;
pub mod transform;
pub mod url;

pub use autocomplete::{AutocompleteSource, NoSource, OptionsCache};
pub use cli::{Cli, Commands, cli_parse};
pub use config::{ConsoleConfig, default_definitions, load_config};
pub use definitions::{FilterDefinition, find_filter_definition, get_filter_definitions};
pub use error::{FetchError, SearchError, UrlError, ValidationError};
pub use model::{Filter, FilterKey, FilterOption, FilterValue, Filters, filters_equal};
pub use query::{MatchMode, decode_query, filters_to_query, group_filters_match_all, group_filters_match_any};
pub use search::{Indicator, SearchBar};

use anyhow::{Context, anyhow, bail};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use crate::definitions::Encoder;
use std::sync::Arc;

fn create_styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(h)).collect::<Vec<_>>());
    table
}

fn describe_encoder(encoder: &Encoder) -> String {
    match encoder {
        Encoder::Simple { field } => field.clone(),
        Encoder::Kind { field, owner_field } => format!("{field} / {owner_field}"),
        Encoder::Resource { prefix } => format!(
            "{prefix}K8S_Type, {prefix}K8S_Namespace, {prefix}K8S_Name; \
             owners: {prefix}K8S_OwnerType, {prefix}K8S_Namespace, {prefix}K8S_OwnerName"
        ),
        Encoder::Endpoint { src, dst } => {
            format!("{} | {}", describe_encoder(src), describe_encoder(dst))
        }
    }
}

/// Add each search-bar input in turn, as if typed and submitted
fn build_filters(
    defs: &[Arc<FilterDefinition>],
    inputs: &[String],
    cache: &mut OptionsCache,
) -> anyhow::Result<Vec<Filter>> {
    let mut bar = SearchBar::new(defs.to_vec());
    let mut list = Vec::new();
    for input in inputs {
        bar.set_text(input);
        if bar.indicator() == Indicator::Error {
            bail!("{input}: {}", bar.message().unwrap_or_default());
        }
        list = bar
            .submit(&list, &NoSource, cache)
            .ok_or_else(|| anyhow!("{input}: {}", bar.message().unwrap_or_default()))?;
    }
    Ok(list)
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let console_config = load_config(cli.config.as_deref()).context("Failed to load config")?;
    let defs = console_config.definitions();
    let mut cache = OptionsCache::new();
    log::debug!("{} filter definitions loaded", defs.len());

    match &cli.command {
        Commands::Fields => {
            let mut table = create_styled_table(&["Id", "Name", "Category", "Component", "Backend"]);
            for def in &defs {
                table.add_row(vec![
                    Cell::new(&def.id),
                    Cell::new(def.full_name()),
                    Cell::new(format!("{:?}", def.category)),
                    Cell::new(format!("{:?}", def.component)),
                    Cell::new(describe_encoder(&def.encoder)),
                ]);
            }
            println!("{table}");
        }
        Commands::Validate { field, value } => {
            let def = find_filter_definition(&defs, field)
                .ok_or_else(|| anyhow!("Unknown filter: '{field}'"))?;
            match def.validate(value) {
                Ok(valid) => println!("{} {valid}", "valid".green().bold()),
                Err(err) => bail!("{} {err}", "invalid".red().bold()),
            }
        }
        Commands::Query {
            filters,
            any,
            bnf,
            decoded,
        } => {
            let list = build_filters(&defs, filters, &mut cache)?;
            let filters = Filters {
                list,
                back_and_forth: *bnf,
            };
            let mode = if *any { MatchMode::Any } else { MatchMode::All };
            let query = filters_to_query(&defs, &filters, mode);
            if *decoded {
                println!("{}", decode_query(&query));
            } else {
                println!("{query}");
            }
        }
        Commands::Suggest { text, field } => {
            let mut bar = SearchBar::new(defs.clone());
            if let Some(field) = field {
                let def = find_filter_definition(&defs, field)
                    .ok_or_else(|| anyhow!("Unknown filter: '{field}'"))?;
                bar.set_current(Some(Arc::clone(def)));
            }
            bar.set_text(text);
            bar.refresh(&NoSource, &mut cache);
            if let Some(message) = bar.message() {
                println!("{}", message.yellow());
            }
            for suggestion in bar.suggestions() {
                println!("  {}", suggestion.label());
            }
        }
        Commands::Quick => {
            let quick = quick_filters::parse_quick_filters(&defs, &console_config.quick_filters);
            let mut table = create_styled_table(&["Name", "Default", "Filters"]);
            for qf in &quick {
                table.add_row(vec![
                    Cell::new(&qf.name),
                    Cell::new(if qf.default { "yes" } else { "" }),
                    Cell::new(url::filters_to_url(&qf.filters)),
                ]);
            }
            println!("{table}");
            let defaults = Filters::new(quick_filters::default_quick_filters(&quick));
            println!(
                "{} {}",
                "default query:".bold(),
                decode_query(&filters_to_query(&defs, &defaults, MatchMode::All))
            );
        }
        Commands::Url { filters } => {
            let list = build_filters(&defs, filters, &mut cache)?;
            println!("{}", url::filters_to_url(&list));
        }
        Commands::Profile => {
            let json = serde_json::to_string_pretty(&console_config)
                .context("Failed to serialize profile")?;
            println!("{json}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_resource_encoder_lists_owner_fields() {
        let described = describe_encoder(&Encoder::Resource {
            prefix: "Src".to_string(),
        });
        assert_eq!(
            described,
            "SrcK8S_Type, SrcK8S_Namespace, SrcK8S_Name; \
             owners: SrcK8S_OwnerType, SrcK8S_Namespace, SrcK8S_OwnerName"
        );
    }

    #[test]
    fn test_describe_endpoint_encoder_shows_both_sides() {
        let described = describe_encoder(&Encoder::Endpoint {
            src: Box::new(Encoder::Simple {
                field: "SrcPort".to_string(),
            }),
            dst: Box::new(Encoder::Simple {
                field: "DstPort".to_string(),
            }),
        });
        assert_eq!(described, "SrcPort | DstPort");
    }
}
