//! Handler for `sports`.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::ConfigPathArg;
use super::config::load_config;
use super::output;
use crate::adapter::outbound::OddsApiClient;
use crate::domain::Sport;
use crate::error::Result;
use crate::port::OddsFeed;

#[derive(Tabled)]
struct SportRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Outrights")]
    outrights: &'static str,
}

impl From<&Sport> for SportRow {
    fn from(sport: &Sport) -> Self {
        Self {
            key: sport.key.to_string(),
            group: sport.group.clone(),
            title: sport.title.clone(),
            outrights: if sport.has_outrights { "yes" } else { "no" },
        }
    }
}

/// Execute `sports`.
pub async fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let feed = OddsApiClient::from_config(&config.odds_api)?;

    let pb = output::spinner("Listing sports");
    let sports = match feed.sports().await {
        Ok(sports) => {
            output::spinner_success(&pb, &format!("{} sports", sports.len()));
            sports
        }
        Err(err) => {
            output::spinner_fail(&pb, "Could not list sports");
            return Err(err);
        }
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "sports",
            "sports": sports,
        }));
        return Ok(());
    }

    let table = Table::new(sports.iter().map(SportRow::from)).to_string();
    output::lines(&table);
    Ok(())
}
