pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod http;
pub mod query;
pub mod rate_limiter;
pub mod services;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::domain::models::{PlayerIdentity, ProfileBundle, RankEntry};
use crate::errors::EngineError;
use crate::http::BrowserClient;
use crate::query::{NameQuery, ProfileOptions, ProfileQuery, RankingQuery};
use crate::services::profile::ProfileAssembler;
use crate::services::rankings::RankingsService;
use crate::services::resolver::PlayerResolver;

/// The three-operation engine. Configuration is read-only and shared
/// across calls; every call owns its fetched data exclusively.
pub struct Engine {
    client: BrowserClient,
    config: AppConfig,
}

impl Engine {
    pub fn new() -> Result<Self> {
        let config = AppConfig::new();
        let client = BrowserClient::new(&config.fetch)?;
        Ok(Self { client, config })
    }

    pub async fn fetch_rankings(
        &self,
        query: &RankingQuery,
    ) -> std::result::Result<Vec<RankEntry>, EngineError> {
        RankingsService::new(&self.client, &self.config)
            .fetch(query)
            .await
    }

    pub async fn resolve_player_id(
        &self,
        query: &NameQuery,
    ) -> std::result::Result<Vec<PlayerIdentity>, EngineError> {
        PlayerResolver::new(&self.client, &self.config)
            .resolve(query)
            .await
    }

    pub async fn fetch_profile(
        &self,
        query: &ProfileQuery,
        options: &ProfileOptions,
    ) -> std::result::Result<ProfileBundle, EngineError> {
        ProfileAssembler::new(&self.client, &self.config)
            .assemble(query, options)
            .await
    }
}

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_rankings(
    raw_type: &str,
    raw_gender: &str,
    raw_category: &str,
    top: &str,
    delay_ms: i64,
) -> Result<()> {
    let query = RankingQuery::parse(raw_type, raw_gender, raw_category, top, delay_ms)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let engine = Engine::new()?;
        let entries = engine.fetch_rankings(&query).await?;
        print_json(&entries)
    })
}

pub fn handle_player_id(
    full_name: Option<String>,
    given_name: Option<String>,
    family_name: Option<String>,
) -> Result<()> {
    let query = NameQuery::from_options(full_name, given_name, family_name)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let engine = Engine::new()?;
        let identities = engine.resolve_player_id(&query).await?;
        print_json(&identities)
    })
}

pub fn handle_profile(
    full_name: Option<String>,
    ittf_id: Option<i64>,
    extended: bool,
) -> Result<()> {
    let query = ProfileQuery::from_options(full_name, ittf_id)?;
    let options = ProfileOptions {
        include_extended_details: extended,
    };
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let engine = Engine::new()?;
        let bundle = engine.fetch_profile(&query, &options).await?;
        print_json(&bundle)
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
