//! Birthday resolution pipeline.
//!
//! Two sequential hops: the recipe names its author, the author's profile
//! carries a birth date. Any failure aborts the lookup with a single
//! [`DomainError`]; nothing is cached between calls.

use tracing::{debug, info, warn};

use chefday_core::{
    validate_chef, validate_recipe, ChefId, ChefResponse, DomainError, RecipeId, RecipeResponse,
    RecordKind,
};

use crate::config::ClientConfig;
use crate::http::{HttpFetcher, JsonFetcher};

/// Resolves the birth date of the chef who wrote a recipe.
#[derive(Debug, Clone)]
pub struct BirthdayPipeline<F> {
    fetcher: F,
    base_url: String,
}

impl BirthdayPipeline<HttpFetcher> {
    /// Create a pipeline that talks HTTP to the configured upstream.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(HttpFetcher::new(), &config.base_url)
    }
}

impl<F: JsonFetcher> BirthdayPipeline<F> {
    /// Create a pipeline over any fetcher.
    pub fn new(fetcher: F, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The fetcher this pipeline uses.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// URL of the recipe lookup.
    pub fn recipe_url(&self, id: RecipeId) -> String {
        format!("{}/recipes/{}", self.base_url, id)
    }

    /// URL of the chef (user) lookup.
    pub fn chef_url(&self, id: ChefId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    /// Fetch the recipe and return the id of its author.
    pub async fn resolve_chef(&self, id: RecipeId) -> Result<ChefId, DomainError> {
        let record = self
            .fetcher
            .fetch_json(&self.recipe_url(id))
            .await
            .map_err(|e| {
                warn!(recipe_id = %id, error = %e, "Recipe fetch failed");
                DomainError::recipe_unavailable(id)
            })?;

        let response = validate_recipe(record).map_err(|e| {
            warn!(recipe_id = %id, error = %e, "Recipe response rejected");
            DomainError::invalid_format(RecordKind::Recipe)
        })?;

        match response {
            RecipeResponse::Upstream { message } => Err(DomainError::upstream(message)),
            RecipeResponse::Found(recipe) => {
                debug!(recipe_id = %id, chef_id = %recipe.author_id, "Recipe resolved");
                Ok(recipe.author_id)
            }
        }
    }

    /// Resolve and format the birth date of the chef behind `id`.
    ///
    /// Returns `DD/Mon/YYYY`, e.g. `24/Jul/1996`.
    pub async fn get_chef_birthday(&self, id: RecipeId) -> Result<String, DomainError> {
        let chef_id = self.resolve_chef(id).await?;

        let record = self
            .fetcher
            .fetch_json(&self.chef_url(chef_id))
            .await
            .map_err(|e| {
                warn!(chef_id = %chef_id, error = %e, "Chef fetch failed");
                DomainError::chef_unavailable(chef_id)
            })?;

        let response = validate_chef(record).map_err(|e| {
            warn!(chef_id = %chef_id, error = %e, "Chef response rejected");
            DomainError::invalid_format(RecordKind::Chef)
        })?;

        let chef = match response {
            ChefResponse::Upstream { message } => return Err(DomainError::upstream(message)),
            ChefResponse::Found(chef) => chef,
        };

        let birthday = chef.birth_date.format()?;
        info!(
            recipe_id = %id,
            chef_id = %chef_id,
            birthday = %birthday,
            "Chef birthday resolved"
        );
        Ok(birthday)
    }
}
