use crate::config::AppConfig;
use crate::error::RecipeError;
use crate::fetchers::RequestFetcher;
use crate::model::wire::{Envelope, RecipeData, SearchData};
use crate::model::{Recipe, RecipeSummary};
use crate::upload::UploadPayload;
use async_trait::async_trait;
use config::ConfigError;
use log::{debug, info};
use reqwest::Url;
use std::time::Duration;

/// The three Forkify endpoints the application talks to.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// `GET /recipes/{id}`
    async fn get_recipe(&self, id: &str) -> Result<Recipe, RecipeError>;

    /// `GET /recipes?search={query}`
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, RecipeError>;

    /// `POST /recipes`
    async fn upload_recipe(&self, payload: &UploadPayload) -> Result<Recipe, RecipeError>;
}

/// HTTP implementation of [`RecipeApi`] against a Forkify v2 server.
pub struct ForkifyClient {
    fetcher: RequestFetcher,
    base_url: String,
    api_key: Option<String>,
}

impl ForkifyClient {
    /// Create a client from the application configuration
    pub fn new(config: &AppConfig) -> Result<Self, RecipeError> {
        Self::with_base_url(
            config.api_url.clone(),
            config.api_key.clone(),
            config.timeout(),
        )
    }

    #[doc(hidden)]
    pub fn with_base_url(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RecipeError> {
        Ok(ForkifyClient {
            fetcher: RequestFetcher::new(Some(timeout))?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn recipes_url(&self) -> Result<Url, RecipeError> {
        let mut url = Url::parse(&format!("{}/recipes", self.base_url)).map_err(|e| {
            ConfigError::Message(format!("Invalid API URL '{}': {}", self.base_url, e))
        })?;
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }

    fn recipe_url(&self, id: &str) -> Result<Url, RecipeError> {
        let mut url = self.recipes_url()?;
        url.path_segments_mut()
            .map_err(|_| {
                ConfigError::Message(format!("API URL '{}' cannot have a path", self.base_url))
            })?
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl RecipeApi for ForkifyClient {
    async fn get_recipe(&self, id: &str) -> Result<Recipe, RecipeError> {
        let url = self.recipe_url(id)?;
        let envelope: Envelope<RecipeData> = self.fetcher.get_json(url.as_str()).await?;
        debug!("recipe response status: {}", envelope.status);

        let recipe = envelope
            .data
            .and_then(|d| d.recipe)
            .ok_or_else(|| RecipeError::ParseError("Response is missing data.recipe".to_string()))?;
        Ok(recipe.into())
    }

    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, RecipeError> {
        let mut url = self.recipes_url()?;
        url.query_pairs_mut().append_pair("search", query);
        let envelope: Envelope<SearchData> = self.fetcher.get_json(url.as_str()).await?;

        let recipes = envelope
            .data
            .and_then(|d| d.recipes)
            .ok_or_else(|| RecipeError::ParseError("Response is missing data.recipes".to_string()))?;
        info!("Search for '{}' returned {} result(s)", query, recipes.len());
        Ok(recipes.into_iter().map(Into::into).collect())
    }

    async fn upload_recipe(&self, payload: &UploadPayload) -> Result<Recipe, RecipeError> {
        if self.api_key.is_none() {
            return Err(RecipeError::ValidationError(
                "An API key is required to upload recipes".to_string(),
            ));
        }
        let url = self.recipes_url()?;
        let envelope: Envelope<RecipeData> = self.fetcher.send_json(url.as_str(), payload).await?;

        let recipe = envelope
            .data
            .and_then(|d| d.recipe)
            .ok_or_else(|| RecipeError::ParseError("Response is missing data.recipe".to_string()))?;
        info!("Uploaded recipe '{}' as {}", recipe.title, recipe.id);
        Ok(recipe.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(key: Option<&str>) -> ForkifyClient {
        ForkifyClient::with_base_url(
            "https://forkify-api.herokuapp.com/api/v2/".to_string(),
            key.map(str::to_string),
            Duration::from_secs(10),
        )
        .unwrap()
    }

    #[test]
    fn test_recipe_url() {
        let url = client(None).recipe_url("5ed6604591c37cdc054bc886").unwrap();
        assert_eq!(
            url.as_str(),
            "https://forkify-api.herokuapp.com/api/v2/recipes/5ed6604591c37cdc054bc886"
        );
    }

    #[test]
    fn test_recipe_url_with_key() {
        let url = client(Some("k1")).recipe_url("abc").unwrap();
        assert_eq!(
            url.as_str(),
            "https://forkify-api.herokuapp.com/api/v2/recipes/abc?key=k1"
        );
    }

    #[test]
    fn test_id_is_escaped() {
        let url = client(None).recipe_url("a/b").unwrap();
        assert!(url.as_str().ends_with("/recipes/a%2Fb"));
    }

    #[test]
    fn test_invalid_base_url() {
        let bad = ForkifyClient::with_base_url(
            "not a url".to_string(),
            None,
            Duration::from_secs(1),
        )
        .unwrap();
        assert!(matches!(
            bad.recipes_url(),
            Err(RecipeError::ConfigError(_))
        ));
    }

    #[tokio::test]
    async fn test_upload_without_key_is_rejected() {
        let payload = UploadPayload {
            title: "t".to_string(),
            source_url: "s".to_string(),
            image_url: "i".to_string(),
            publisher: "p".to_string(),
            cooking_time: 1,
            servings: 1,
            ingredients: vec![],
        };
        assert!(matches!(
            client(None).upload_recipe(&payload).await,
            Err(RecipeError::ValidationError(_))
        ));
    }
}
