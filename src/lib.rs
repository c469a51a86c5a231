pub mod api;
pub mod bookmarks;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetchers;
pub mod model;
pub mod pagination;
pub mod route;
pub mod servings;
pub mod state;
pub mod upload;
pub mod view;

pub use api::{ForkifyClient, RecipeApi};
pub use bookmarks::{BookmarkStore, Bookmarks};
pub use config::AppConfig;
pub use controller::{Controller, Event};
pub use error::RecipeError;
pub use model::{Ingredient, Recipe, RecipeSummary, SearchResults};
pub use pagination::{page_slice, PageNav, RESULTS_PER_PAGE};
pub use route::Route;
pub use servings::rescale;
pub use state::AppState;
pub use upload::{NewRecipe, UploadPayload};
pub use view::{TerminalView, View};

use log::debug;

/// Fetch a single recipe using configuration from `forkify.toml` / `FORKIFY__*`.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), forkify::RecipeError> {
/// let recipe = forkify::fetch_recipe("5ed6604591c37cdc054bc886").await?;
/// println!("{} serves {}", recipe.title, recipe.servings);
/// # Ok(())
/// # }
/// ```
pub async fn fetch_recipe(id: &str) -> Result<Recipe, RecipeError> {
    let config = AppConfig::load()?;
    let client = ForkifyClient::new(&config)?;
    let recipe = client.get_recipe(id).await?;
    debug!("{:#?}", recipe);
    Ok(recipe)
}

/// Search recipes and return the requested page (1-based, 10 per page).
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), forkify::RecipeError> {
/// let first_page = forkify::search_recipes("pizza", 1).await?;
/// for summary in first_page {
///     println!("{}", summary.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(query: &str, page: usize) -> Result<Vec<RecipeSummary>, RecipeError> {
    let config = AppConfig::load()?;
    let client = ForkifyClient::new(&config)?;
    let results = client.search(query).await?;
    Ok(page_slice(&results, page).to_vec())
}
