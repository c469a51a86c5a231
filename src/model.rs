use serde::{Deserialize, Serialize};

/// A single ingredient line. `quantity` is `None` for "salt to taste" style entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
}

/// A fully loaded recipe, as held in the application state and in bookmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub bookmarked: bool,
    /// Set on recipes uploaded with the user's own API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// One entry of a search result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            publisher: recipe.publisher.clone(),
            image: recipe.image.clone(),
            key: recipe.key.clone(),
        }
    }
}

/// The last search: query, every result, and the page currently shown (1-based).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<RecipeSummary>,
    pub page: usize,
}

impl Default for SearchResults {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            page: 1,
        }
    }
}

pub(crate) mod wire {
    //! JSON shapes of the Forkify v2 API. Everything outside the envelope is
    //! coerced to defaults when missing.

    use super::{Ingredient, Recipe, RecipeSummary};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct Envelope<T> {
        #[serde(default)]
        pub status: String,
        pub data: Option<T>,
    }

    #[derive(Debug, Deserialize)]
    pub struct RecipeData {
        pub recipe: Option<ApiRecipe>,
    }

    #[derive(Debug, Deserialize)]
    pub struct SearchData {
        pub recipes: Option<Vec<ApiSummary>>,
    }

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    pub struct ApiRecipe {
        pub id: String,
        pub title: String,
        pub publisher: String,
        pub source_url: String,
        pub image_url: String,
        pub servings: u32,
        pub cooking_time: u32,
        pub ingredients: Vec<Ingredient>,
        pub key: Option<String>,
    }

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    pub struct ApiSummary {
        pub id: String,
        pub title: String,
        pub publisher: String,
        pub image_url: String,
        pub key: Option<String>,
    }

    impl From<ApiRecipe> for Recipe {
        fn from(api: ApiRecipe) -> Self {
            Recipe {
                id: api.id,
                title: api.title,
                publisher: api.publisher,
                source_url: api.source_url,
                image: api.image_url,
                servings: api.servings,
                cooking_time: api.cooking_time,
                ingredients: api.ingredients,
                bookmarked: false,
                key: api.key,
            }
        }
    }

    impl From<ApiSummary> for RecipeSummary {
        fn from(api: ApiSummary) -> Self {
            RecipeSummary {
                id: api.id,
                title: api.title,
                publisher: api.publisher,
                image: api.image_url,
                key: api.key,
            }
        }
    }
}
