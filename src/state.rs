use crate::bookmarks::Bookmarks;
use crate::error::RecipeError;
use crate::model::{Recipe, RecipeSummary, SearchResults};
use crate::pagination::{page_slice, PageNav};
use crate::servings;

/// Everything the application knows between two events.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub recipe: Option<Recipe>,
    pub search: SearchResults,
    pub bookmarks: Bookmarks,
}

impl AppState {
    pub fn with_bookmarks(bookmarks: Bookmarks) -> Self {
        Self {
            bookmarks,
            ..Self::default()
        }
    }

    /// Replace the current recipe, flagging it if it is bookmarked.
    pub fn set_recipe(&mut self, mut recipe: Recipe) {
        recipe.bookmarked = self.bookmarks.contains(&recipe.id);
        self.recipe = Some(recipe);
    }

    /// Replace the search wholesale and go back to page 1.
    pub fn set_search(&mut self, query: &str, results: Vec<RecipeSummary>) {
        self.search = SearchResults {
            query: query.to_string(),
            results,
            page: 1,
        };
    }

    /// Move to `page` and return the results shown there.
    pub fn search_results_page(&mut self, page: usize) -> &[RecipeSummary] {
        self.search.page = page;
        page_slice(&self.search.results, page)
    }

    /// Results on the page currently shown.
    pub fn current_page(&self) -> &[RecipeSummary] {
        page_slice(&self.search.results, self.search.page)
    }

    pub fn page_nav(&self) -> PageNav {
        PageNav::new(self.search.page, self.search.results.len())
    }

    pub fn update_servings(&mut self, new_servings: u32) -> Result<(), RecipeError> {
        match self.recipe.as_mut() {
            Some(recipe) => servings::update_servings(recipe, new_servings),
            None => Ok(()),
        }
    }

    pub fn add_bookmark(&mut self, recipe: &Recipe) -> bool {
        let changed = self.bookmarks.add(recipe);
        if let Some(current) = self.recipe.as_mut() {
            if current.id == recipe.id {
                current.bookmarked = true;
            }
        }
        changed
    }

    pub fn delete_bookmark(&mut self, id: &str) -> bool {
        let changed = self.bookmarks.remove(id);
        if let Some(current) = self.recipe.as_mut() {
            if current.id == id {
                current.bookmarked = false;
            }
        }
        changed
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.recipe.as_ref().map(|r| r.id.as_str())
    }
}
