use crate::api::RecipeApi;
use crate::bookmarks::BookmarkStore;
use crate::error::RecipeError;
use crate::route::Route;
use crate::state::AppState;
use crate::upload::NewRecipe;
use crate::view::{View, RECIPE_ERROR_MESSAGE, UPLOAD_SUCCESS_MESSAGE};
use log::{debug, error, info, warn};

/// A user interaction the controller reacts to.
#[derive(Debug, Clone)]
pub enum Event {
    /// The location fragment changed
    RouteChanged(String),
    Search(String),
    GoToPage(usize),
    UpdateServings(u32),
    ToggleBookmark,
    ShowBookmarks,
    ClearBookmarks,
    AddRecipe(NewRecipe),
}

/// Composition root: owns the state, the API client, the bookmark store and
/// the view, and runs one `control_*` operation per event. Errors never
/// escape a `control_*` call; they are logged and rendered.
pub struct Controller<A: RecipeApi, V: View> {
    api: A,
    view: V,
    store: Option<BookmarkStore>,
    state: AppState,
    route: Option<Route>,
}

impl<A: RecipeApi, V: View> Controller<A, V> {
    /// A controller with an in-memory bookmark set only.
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            store: None,
            state: AppState::default(),
            route: None,
        }
    }

    /// Load persisted bookmarks from `store` and render them.
    pub async fn with_store(api: A, view: V, store: BookmarkStore) -> Self {
        let bookmarks = store.load_or_default().await;
        let mut controller = Self {
            api,
            view,
            store: Some(store),
            state: AppState::with_bookmarks(bookmarks),
            route: None,
        };
        controller.control_bookmarks();
        controller
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Surface an error raised outside the controller (e.g. reading an upload file).
    pub fn report_error(&mut self, err: &RecipeError) {
        error!("{}", err);
        self.view.render_error(&err.to_string());
    }

    pub async fn dispatch(&mut self, event: Event) {
        debug!("Dispatching {:?}", event);
        match event {
            Event::RouteChanged(fragment) => self.control_route(&fragment).await,
            Event::Search(query) => self.control_search(&query).await,
            Event::GoToPage(page) => self.control_pagination(page),
            Event::UpdateServings(servings) => self.control_servings(servings),
            Event::ToggleBookmark => self.control_toggle_bookmark().await,
            Event::ShowBookmarks => self.control_bookmarks(),
            Event::ClearBookmarks => self.control_clear_bookmarks().await,
            Event::AddRecipe(form) => self.control_add_recipe(form).await,
        }
    }

    /// Follow a `#<id>` fragment. An empty fragment does nothing.
    pub async fn control_route(&mut self, fragment: &str) {
        let Some(route) = Route::parse(fragment) else {
            return;
        };
        let id = route.id().to_string();
        self.route = Some(route);
        self.control_recipe(&id).await;
    }

    pub async fn control_recipe(&mut self, id: &str) {
        if id.is_empty() {
            return;
        }
        self.view.render_spinner();

        // Mark the selected entry in the results and bookmarks panels
        if !self.state.search.results.is_empty() {
            self.view.render_results(self.state.current_page(), Some(id));
        }
        self.view.render_bookmarks(&self.state.bookmarks, Some(id));

        match self.api.get_recipe(id).await {
            Ok(recipe) => {
                self.state.set_recipe(recipe);
                if let Some(recipe) = &self.state.recipe {
                    self.view.render_recipe(recipe);
                }
            }
            Err(e) => {
                error!("Failed to load recipe {}: {}", id, e);
                self.view
                    .render_error(&format!("{} ({})", RECIPE_ERROR_MESSAGE, e));
            }
        }
    }

    pub async fn control_search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.view.render_spinner();

        match self.api.search(query).await {
            Ok(results) => {
                self.state.set_search(query, results);
                let selected = self.state.recipe.as_ref().map(|r| r.id.clone());
                let page = self.state.search_results_page(1);
                self.view.render_results(page, selected.as_deref());
                self.view.render_pagination(&self.state.page_nav());
            }
            Err(e) => {
                error!("Search for '{}' failed: {}", query, e);
                self.view.render_error(&e.to_string());
            }
        }
    }

    pub fn control_pagination(&mut self, page: usize) {
        debug!("Going to page {}", page);
        let selected = self.state.recipe.as_ref().map(|r| r.id.clone());
        let results = self.state.search_results_page(page);
        self.view.render_results(results, selected.as_deref());
        self.view.render_pagination(&self.state.page_nav());
    }

    pub fn control_servings(&mut self, new_servings: u32) {
        if new_servings < 1 {
            debug!("Ignoring servings update to {}", new_servings);
            return;
        }
        if let Err(e) = self.state.update_servings(new_servings) {
            error!("Failed to update servings: {}", e);
            self.view.render_error(&e.to_string());
            return;
        }
        if let Some(recipe) = &self.state.recipe {
            self.view.render_recipe(recipe);
        }
    }

    pub async fn control_toggle_bookmark(&mut self) {
        let Some(recipe) = self.state.recipe.clone() else {
            return;
        };

        if recipe.bookmarked {
            self.state.delete_bookmark(&recipe.id);
            info!("Removed bookmark {}", recipe.id);
        } else {
            self.state.add_bookmark(&recipe);
            info!("Bookmarked {}", recipe.id);
        }

        if let Some(recipe) = &self.state.recipe {
            self.view.render_recipe(recipe);
        }
        self.view
            .render_bookmarks(&self.state.bookmarks, self.state.selected_id());
        self.persist_bookmarks().await;
    }

    pub fn control_bookmarks(&mut self) {
        self.view
            .render_bookmarks(&self.state.bookmarks, self.state.selected_id());
    }

    pub async fn control_clear_bookmarks(&mut self) {
        self.state.bookmarks.clear();
        if let Some(recipe) = self.state.recipe.as_mut() {
            recipe.bookmarked = false;
        }
        if let Some(store) = &self.store {
            if let Err(e) = store.clear().await {
                warn!("Failed to clear bookmarks file: {}", e);
                self.view.render_error(&e.to_string());
            }
        }
        self.control_bookmarks();
    }

    pub async fn control_add_recipe(&mut self, form: NewRecipe) {
        self.view.render_spinner();

        match self.upload(&form).await {
            Ok(()) => {
                if let Some(recipe) = &self.state.recipe {
                    self.view.render_recipe(recipe);
                    self.route = Some(Route::new(recipe.id.clone()));
                }
                self.view.render_message(UPLOAD_SUCCESS_MESSAGE);
                self.view
                    .render_bookmarks(&self.state.bookmarks, self.state.selected_id());
                self.persist_bookmarks().await;
            }
            Err(e) => {
                error!("💥 Upload failed: {}", e);
                self.view.render_error(&e.to_string());
            }
        }
    }

    async fn upload(&mut self, form: &NewRecipe) -> Result<(), RecipeError> {
        let payload = form.validate()?;
        let recipe = self.api.upload_recipe(&payload).await?;
        self.state.set_recipe(recipe.clone());
        self.state.add_bookmark(&recipe);
        Ok(())
    }

    async fn persist_bookmarks(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(&self.state.bookmarks).await {
            error!("Failed to save bookmarks: {}", e);
            self.view.render_error(&e.to_string());
        }
    }
}
