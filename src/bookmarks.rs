use crate::error::RecipeError;
use crate::model::Recipe;
use log::{debug, info, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Storage key the bookmark set is persisted under.
pub const STORAGE_KEY: &str = "bookmarks";

/// Bookmarked recipes, unique by id, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bookmarks {
    recipes: Vec<Recipe>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `recipe` unless a recipe with the same id is already bookmarked.
    /// Returns whether the set changed.
    pub fn add(&mut self, recipe: &Recipe) -> bool {
        if self.contains(&recipe.id) {
            return false;
        }
        let mut recipe = recipe.clone();
        recipe.bookmarked = true;
        self.recipes.push(recipe);
        true
    }

    /// Remove the recipe with `id`, if any. Returns whether the set changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        self.recipes.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.recipes.iter().any(|r| r.id == id)
    }

    pub fn clear(&mut self) {
        self.recipes.clear();
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl FromIterator<Recipe> for Bookmarks {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        let mut bookmarks = Bookmarks::new();
        for recipe in iter {
            bookmarks.add(&recipe);
        }
        bookmarks
    }
}

/// JSON file holding the bookmark set, `<dir>/bookmarks.json`.
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted set. A missing file is an empty set.
    pub async fn load(&self) -> Result<Bookmarks, RecipeError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No bookmarks at {}", self.path.display());
                return Ok(Bookmarks::new());
            }
            Err(e) => return Err(e.into()),
        };

        let recipes: Vec<Recipe> = serde_json::from_str(&raw)?;
        info!("Loaded {} bookmark(s) from {}", recipes.len(), self.path.display());
        Ok(recipes.into_iter().collect())
    }

    /// Like [`load`](Self::load), but a corrupt or unreadable file only logs
    /// a warning and yields an empty set.
    pub async fn load_or_default(&self) -> Bookmarks {
        match self.load().await {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                warn!(
                    "Ignoring unreadable bookmarks file {}: {}",
                    self.path.display(),
                    e
                );
                Bookmarks::new()
            }
        }
    }

    /// Overwrite the persisted set with `bookmarks`.
    pub async fn save(&self, bookmarks: &Bookmarks) -> Result<(), RecipeError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_string(bookmarks.as_slice())?;
        fs::write(&self.path, json).await?;
        debug!("Saved {} bookmark(s)", bookmarks.len());
        Ok(())
    }

    /// Remove the persisted file entirely.
    pub async fn clear(&self) -> Result<(), RecipeError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
