use crate::error::RecipeError;
use crate::model::Ingredient;
use serde::{Deserialize, Serialize};

/// Most ingredient lines the upload form accepts.
pub const MAX_INGREDIENTS: usize = 6;

const WRONG_INGREDIENT_FORMAT: &str = "Wrong ingredient format! Please use the correct format :)";

/// A recipe as typed in by the user, before validation.
///
/// Each ingredient line is `quantity,unit,description`, e.g. `0.5,kg,Rice`
/// or `,,Salt`. Blank lines are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub source_url: String,
    pub image: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Body of `POST /recipes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadPayload {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}

/// Parse one `quantity,unit,description` line.
pub fn parse_ingredient(line: &str) -> Result<Ingredient, RecipeError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let [quantity, unit, description] = parts.as_slice() else {
        return Err(RecipeError::ValidationError(
            WRONG_INGREDIENT_FORMAT.to_string(),
        ));
    };

    let quantity = if quantity.is_empty() {
        None
    } else {
        let value: f64 = quantity.parse().map_err(|_| {
            RecipeError::ValidationError(format!("Invalid ingredient quantity: '{}'", quantity))
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(RecipeError::ValidationError(format!(
                "Invalid ingredient quantity: '{}'",
                quantity
            )));
        }
        Some(value)
    };

    Ok(Ingredient {
        quantity,
        unit: unit.to_string(),
        description: description.to_string(),
    })
}

impl NewRecipe {
    /// Validate the form and build the API payload.
    pub fn validate(&self) -> Result<UploadPayload, RecipeError> {
        for (name, value) in [
            ("title", &self.title),
            ("source URL", &self.source_url),
            ("image URL", &self.image),
            ("publisher", &self.publisher),
        ] {
            if value.trim().is_empty() {
                return Err(RecipeError::ValidationError(format!(
                    "Recipe {} cannot be empty",
                    name
                )));
            }
        }
        if self.cooking_time == 0 {
            return Err(RecipeError::ValidationError(
                "Cooking time must be at least 1 minute".to_string(),
            ));
        }
        if self.servings == 0 {
            return Err(RecipeError::ValidationError(
                "Servings must be at least 1".to_string(),
            ));
        }

        let lines: Vec<&str> = self
            .ingredients
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() > MAX_INGREDIENTS {
            return Err(RecipeError::ValidationError(format!(
                "At most {} ingredients can be uploaded",
                MAX_INGREDIENTS
            )));
        }
        let ingredients = lines
            .into_iter()
            .map(parse_ingredient)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UploadPayload {
            title: self.title.trim().to_string(),
            source_url: self.source_url.trim().to_string(),
            image_url: self.image.trim().to_string(),
            publisher: self.publisher.trim().to_string(),
            cooking_time: self.cooking_time,
            servings: self.servings,
            ingredients,
        })
    }
}
