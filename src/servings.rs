use crate::error::RecipeError;
use crate::model::{Ingredient, Recipe};

/// Ingredients of `recipe` scaled to `new_servings`.
///
/// Quantities scale linearly by `new_servings / recipe.servings`; `None`
/// quantities, units and descriptions are copied as-is. A target of 0, or a
/// recipe that itself records 0 servings, is rejected with
/// [`RecipeError::InvalidServings`].
pub fn scaled_ingredients(
    recipe: &Recipe,
    new_servings: u32,
) -> Result<Vec<Ingredient>, RecipeError> {
    if new_servings == 0 {
        return Err(RecipeError::InvalidServings(new_servings));
    }
    if recipe.servings == 0 {
        return Err(RecipeError::InvalidServings(recipe.servings));
    }

    let factor = f64::from(new_servings) / f64::from(recipe.servings);
    Ok(recipe
        .ingredients
        .iter()
        .map(|ing| Ingredient {
            quantity: ing.quantity.map(|q| q * factor),
            unit: ing.unit.clone(),
            description: ing.description.clone(),
        })
        .collect())
}

/// A copy of `recipe` serving `new_servings`.
pub fn rescale(recipe: &Recipe, new_servings: u32) -> Result<Recipe, RecipeError> {
    let ingredients = scaled_ingredients(recipe, new_servings)?;
    Ok(Recipe {
        ingredients,
        servings: new_servings,
        ..recipe.clone()
    })
}

/// Rescale `recipe` in place. On error the recipe is left untouched.
pub fn update_servings(recipe: &mut Recipe, new_servings: u32) -> Result<(), RecipeError> {
    recipe.ingredients = scaled_ingredients(recipe, new_servings)?;
    recipe.servings = new_servings;
    Ok(())
}
