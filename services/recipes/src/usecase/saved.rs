use uuid::Uuid;

use crate::domain::repository::{RecipeRepository, SavedRecipeRepository};
use crate::domain::types::{RecipeCard, SavedPurpose};
use crate::error::RecipesServiceError;

// ── SaveRecipe ───────────────────────────────────────────────────────────────

/// Add a (user, recipe) pair to the ledger for one purpose. The insert
/// relies on the storage uniqueness constraint, so of two racing duplicate
/// adds exactly one succeeds and the other sees `AlreadySaved`.
pub struct SaveRecipeUseCase<R: RecipeRepository, S: SavedRecipeRepository> {
    pub recipes: R,
    pub saved: S,
}

impl<R: RecipeRepository, S: SavedRecipeRepository> SaveRecipeUseCase<R, S> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        recipe_id: i32,
        purpose: SavedPurpose,
    ) -> Result<RecipeCard, RecipesServiceError> {
        let header = self
            .recipes
            .find_header(recipe_id)
            .await?
            .ok_or(RecipesServiceError::RecipeNotFound)?;
        let inserted = self.saved.add(user_id, recipe_id, purpose).await?;
        if !inserted {
            return Err(RecipesServiceError::AlreadySaved);
        }
        Ok(RecipeCard::from(header))
    }
}

// ── UnsaveRecipe ─────────────────────────────────────────────────────────────

/// Remove a ledger pair; fails cleanly (never a silent no-op) when absent.
pub struct UnsaveRecipeUseCase<S: SavedRecipeRepository> {
    pub saved: S,
}

impl<S: SavedRecipeRepository> UnsaveRecipeUseCase<S> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        recipe_id: i32,
        purpose: SavedPurpose,
    ) -> Result<(), RecipesServiceError> {
        let removed = self.saved.remove(user_id, recipe_id, purpose).await?;
        if !removed {
            return Err(RecipesServiceError::SavedEntryNotFound);
        }
        Ok(())
    }
}
