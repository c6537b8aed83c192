use std::collections::HashSet;

use anyhow::anyhow;
use uuid::Uuid;

use platter_domain::pagination::PageRequest;

use crate::domain::repository::{IngredientRepository, RecipeRepository, TagRepository};
use crate::domain::types::{RecipeDraft, RecipeFilter, RecipeView};
use crate::error::RecipesServiceError;

/// First id that appears more than once, in input order.
fn first_duplicate(ids: impl IntoIterator<Item = i32>) -> Option<i32> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

/// Validate a draft against the composer rules, first failure wins:
/// tag set non-empty and duplicate-free, tags resolve, line set non-empty
/// and duplicate-free, amounts ≥ 1, ingredients resolve, cooking time ≥ 1.
pub async fn validate_draft<T, I>(
    tags: &T,
    ingredients: &I,
    draft: &RecipeDraft,
) -> Result<(), RecipesServiceError>
where
    T: TagRepository,
    I: IngredientRepository,
{
    if draft.tag_ids.is_empty() {
        return Err(RecipesServiceError::EmptyTags);
    }
    if first_duplicate(draft.tag_ids.iter().copied()).is_some() {
        return Err(RecipesServiceError::DuplicateTag);
    }
    let resolved = tags.find_by_ids(&draft.tag_ids).await?;
    if resolved.len() != draft.tag_ids.len() {
        return Err(RecipesServiceError::UnknownTag);
    }

    if draft.lines.is_empty() {
        return Err(RecipesServiceError::EmptyIngredients);
    }
    if first_duplicate(draft.lines.iter().map(|l| l.ingredient_id)).is_some() {
        return Err(RecipesServiceError::DuplicateIngredient);
    }
    if draft.lines.iter().any(|l| l.amount < 1) {
        return Err(RecipesServiceError::InvalidAmount);
    }
    let ingredient_ids: Vec<i32> = draft.lines.iter().map(|l| l.ingredient_id).collect();
    let resolved = ingredients.find_by_ids(&ingredient_ids).await?;
    if resolved.len() != ingredient_ids.len() {
        return Err(RecipesServiceError::UnknownIngredient);
    }

    if draft.cooking_time < 1 {
        return Err(RecipesServiceError::InvalidCookingTime);
    }
    Ok(())
}

// ── ComposeRecipe ────────────────────────────────────────────────────────────

pub struct ComposeRecipeUseCase<R, T, I>
where
    R: RecipeRepository,
    T: TagRepository,
    I: IngredientRepository,
{
    pub recipes: R,
    pub tags: T,
    pub ingredients: I,
}

impl<R, T, I> ComposeRecipeUseCase<R, T, I>
where
    R: RecipeRepository,
    T: TagRepository,
    I: IngredientRepository,
{
    pub async fn execute(
        &self,
        author_id: Uuid,
        draft: RecipeDraft,
    ) -> Result<RecipeView, RecipesServiceError> {
        validate_draft(&self.tags, &self.ingredients, &draft).await?;
        let recipe_id = self.recipes.create(author_id, &draft).await?;
        self.recipes
            .find_view(Some(author_id), recipe_id)
            .await?
            .ok_or_else(|| anyhow!("recipe {recipe_id} missing after create").into())
    }
}

// ── UpdateRecipe ─────────────────────────────────────────────────────────────

pub struct UpdateRecipeUseCase<R, T, I>
where
    R: RecipeRepository,
    T: TagRepository,
    I: IngredientRepository,
{
    pub recipes: R,
    pub tags: T,
    pub ingredients: I,
}

impl<R, T, I> UpdateRecipeUseCase<R, T, I>
where
    R: RecipeRepository,
    T: TagRepository,
    I: IngredientRepository,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        recipe_id: i32,
        draft: RecipeDraft,
    ) -> Result<RecipeView, RecipesServiceError> {
        let header = self
            .recipes
            .find_header(recipe_id)
            .await?
            .ok_or(RecipesServiceError::RecipeNotFound)?;
        if header.author_id != user_id {
            return Err(RecipesServiceError::Forbidden);
        }
        validate_draft(&self.tags, &self.ingredients, &draft).await?;
        self.recipes.replace(recipe_id, &draft).await?;
        self.recipes
            .find_view(Some(user_id), recipe_id)
            .await?
            .ok_or_else(|| anyhow!("recipe {recipe_id} missing after replace").into())
    }
}

// ── DeleteRecipe ─────────────────────────────────────────────────────────────

pub struct DeleteRecipeUseCase<R: RecipeRepository> {
    pub recipes: R,
}

impl<R: RecipeRepository> DeleteRecipeUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, recipe_id: i32) -> Result<(), RecipesServiceError> {
        let header = self
            .recipes
            .find_header(recipe_id)
            .await?
            .ok_or(RecipesServiceError::RecipeNotFound)?;
        if header.author_id != user_id {
            return Err(RecipesServiceError::Forbidden);
        }
        self.recipes.delete(recipe_id).await?;
        Ok(())
    }
}

// ── GetRecipe ────────────────────────────────────────────────────────────────

pub struct GetRecipeUseCase<R: RecipeRepository> {
    pub recipes: R,
}

impl<R: RecipeRepository> GetRecipeUseCase<R> {
    pub async fn execute(
        &self,
        viewer: Option<Uuid>,
        recipe_id: i32,
    ) -> Result<RecipeView, RecipesServiceError> {
        self.recipes
            .find_view(viewer, recipe_id)
            .await?
            .ok_or(RecipesServiceError::RecipeNotFound)
    }
}

// ── ListRecipes ──────────────────────────────────────────────────────────────

pub struct ListRecipesUseCase<R: RecipeRepository> {
    pub recipes: R,
}

impl<R: RecipeRepository> ListRecipesUseCase<R> {
    pub async fn execute(
        &self,
        viewer: Option<Uuid>,
        filter: RecipeFilter,
        page: PageRequest,
    ) -> Result<Vec<RecipeView>, RecipesServiceError> {
        self.recipes.list_views(viewer, &filter, page.clamped()).await
    }
}
