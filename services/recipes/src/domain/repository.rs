#![allow(async_fn_in_trait)]

use uuid::Uuid;

use platter_domain::pagination::PageRequest;

use crate::domain::types::{
    CartLine, Ingredient, RecipeCard, RecipeDraft, RecipeFilter, RecipeHeader, RecipeView,
    SavedPurpose, Tag,
};
use crate::error::RecipesServiceError;

/// Catalog of canonical (name, unit) ingredient pairs.
pub trait IngredientRepository: Send + Sync {
    /// Case-insensitive prefix search ordered by name; empty prefix lists all.
    async fn search(&self, name_prefix: &str) -> Result<Vec<Ingredient>, RecipesServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Ingredient>, RecipesServiceError>;

    /// Resolve a batch of ids; missing ids are simply absent from the result.
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Ingredient>, RecipesServiceError>;
}

/// Fixed tag enumeration.
pub trait TagRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Tag>, RecipesServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, RecipesServiceError>;

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>, RecipesServiceError>;
}

/// Recipe rows plus their tag links and ingredient lines.
///
/// `create` and `replace` write the header, tag links, and lines in one
/// transaction; readers never observe a partial composition.
pub trait RecipeRepository: Send + Sync {
    /// Persist a validated draft atomically. Returns the new recipe id.
    async fn create(
        &self,
        author_id: Uuid,
        draft: &RecipeDraft,
    ) -> Result<i32, RecipesServiceError>;

    /// Replace the whole composition atomically: update the header, drop all
    /// tag links and lines, bulk-insert the new sets. Never an incremental merge.
    async fn replace(&self, recipe_id: i32, draft: &RecipeDraft)
    -> Result<(), RecipesServiceError>;

    async fn find_header(
        &self,
        recipe_id: i32,
    ) -> Result<Option<RecipeHeader>, RecipesServiceError>;

    async fn find_view(
        &self,
        viewer: Option<Uuid>,
        recipe_id: i32,
    ) -> Result<Option<RecipeView>, RecipesServiceError>;

    /// Newest-first listing with filters and pagination.
    async fn list_views(
        &self,
        viewer: Option<Uuid>,
        filter: &RecipeFilter,
        page: PageRequest,
    ) -> Result<Vec<RecipeView>, RecipesServiceError>;

    /// Delete a recipe; lines, tag links, and ledger rows cascade.
    /// Returns `true` if a row was deleted.
    async fn delete(&self, recipe_id: i32) -> Result<bool, RecipesServiceError>;

    /// Newest-first recipe cards for a subscription listing.
    async fn cards_by_author(
        &self,
        author_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<RecipeCard>, RecipesServiceError>;

    async fn count_by_author(&self, author_id: Uuid) -> Result<u64, RecipesServiceError>;
}

/// Generic saved-item ledger shared by favorites and the shopping cart.
pub trait SavedRecipeRepository: Send + Sync {
    /// Insert a membership pair relying on the storage uniqueness constraint
    /// (never check-then-insert). Returns `false` if the pair already exists.
    async fn add(
        &self,
        user_id: Uuid,
        recipe_id: i32,
        purpose: SavedPurpose,
    ) -> Result<bool, RecipesServiceError>;

    /// Remove a membership pair. Returns `false` if it was absent.
    async fn remove(
        &self,
        user_id: Uuid,
        recipe_id: i32,
        purpose: SavedPurpose,
    ) -> Result<bool, RecipesServiceError>;

    /// Every ingredient line of every recipe in the user's shopping cart,
    /// unaggregated.
    async fn cart_lines(&self, user_id: Uuid) -> Result<Vec<CartLine>, RecipesServiceError>;
}

/// Follower → author subscription pairs.
pub trait SubscriptionRepository: Send + Sync {
    /// Returns `false` if the pair already exists.
    async fn add(&self, user_id: Uuid, author_id: Uuid) -> Result<bool, RecipesServiceError>;

    /// Returns `false` if the pair was absent.
    async fn remove(&self, user_id: Uuid, author_id: Uuid) -> Result<bool, RecipesServiceError>;

    /// Author ids the user follows, newest subscription first.
    async fn list_authors(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Uuid>, RecipesServiceError>;
}
