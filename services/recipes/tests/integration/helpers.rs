use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use platter_domain::pagination::PageRequest;
use platter_recipes::domain::repository::{
    IngredientRepository, RecipeRepository, SavedRecipeRepository, SubscriptionRepository,
    TagRepository,
};
use platter_recipes::domain::types::{
    CartLine, Ingredient, RecipeCard, RecipeDraft, RecipeFilter, RecipeHeader, RecipeView,
    SavedPurpose, Tag,
};
use platter_recipes::error::RecipesServiceError;

pub fn tag(id: i32, name: &str, slug: &str) -> Tag {
    Tag {
        id,
        name: name.to_owned(),
        color: "#49B64E".to_owned(),
        slug: slug.to_owned(),
    }
}

pub fn ingredient(id: i32, name: &str, unit: &str) -> Ingredient {
    Ingredient {
        id,
        name: name.to_owned(),
        measurement_unit: unit.to_owned(),
    }
}

// ── MockTagRepo ──────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockTagRepo {
    pub tags: Vec<Tag>,
}

impl TagRepository for MockTagRepo {
    async fn list(&self) -> Result<Vec<Tag>, RecipesServiceError> {
        Ok(self.tags.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, RecipesServiceError> {
        Ok(self.tags.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>, RecipesServiceError> {
        Ok(self
            .tags
            .iter()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect())
    }
}

// ── MockIngredientRepo ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockIngredientRepo {
    pub ingredients: Vec<Ingredient>,
}

impl IngredientRepository for MockIngredientRepo {
    async fn search(&self, name_prefix: &str) -> Result<Vec<Ingredient>, RecipesServiceError> {
        let prefix = name_prefix.to_lowercase();
        let mut found: Vec<Ingredient> = self
            .ingredients
            .iter()
            .filter(|i| i.name.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Ingredient>, RecipesServiceError> {
        Ok(self.ingredients.iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Ingredient>, RecipesServiceError> {
        Ok(self
            .ingredients
            .iter()
            .filter(|i| ids.contains(&i.id))
            .cloned()
            .collect())
    }
}

// ── MockRecipeRepo ───────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct StoredRecipe {
    pub id: i32,
    pub author_id: Uuid,
    pub draft: RecipeDraft,
    pub created_at: DateTime<Utc>,
}

/// In-memory recipe store resolving tag/ingredient references against the
/// fixture catalogs, mirroring the joined read path.
#[derive(Clone)]
pub struct MockRecipeRepo {
    pub tags: Vec<Tag>,
    pub ingredients: Vec<Ingredient>,
    pub recipes: Arc<Mutex<Vec<StoredRecipe>>>,
}

impl MockRecipeRepo {
    pub fn new(tags: Vec<Tag>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            tags,
            ingredients,
            recipes: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn stored(&self) -> Vec<StoredRecipe> {
        self.recipes.lock().unwrap().clone()
    }

    fn view_of(&self, stored: &StoredRecipe) -> RecipeView {
        let mut tags: Vec<Tag> = self
            .tags
            .iter()
            .filter(|t| stored.draft.tag_ids.contains(&t.id))
            .cloned()
            .collect();
        tags.sort_by_key(|t| t.id);

        let mut lines = stored.draft.lines.clone();
        lines.sort_by_key(|l| l.ingredient_id);
        let lines = lines
            .into_iter()
            .filter_map(|line| {
                self.ingredients
                    .iter()
                    .find(|i| i.id == line.ingredient_id)
                    .map(|i| platter_recipes::domain::types::IngredientLine {
                        ingredient_id: i.id,
                        name: i.name.clone(),
                        measurement_unit: i.measurement_unit.clone(),
                        amount: line.amount,
                    })
            })
            .collect();

        RecipeView {
            id: stored.id,
            author_id: stored.author_id,
            name: stored.draft.name.clone(),
            image: stored.draft.image.clone(),
            text: stored.draft.text.clone(),
            cooking_time: stored.draft.cooking_time,
            created_at: stored.created_at,
            tags,
            lines,
            is_favorited: false,
            is_in_shopping_cart: false,
        }
    }
}

impl RecipeRepository for MockRecipeRepo {
    async fn create(
        &self,
        author_id: Uuid,
        draft: &RecipeDraft,
    ) -> Result<i32, RecipesServiceError> {
        let mut recipes = self.recipes.lock().unwrap();
        let id = recipes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        recipes.push(StoredRecipe {
            id,
            author_id,
            draft: draft.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn replace(
        &self,
        recipe_id: i32,
        draft: &RecipeDraft,
    ) -> Result<(), RecipesServiceError> {
        let mut recipes = self.recipes.lock().unwrap();
        let stored = recipes
            .iter_mut()
            .find(|r| r.id == recipe_id)
            .ok_or(RecipesServiceError::RecipeNotFound)?;
        stored.draft = draft.clone();
        Ok(())
    }

    async fn find_header(
        &self,
        recipe_id: i32,
    ) -> Result<Option<RecipeHeader>, RecipesServiceError> {
        let recipes = self.recipes.lock().unwrap();
        Ok(recipes.iter().find(|r| r.id == recipe_id).map(|r| RecipeHeader {
            id: r.id,
            author_id: r.author_id,
            name: r.draft.name.clone(),
            image: r.draft.image.clone(),
            cooking_time: r.draft.cooking_time,
        }))
    }

    async fn find_view(
        &self,
        _viewer: Option<Uuid>,
        recipe_id: i32,
    ) -> Result<Option<RecipeView>, RecipesServiceError> {
        let recipes = self.recipes.lock().unwrap();
        Ok(recipes
            .iter()
            .find(|r| r.id == recipe_id)
            .map(|r| self.view_of(r)))
    }

    async fn list_views(
        &self,
        _viewer: Option<Uuid>,
        filter: &RecipeFilter,
        page: PageRequest,
    ) -> Result<Vec<RecipeView>, RecipesServiceError> {
        let slug_tag_ids: Vec<i32> = self
            .tags
            .iter()
            .filter(|t| filter.tag_slugs.contains(&t.slug))
            .map(|t| t.id)
            .collect();

        let recipes = self.recipes.lock().unwrap();
        let mut matched: Vec<&StoredRecipe> = recipes
            .iter()
            .filter(|r| filter.author.is_none_or(|a| r.author_id == a))
            .filter(|r| {
                filter.tag_slugs.is_empty()
                    || r.draft.tag_ids.iter().any(|id| slug_tag_ids.contains(id))
            })
            .collect();
        matched.sort_by_key(|r| std::cmp::Reverse(r.id));

        Ok(matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|r| self.view_of(r))
            .collect())
    }

    async fn delete(&self, recipe_id: i32) -> Result<bool, RecipesServiceError> {
        let mut recipes = self.recipes.lock().unwrap();
        let before = recipes.len();
        recipes.retain(|r| r.id != recipe_id);
        Ok(recipes.len() < before)
    }

    async fn cards_by_author(
        &self,
        author_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<RecipeCard>, RecipesServiceError> {
        let recipes = self.recipes.lock().unwrap();
        let mut authored: Vec<&StoredRecipe> = recipes
            .iter()
            .filter(|r| r.author_id == author_id)
            .collect();
        authored.sort_by_key(|r| std::cmp::Reverse(r.id));
        let cards = authored
            .into_iter()
            .take(limit.unwrap_or(u64::MAX) as usize)
            .map(|r| RecipeCard {
                id: r.id,
                name: r.draft.name.clone(),
                image: r.draft.image.clone(),
                cooking_time: r.draft.cooking_time,
            })
            .collect();
        Ok(cards)
    }

    async fn count_by_author(&self, author_id: Uuid) -> Result<u64, RecipesServiceError> {
        let recipes = self.recipes.lock().unwrap();
        Ok(recipes.iter().filter(|r| r.author_id == author_id).count() as u64)
    }
}

// ── MockSavedRepo ────────────────────────────────────────────────────────────

/// Ledger mock: membership via an atomic set insert (stands in for the
/// composite-pk constraint), cart lines provided as fixtures.
#[derive(Clone, Default)]
pub struct MockSavedRepo {
    pub entries: Arc<Mutex<HashSet<(Uuid, i32, i16)>>>,
    pub cart_lines: Vec<CartLine>,
}

impl MockSavedRepo {
    pub fn with_cart_lines(cart_lines: Vec<CartLine>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashSet::new())),
            cart_lines,
        }
    }
}

impl SavedRecipeRepository for MockSavedRepo {
    async fn add(
        &self,
        user_id: Uuid,
        recipe_id: i32,
        purpose: SavedPurpose,
    ) -> Result<bool, RecipesServiceError> {
        let mut entries = self.entries.lock().unwrap();
        Ok(entries.insert((user_id, recipe_id, purpose.discriminant())))
    }

    async fn remove(
        &self,
        user_id: Uuid,
        recipe_id: i32,
        purpose: SavedPurpose,
    ) -> Result<bool, RecipesServiceError> {
        let mut entries = self.entries.lock().unwrap();
        Ok(entries.remove(&(user_id, recipe_id, purpose.discriminant())))
    }

    async fn cart_lines(&self, _user_id: Uuid) -> Result<Vec<CartLine>, RecipesServiceError> {
        Ok(self.cart_lines.clone())
    }
}

// ── MockSubscriptionRepo ─────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockSubscriptionRepo {
    pub pairs: Arc<Mutex<Vec<(Uuid, Uuid)>>>,
}

impl SubscriptionRepository for MockSubscriptionRepo {
    async fn add(&self, user_id: Uuid, author_id: Uuid) -> Result<bool, RecipesServiceError> {
        let mut pairs = self.pairs.lock().unwrap();
        if pairs.contains(&(user_id, author_id)) {
            return Ok(false);
        }
        pairs.push((user_id, author_id));
        Ok(true)
    }

    async fn remove(&self, user_id: Uuid, author_id: Uuid) -> Result<bool, RecipesServiceError> {
        let mut pairs = self.pairs.lock().unwrap();
        let before = pairs.len();
        pairs.retain(|p| *p != (user_id, author_id));
        Ok(pairs.len() < before)
    }

    async fn list_authors(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Uuid>, RecipesServiceError> {
        let pairs = self.pairs.lock().unwrap();
        Ok(pairs
            .iter()
            .rev()
            .filter(|(u, _)| *u == user_id)
            .map(|(_, a)| *a)
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }
}
