use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Catalog ingredient: canonical (name, unit) pair, deduplicated table-wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

/// Category label from the fixed tag enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub slug: String,
}

/// One ingredient line of a draft: a catalog reference plus a whole-unit amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftLine {
    pub ingredient_id: i32,
    pub amount: i32,
}

/// Write-path recipe composition. Validated by the composer before any row
/// is written; replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
    pub tag_ids: Vec<i32>,
    pub lines: Vec<DraftLine>,
}

/// Denormalized ingredient line as read back from a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub ingredient_id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

/// Read-path projection of a recipe with its full composition joined in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeView {
    pub id: i32,
    pub author_id: Uuid,
    pub name: String,
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<Tag>,
    pub lines: Vec<IngredientLine>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

/// Header fields of a recipe row, fetched for ownership checks and for the
/// short card returned by ledger endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeHeader {
    pub id: i32,
    pub author_id: Uuid,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

/// Short recipe card used in ledger responses and subscription listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

impl From<RecipeHeader> for RecipeCard {
    fn from(header: RecipeHeader) -> Self {
        Self {
            id: header.id,
            name: header.name,
            image: header.image,
            cooking_time: header.cooking_time,
        }
    }
}

/// Discriminator of the saved-item ledger: one table backs both purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SavedPurpose {
    Favorite,
    ShoppingCart,
}

impl SavedPurpose {
    /// Stable storage discriminant for the `purpose` column.
    pub fn discriminant(self) -> i16 {
        match self {
            Self::Favorite => 0,
            Self::ShoppingCart => 1,
        }
    }
}

/// One ingredient line pulled from a recipe in the user's shopping cart,
/// before aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub ingredient_id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

/// Aggregated shopping-list bucket: one ingredient identity with its summed
/// amount. Totals are i64 so sums over many recipes cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub name: String,
    pub amount: i64,
    pub measurement_unit: String,
}

/// Filters for recipe listings. `favorited_by` / `in_cart_of` carry the
/// viewer id because anonymous users cannot filter on their own ledgers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub author: Option<Uuid>,
    pub tag_slugs: Vec<String>,
    pub favorited_by: Option<Uuid>,
    pub in_cart_of: Option<Uuid>,
}

/// A subscribed author together with a preview of their recipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribedAuthor {
    pub author_id: Uuid,
    pub recipes: Vec<RecipeCard>,
    pub recipes_count: u64,
}
