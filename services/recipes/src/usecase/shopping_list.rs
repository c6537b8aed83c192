use std::collections::BTreeMap;

use uuid::Uuid;

use crate::domain::repository::SavedRecipeRepository;
use crate::domain::types::{CartLine, ShoppingListItem};
use crate::error::RecipesServiceError;

/// Fold raw cart lines into sorted shopping-list buckets.
///
/// Grouping key is the ingredient id, not the name: two catalog entries with
/// the same name but different units stay separate. Buckets come out sorted
/// by name ascending, ties broken by measurement unit. Pure — same input,
/// same output.
pub fn aggregate_lines(lines: Vec<CartLine>) -> Vec<ShoppingListItem> {
    let mut buckets: BTreeMap<(String, String, i32), i64> = BTreeMap::new();
    for line in lines {
        let key = (line.name, line.measurement_unit, line.ingredient_id);
        *buckets.entry(key).or_insert(0) += i64::from(line.amount);
    }
    buckets
        .into_iter()
        .map(|((name, measurement_unit, _), amount)| ShoppingListItem {
            name,
            amount,
            measurement_unit,
        })
        .collect()
}

/// Render buckets as the plain-text download body, one
/// `"{name} - {amount} {unit}."` line per bucket.
pub fn render_shopping_list(items: &[ShoppingListItem]) -> String {
    items
        .iter()
        .map(|item| format!("{} - {} {}.", item.name, item.amount, item.measurement_unit))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── AggregateShoppingList ────────────────────────────────────────────────────

pub struct AggregateShoppingListUseCase<S: SavedRecipeRepository> {
    pub saved: S,
}

impl<S: SavedRecipeRepository> AggregateShoppingListUseCase<S> {
    pub async fn execute(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ShoppingListItem>, RecipesServiceError> {
        let lines = self.saved.cart_lines(user_id).await?;
        Ok(aggregate_lines(lines))
    }
}
