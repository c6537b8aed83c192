use anyhow::{Context as _, anyhow};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Statement,
    TransactionTrait,
    sea_query::{Expr, OnConflict, extension::postgres::PgExpr},
};
use uuid::Uuid;

use platter_domain::pagination::PageRequest;
use platter_recipes_schema::{
    ingredients, recipe_ingredients, recipe_tags, recipes, saved_recipes, subscriptions, tags,
};

use crate::domain::repository::{
    IngredientRepository, RecipeRepository, SavedRecipeRepository, SubscriptionRepository,
    TagRepository,
};
use crate::domain::types::{
    CartLine, Ingredient, IngredientLine, RecipeCard, RecipeDraft, RecipeFilter, RecipeHeader,
    RecipeView, SavedPurpose, Tag,
};
use crate::error::RecipesServiceError;

/// Escape LIKE metacharacters so user input only ever matches literally.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

// ── Ingredient repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbIngredientRepository {
    pub db: DatabaseConnection,
}

fn ingredient_from_model(model: ingredients::Model) -> Ingredient {
    Ingredient {
        id: model.id,
        name: model.name,
        measurement_unit: model.measurement_unit,
    }
}

impl IngredientRepository for DbIngredientRepository {
    async fn search(&self, name_prefix: &str) -> Result<Vec<Ingredient>, RecipesServiceError> {
        let mut query = ingredients::Entity::find();
        if !name_prefix.is_empty() {
            let pattern = format!("{}%", escape_like(name_prefix));
            query = query.filter(Expr::col(ingredients::Column::Name).ilike(pattern));
        }
        let models = query
            .order_by_asc(ingredients::Column::Name)
            .order_by_asc(ingredients::Column::MeasurementUnit)
            .all(&self.db)
            .await
            .context("search ingredients")?;
        Ok(models.into_iter().map(ingredient_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Ingredient>, RecipesServiceError> {
        let model = ingredients::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find ingredient by id")?;
        Ok(model.map(ingredient_from_model))
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Ingredient>, RecipesServiceError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = ingredients::Entity::find()
            .filter(ingredients::Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .context("find ingredients by ids")?;
        Ok(models.into_iter().map(ingredient_from_model).collect())
    }
}

// ── Tag repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTagRepository {
    pub db: DatabaseConnection,
}

fn tag_from_model(model: tags::Model) -> Tag {
    Tag {
        id: model.id,
        name: model.name,
        color: model.color,
        slug: model.slug,
    }
}

impl TagRepository for DbTagRepository {
    async fn list(&self) -> Result<Vec<Tag>, RecipesServiceError> {
        let models = tags::Entity::find()
            .order_by_asc(tags::Column::Id)
            .all(&self.db)
            .await
            .context("list tags")?;
        Ok(models.into_iter().map(tag_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, RecipesServiceError> {
        let model = tags::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find tag by id")?;
        Ok(model.map(tag_from_model))
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>, RecipesServiceError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = tags::Entity::find()
            .filter(tags::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(tags::Column::Id)
            .all(&self.db)
            .await
            .context("find tags by ids")?;
        Ok(models.into_iter().map(tag_from_model).collect())
    }
}

// ── Recipe repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRecipeRepository {
    pub db: DatabaseConnection,
}

fn header_from_model(model: &recipes::Model) -> RecipeHeader {
    RecipeHeader {
        id: model.id,
        author_id: model.author_id,
        name: model.name.clone(),
        image: model.image.clone(),
        cooking_time: model.cooking_time,
    }
}

/// Bulk-insert the tag links and ingredient lines of a validated draft.
/// Callers hold the transaction; the draft is validated non-empty upstream.
async fn insert_composition(
    txn: &DatabaseTransaction,
    recipe_id: i32,
    draft: &RecipeDraft,
) -> Result<(), RecipesServiceError> {
    let tag_links = draft.tag_ids.iter().map(|&tag_id| recipe_tags::ActiveModel {
        recipe_id: Set(recipe_id),
        tag_id: Set(tag_id),
    });
    recipe_tags::Entity::insert_many(tag_links)
        .exec(txn)
        .await
        .context("insert recipe tag links")?;

    let lines = draft
        .lines
        .iter()
        .map(|line| recipe_ingredients::ActiveModel {
            recipe_id: Set(recipe_id),
            ingredient_id: Set(line.ingredient_id),
            amount: Set(line.amount),
        });
    recipe_ingredients::Entity::insert_many(lines)
        .exec(txn)
        .await
        .context("insert recipe ingredient lines")?;
    Ok(())
}

impl DbRecipeRepository {
    /// Join the full composition and the viewer's ledger flags onto a header row.
    async fn view_from_model(
        &self,
        viewer: Option<Uuid>,
        model: recipes::Model,
    ) -> Result<RecipeView, RecipesServiceError> {
        let tag_ids: Vec<i32> = recipe_tags::Entity::find()
            .filter(recipe_tags::Column::RecipeId.eq(model.id))
            .all(&self.db)
            .await
            .context("load recipe tag links")?
            .into_iter()
            .map(|link| link.tag_id)
            .collect();
        let tag_models = if tag_ids.is_empty() {
            vec![]
        } else {
            tags::Entity::find()
                .filter(tags::Column::Id.is_in(tag_ids))
                .order_by_asc(tags::Column::Id)
                .all(&self.db)
                .await
                .context("load recipe tags")?
        };

        let line_rows = recipe_ingredients::Entity::find()
            .filter(recipe_ingredients::Column::RecipeId.eq(model.id))
            .order_by_asc(recipe_ingredients::Column::IngredientId)
            .find_also_related(ingredients::Entity)
            .all(&self.db)
            .await
            .context("load recipe ingredient lines")?;
        let mut lines = Vec::with_capacity(line_rows.len());
        for (line, ingredient) in line_rows {
            let ingredient = ingredient
                .ok_or_else(|| anyhow!("ingredient {} missing for line", line.ingredient_id))?;
            lines.push(IngredientLine {
                ingredient_id: ingredient.id,
                name: ingredient.name,
                measurement_unit: ingredient.measurement_unit,
                amount: line.amount,
            });
        }

        let (is_favorited, is_in_shopping_cart) = match viewer {
            Some(user_id) => (
                self.saved_flag(user_id, model.id, SavedPurpose::Favorite)
                    .await?,
                self.saved_flag(user_id, model.id, SavedPurpose::ShoppingCart)
                    .await?,
            ),
            None => (false, false),
        };

        Ok(RecipeView {
            id: model.id,
            author_id: model.author_id,
            name: model.name,
            image: model.image,
            text: model.text,
            cooking_time: model.cooking_time,
            created_at: model.created_at,
            tags: tag_models.into_iter().map(tag_from_model).collect(),
            lines,
            is_favorited,
            is_in_shopping_cart,
        })
    }

    async fn saved_flag(
        &self,
        user_id: Uuid,
        recipe_id: i32,
        purpose: SavedPurpose,
    ) -> Result<bool, RecipesServiceError> {
        let count = saved_recipes::Entity::find()
            .filter(saved_recipes::Column::UserId.eq(user_id))
            .filter(saved_recipes::Column::RecipeId.eq(recipe_id))
            .filter(saved_recipes::Column::Purpose.eq(purpose.discriminant()))
            .count(&self.db)
            .await
            .context("check saved flag")?;
        Ok(count > 0)
    }

    /// Recipe ids in the user's ledger for one purpose.
    async fn saved_recipe_ids(
        &self,
        user_id: Uuid,
        purpose: SavedPurpose,
    ) -> Result<Vec<i32>, RecipesServiceError> {
        let rows = saved_recipes::Entity::find()
            .filter(saved_recipes::Column::UserId.eq(user_id))
            .filter(saved_recipes::Column::Purpose.eq(purpose.discriminant()))
            .all(&self.db)
            .await
            .context("list saved recipe ids")?;
        Ok(rows.into_iter().map(|row| row.recipe_id).collect())
    }
}

impl RecipeRepository for DbRecipeRepository {
    async fn create(
        &self,
        author_id: Uuid,
        draft: &RecipeDraft,
    ) -> Result<i32, RecipesServiceError> {
        let txn = self.db.begin().await.context("begin create recipe")?;
        let model = recipes::ActiveModel {
            id: NotSet,
            author_id: Set(author_id),
            name: Set(draft.name.clone()),
            image: Set(draft.image.clone()),
            text: Set(draft.text.clone()),
            cooking_time: Set(draft.cooking_time),
            created_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await
        .context("insert recipe header")?;
        insert_composition(&txn, model.id, draft).await?;
        txn.commit().await.context("commit create recipe")?;
        Ok(model.id)
    }

    async fn replace(
        &self,
        recipe_id: i32,
        draft: &RecipeDraft,
    ) -> Result<(), RecipesServiceError> {
        let txn = self.db.begin().await.context("begin replace recipe")?;
        recipes::ActiveModel {
            id: Set(recipe_id),
            name: Set(draft.name.clone()),
            image: Set(draft.image.clone()),
            text: Set(draft.text.clone()),
            cooking_time: Set(draft.cooking_time),
            ..Default::default()
        }
        .update(&txn)
        .await
        .context("update recipe header")?;

        // Clear-then-rewrite: stale lines must never survive an update.
        recipe_tags::Entity::delete_many()
            .filter(recipe_tags::Column::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await
            .context("clear recipe tag links")?;
        recipe_ingredients::Entity::delete_many()
            .filter(recipe_ingredients::Column::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await
            .context("clear recipe ingredient lines")?;
        insert_composition(&txn, recipe_id, draft).await?;
        txn.commit().await.context("commit replace recipe")?;
        Ok(())
    }

    async fn find_header(
        &self,
        recipe_id: i32,
    ) -> Result<Option<RecipeHeader>, RecipesServiceError> {
        let model = recipes::Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .context("find recipe header")?;
        Ok(model.as_ref().map(header_from_model))
    }

    async fn find_view(
        &self,
        viewer: Option<Uuid>,
        recipe_id: i32,
    ) -> Result<Option<RecipeView>, RecipesServiceError> {
        let Some(model) = recipes::Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .context("find recipe")?
        else {
            return Ok(None);
        };
        Ok(Some(self.view_from_model(viewer, model).await?))
    }

    async fn list_views(
        &self,
        viewer: Option<Uuid>,
        filter: &RecipeFilter,
        page: PageRequest,
    ) -> Result<Vec<RecipeView>, RecipesServiceError> {
        let mut query = recipes::Entity::find();

        if let Some(author) = filter.author {
            query = query.filter(recipes::Column::AuthorId.eq(author));
        }

        if !filter.tag_slugs.is_empty() {
            let tag_ids: Vec<i32> = tags::Entity::find()
                .filter(tags::Column::Slug.is_in(filter.tag_slugs.clone()))
                .all(&self.db)
                .await
                .context("resolve tag slugs")?
                .into_iter()
                .map(|tag| tag.id)
                .collect();
            let recipe_ids: Vec<i32> = if tag_ids.is_empty() {
                vec![]
            } else {
                recipe_tags::Entity::find()
                    .filter(recipe_tags::Column::TagId.is_in(tag_ids))
                    .all(&self.db)
                    .await
                    .context("resolve tagged recipes")?
                    .into_iter()
                    .map(|link| link.recipe_id)
                    .collect()
            };
            if recipe_ids.is_empty() {
                return Ok(vec![]);
            }
            query = query.filter(recipes::Column::Id.is_in(recipe_ids));
        }

        if let Some(user_id) = filter.favorited_by {
            let ids = self.saved_recipe_ids(user_id, SavedPurpose::Favorite).await?;
            if ids.is_empty() {
                return Ok(vec![]);
            }
            query = query.filter(recipes::Column::Id.is_in(ids));
        }
        if let Some(user_id) = filter.in_cart_of {
            let ids = self
                .saved_recipe_ids(user_id, SavedPurpose::ShoppingCart)
                .await?;
            if ids.is_empty() {
                return Ok(vec![]);
            }
            query = query.filter(recipes::Column::Id.is_in(ids));
        }

        let models = query
            .order_by_desc(recipes::Column::CreatedAt)
            .order_by_desc(recipes::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list recipes")?;

        let mut views = Vec::with_capacity(models.len());
        for model in models {
            views.push(self.view_from_model(viewer, model).await?);
        }
        Ok(views)
    }

    async fn delete(&self, recipe_id: i32) -> Result<bool, RecipesServiceError> {
        let result = recipes::Entity::delete_by_id(recipe_id)
            .exec(&self.db)
            .await
            .context("delete recipe")?;
        Ok(result.rows_affected > 0)
    }

    async fn cards_by_author(
        &self,
        author_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<RecipeCard>, RecipesServiceError> {
        let mut query = recipes::Entity::find()
            .filter(recipes::Column::AuthorId.eq(author_id))
            .order_by_desc(recipes::Column::CreatedAt)
            .order_by_desc(recipes::Column::Id);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        let models = query.all(&self.db).await.context("list author recipes")?;
        Ok(models
            .into_iter()
            .map(|model| RecipeCard::from(header_from_model(&model)))
            .collect())
    }

    async fn count_by_author(&self, author_id: Uuid) -> Result<u64, RecipesServiceError> {
        let count = recipes::Entity::find()
            .filter(recipes::Column::AuthorId.eq(author_id))
            .count(&self.db)
            .await
            .context("count author recipes")?;
        Ok(count)
    }
}

// ── Saved-item ledger ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSavedRecipeRepository {
    pub db: DatabaseConnection,
}

impl SavedRecipeRepository for DbSavedRecipeRepository {
    async fn add(
        &self,
        user_id: Uuid,
        recipe_id: i32,
        purpose: SavedPurpose,
    ) -> Result<bool, RecipesServiceError> {
        // The composite pk arbitrates concurrent duplicate adds; exactly one
        // insert lands, the rest report zero affected rows.
        let inserted = saved_recipes::Entity::insert(saved_recipes::ActiveModel {
            user_id: Set(user_id),
            recipe_id: Set(recipe_id),
            purpose: Set(purpose.discriminant()),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                saved_recipes::Column::UserId,
                saved_recipes::Column::RecipeId,
                saved_recipes::Column::Purpose,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("insert saved recipe")?;
        Ok(inserted > 0)
    }

    async fn remove(
        &self,
        user_id: Uuid,
        recipe_id: i32,
        purpose: SavedPurpose,
    ) -> Result<bool, RecipesServiceError> {
        let result = saved_recipes::Entity::delete_many()
            .filter(saved_recipes::Column::UserId.eq(user_id))
            .filter(saved_recipes::Column::RecipeId.eq(recipe_id))
            .filter(saved_recipes::Column::Purpose.eq(purpose.discriminant()))
            .exec(&self.db)
            .await
            .context("delete saved recipe")?;
        Ok(result.rows_affected > 0)
    }

    async fn cart_lines(&self, user_id: Uuid) -> Result<Vec<CartLine>, RecipesServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct CartLineRow {
            ingredient_id: i32,
            name: String,
            measurement_unit: String,
            amount: i32,
        }

        let sql = r#"
            SELECT ri.ingredient_id, i.name, i.measurement_unit, ri.amount
            FROM recipe_ingredients ri
            INNER JOIN ingredients i ON i.id = ri.ingredient_id
            INNER JOIN saved_recipes s ON s.recipe_id = ri.recipe_id
            WHERE s.user_id = $1 AND s.purpose = $2
        "#;
        let rows = CartLineRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [
                user_id.into(),
                SavedPurpose::ShoppingCart.discriminant().into(),
            ],
        ))
        .all(&self.db)
        .await
        .context("load shopping cart lines")?;

        Ok(rows
            .into_iter()
            .map(|row| CartLine {
                ingredient_id: row.ingredient_id,
                name: row.name,
                measurement_unit: row.measurement_unit,
                amount: row.amount,
            })
            .collect())
    }
}

// ── Subscription repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSubscriptionRepository {
    pub db: DatabaseConnection,
}

impl SubscriptionRepository for DbSubscriptionRepository {
    async fn add(&self, user_id: Uuid, author_id: Uuid) -> Result<bool, RecipesServiceError> {
        let inserted = subscriptions::Entity::insert(subscriptions::ActiveModel {
            user_id: Set(user_id),
            author_id: Set(author_id),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                subscriptions::Column::UserId,
                subscriptions::Column::AuthorId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("insert subscription")?;
        Ok(inserted > 0)
    }

    async fn remove(&self, user_id: Uuid, author_id: Uuid) -> Result<bool, RecipesServiceError> {
        let result = subscriptions::Entity::delete_many()
            .filter(subscriptions::Column::UserId.eq(user_id))
            .filter(subscriptions::Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .context("delete subscription")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_authors(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Uuid>, RecipesServiceError> {
        let rows = subscriptions::Entity::find()
            .filter(subscriptions::Column::UserId.eq(user_id))
            .order_by_desc(subscriptions::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list subscriptions")?;
        Ok(rows.into_iter().map(|row| row.author_id).collect())
    }
}
