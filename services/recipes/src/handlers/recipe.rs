use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_auth_types::identity::{Identity, MaybeIdentity};
use platter_domain::pagination::PageRequest;

use crate::domain::types::{DraftLine, IngredientLine, RecipeDraft, RecipeFilter, RecipeView};
use crate::error::RecipesServiceError;
use crate::handlers::tag::TagResponse;
use crate::state::AppState;
use crate::usecase::recipe::{
    ComposeRecipeUseCase, DeleteRecipeUseCase, GetRecipeUseCase, ListRecipesUseCase,
    UpdateRecipeUseCase,
};

// ── Write path: RecipeRequest ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecipeLineRequest {
    /// Catalog ingredient id.
    pub id: i32,
    pub amount: i32,
}

/// Write-path body for both POST and PATCH. Distinct from the read-path
/// `RecipeViewResponse`; the composition is always submitted whole.
#[derive(Deserialize)]
pub struct RecipeRequest {
    pub name: String,
    pub text: String,
    pub image: String,
    pub cooking_time: i32,
    pub tags: Vec<i32>,
    pub ingredients: Vec<RecipeLineRequest>,
}

impl From<RecipeRequest> for RecipeDraft {
    fn from(body: RecipeRequest) -> Self {
        Self {
            name: body.name,
            image: body.image,
            text: body.text,
            cooking_time: body.cooking_time,
            tag_ids: body.tags,
            lines: body
                .ingredients
                .into_iter()
                .map(|line| DraftLine {
                    ingredient_id: line.id,
                    amount: line.amount,
                })
                .collect(),
        }
    }
}

// ── Read path: RecipeViewResponse ────────────────────────────────────────────

#[derive(Serialize)]
pub struct IngredientLineResponse {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl From<IngredientLine> for IngredientLineResponse {
    fn from(line: IngredientLine) -> Self {
        Self {
            id: line.ingredient_id,
            name: line.name,
            measurement_unit: line.measurement_unit,
            amount: line.amount,
        }
    }
}

#[derive(Serialize)]
pub struct RecipeViewResponse {
    pub id: i32,
    pub author_id: Uuid,
    pub tags: Vec<TagResponse>,
    pub ingredients: Vec<IngredientLineResponse>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
    #[serde(serialize_with = "platter_core::serde::to_rfc3339")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<RecipeView> for RecipeViewResponse {
    fn from(view: RecipeView) -> Self {
        Self {
            id: view.id,
            author_id: view.author_id,
            tags: view.tags.into_iter().map(TagResponse::from).collect(),
            ingredients: view
                .lines
                .into_iter()
                .map(IngredientLineResponse::from)
                .collect(),
            is_favorited: view.is_favorited,
            is_in_shopping_cart: view.is_in_shopping_cart,
            name: view.name,
            image: view.image,
            text: view.text,
            cooking_time: view.cooking_time,
            created_at: view.created_at,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RecipeListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub author: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_favorited: Option<bool>,
    pub is_in_shopping_cart: Option<bool>,
}

// ── GET /recipes ─────────────────────────────────────────────────────────────

pub async fn list_recipes(
    identity: MaybeIdentity,
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<RecipeViewResponse>>, RecipesServiceError> {
    let query: RecipeListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| RecipesServiceError::InvalidQuery)?
        .unwrap_or_default();

    let viewer = identity.user_id();
    // Ledger filters are meaningless without a viewer; anonymous requests
    // simply skip them.
    let filter = RecipeFilter {
        author: query.author,
        tag_slugs: query.tags,
        favorited_by: viewer.filter(|_| query.is_favorited == Some(true)),
        in_cart_of: viewer.filter(|_| query.is_in_shopping_cart == Some(true)),
    };
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(PageRequest::default().per_page),
        page: query.page.unwrap_or(PageRequest::default().page),
    };

    let uc = ListRecipesUseCase {
        recipes: state.recipe_repo(),
    };
    let views = uc.execute(viewer, filter, page).await?;
    Ok(Json(views.into_iter().map(RecipeViewResponse::from).collect()))
}

// ── GET /recipes/{id} ────────────────────────────────────────────────────────

pub async fn get_recipe(
    identity: MaybeIdentity,
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<Json<RecipeViewResponse>, RecipesServiceError> {
    let uc = GetRecipeUseCase {
        recipes: state.recipe_repo(),
    };
    let view = uc.execute(identity.user_id(), recipe_id).await?;
    Ok(Json(RecipeViewResponse::from(view)))
}

// ── POST /recipes ────────────────────────────────────────────────────────────

pub async fn create_recipe(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<RecipeRequest>,
) -> Result<(StatusCode, Json<RecipeViewResponse>), RecipesServiceError> {
    let uc = ComposeRecipeUseCase {
        recipes: state.recipe_repo(),
        tags: state.tag_repo(),
        ingredients: state.ingredient_repo(),
    };
    let view = uc.execute(identity.user_id, RecipeDraft::from(body)).await?;
    Ok((StatusCode::CREATED, Json(RecipeViewResponse::from(view))))
}

// ── PATCH /recipes/{id} ──────────────────────────────────────────────────────

pub async fn update_recipe(
    identity: Identity,
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
    Json(body): Json<RecipeRequest>,
) -> Result<Json<RecipeViewResponse>, RecipesServiceError> {
    let uc = UpdateRecipeUseCase {
        recipes: state.recipe_repo(),
        tags: state.tag_repo(),
        ingredients: state.ingredient_repo(),
    };
    let view = uc
        .execute(identity.user_id, recipe_id, RecipeDraft::from(body))
        .await?;
    Ok(Json(RecipeViewResponse::from(view)))
}

// ── DELETE /recipes/{id} ─────────────────────────────────────────────────────

pub async fn delete_recipe(
    identity: Identity,
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<StatusCode, RecipesServiceError> {
    let uc = DeleteRecipeUseCase {
        recipes: state.recipe_repo(),
    };
    uc.execute(identity.user_id, recipe_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
