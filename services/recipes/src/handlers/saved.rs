use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use platter_auth_types::identity::Identity;

use crate::domain::types::{RecipeCard, SavedPurpose};
use crate::error::RecipesServiceError;
use crate::state::AppState;
use crate::usecase::saved::{SaveRecipeUseCase, UnsaveRecipeUseCase};
use crate::usecase::shopping_list::{AggregateShoppingListUseCase, render_shopping_list};

#[derive(Serialize)]
pub struct RecipeCardResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

impl From<RecipeCard> for RecipeCardResponse {
    fn from(card: RecipeCard) -> Self {
        Self {
            id: card.id,
            name: card.name,
            image: card.image,
            cooking_time: card.cooking_time,
        }
    }
}

async fn save(
    state: AppState,
    identity: Identity,
    recipe_id: i32,
    purpose: SavedPurpose,
) -> Result<(StatusCode, Json<RecipeCardResponse>), RecipesServiceError> {
    let uc = SaveRecipeUseCase {
        recipes: state.recipe_repo(),
        saved: state.saved_repo(),
    };
    let card = uc.execute(identity.user_id, recipe_id, purpose).await?;
    Ok((StatusCode::CREATED, Json(RecipeCardResponse::from(card))))
}

async fn unsave(
    state: AppState,
    identity: Identity,
    recipe_id: i32,
    purpose: SavedPurpose,
) -> Result<StatusCode, RecipesServiceError> {
    let uc = UnsaveRecipeUseCase {
        saved: state.saved_repo(),
    };
    uc.execute(identity.user_id, recipe_id, purpose).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /recipes/{id}/favorite ──────────────────────────────────────────────

pub async fn create_favorite(
    identity: Identity,
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<(StatusCode, Json<RecipeCardResponse>), RecipesServiceError> {
    save(state, identity, recipe_id, SavedPurpose::Favorite).await
}

// ── DELETE /recipes/{id}/favorite ────────────────────────────────────────────

pub async fn delete_favorite(
    identity: Identity,
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<StatusCode, RecipesServiceError> {
    unsave(state, identity, recipe_id, SavedPurpose::Favorite).await
}

// ── POST /recipes/{id}/shopping_cart ─────────────────────────────────────────

pub async fn create_shopping_cart(
    identity: Identity,
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<(StatusCode, Json<RecipeCardResponse>), RecipesServiceError> {
    save(state, identity, recipe_id, SavedPurpose::ShoppingCart).await
}

// ── DELETE /recipes/{id}/shopping_cart ───────────────────────────────────────

pub async fn delete_shopping_cart(
    identity: Identity,
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<StatusCode, RecipesServiceError> {
    unsave(state, identity, recipe_id, SavedPurpose::ShoppingCart).await
}

// ── GET /recipes/download_shopping_cart ──────────────────────────────────────

pub async fn download_shopping_cart(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Response, RecipesServiceError> {
    let uc = AggregateShoppingListUseCase {
        saved: state.saved_repo(),
    };
    let items = uc.execute(identity.user_id).await?;
    let body = render_shopping_list(&items);
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"shopping_list.txt\"",
            ),
        ],
        body,
    )
        .into_response())
}
