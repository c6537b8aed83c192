use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_auth_types::identity::Identity;
use platter_domain::pagination::PageRequest;

use crate::domain::types::SubscribedAuthor;
use crate::error::RecipesServiceError;
use crate::handlers::saved::RecipeCardResponse;
use crate::state::AppState;
use crate::usecase::subscription::{
    ListSubscriptionsUseCase, SubscribeUseCase, UnsubscribeUseCase,
};

#[derive(Serialize)]
pub struct SubscribedAuthorResponse {
    pub author_id: Uuid,
    pub recipes: Vec<RecipeCardResponse>,
    pub recipes_count: u64,
}

impl From<SubscribedAuthor> for SubscribedAuthorResponse {
    fn from(author: SubscribedAuthor) -> Self {
        Self {
            author_id: author.author_id,
            recipes: author
                .recipes
                .into_iter()
                .map(RecipeCardResponse::from)
                .collect(),
            recipes_count: author.recipes_count,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct SubscriptionListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub recipes_limit: Option<u64>,
}

// ── POST /users/{id}/subscribe ───────────────────────────────────────────────

pub async fn create_subscription(
    identity: Identity,
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
) -> Result<StatusCode, RecipesServiceError> {
    let uc = SubscribeUseCase {
        subscriptions: state.subscription_repo(),
    };
    uc.execute(identity.user_id, author_id).await?;
    Ok(StatusCode::CREATED)
}

// ── DELETE /users/{id}/subscribe ─────────────────────────────────────────────

pub async fn delete_subscription(
    identity: Identity,
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
) -> Result<StatusCode, RecipesServiceError> {
    let uc = UnsubscribeUseCase {
        subscriptions: state.subscription_repo(),
    };
    uc.execute(identity.user_id, author_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /users/subscriptions ─────────────────────────────────────────────────

pub async fn get_subscriptions(
    identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<SubscriptionListQuery>,
) -> Result<Json<Vec<SubscribedAuthorResponse>>, RecipesServiceError> {
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(PageRequest::default().per_page),
        page: query.page.unwrap_or(PageRequest::default().page),
    };
    let uc = ListSubscriptionsUseCase {
        subscriptions: state.subscription_repo(),
        recipes: state.recipe_repo(),
    };
    let authors = uc
        .execute(identity.user_id, page, query.recipes_limit)
        .await?;
    Ok(Json(
        authors
            .into_iter()
            .map(SubscribedAuthorResponse::from)
            .collect(),
    ))
}
