use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Recipes service error variants.
///
/// One canonical message per kind; handlers never construct ad-hoc strings.
#[derive(Debug, thiserror::Error)]
pub enum RecipesServiceError {
    // Draft validation (400)
    #[error("at least one tag is required")]
    EmptyTags,
    #[error("duplicate tag in tag set")]
    DuplicateTag,
    #[error("unknown tag")]
    UnknownTag,
    #[error("at least one ingredient is required")]
    EmptyIngredients,
    #[error("duplicate ingredient in recipe")]
    DuplicateIngredient,
    #[error("ingredient amount must be at least 1")]
    InvalidAmount,
    #[error("unknown ingredient")]
    UnknownIngredient,
    #[error("cooking time must be at least 1")]
    InvalidCookingTime,
    #[error("cannot subscribe to yourself")]
    SelfSubscription,
    #[error("invalid query parameters")]
    InvalidQuery,
    // Conflicts (409)
    #[error("recipe already saved")]
    AlreadySaved,
    #[error("already subscribed to author")]
    AlreadySubscribed,
    // Missing resources (404)
    #[error("recipe not found")]
    RecipeNotFound,
    #[error("ingredient not found")]
    IngredientNotFound,
    #[error("tag not found")]
    TagNotFound,
    #[error("saved entry not found")]
    SavedEntryNotFound,
    #[error("subscription not found")]
    SubscriptionNotFound,
    // Authorization (403)
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RecipesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyTags => "EMPTY_TAGS",
            Self::DuplicateTag => "DUPLICATE_TAG",
            Self::UnknownTag => "UNKNOWN_TAG",
            Self::EmptyIngredients => "EMPTY_INGREDIENTS",
            Self::DuplicateIngredient => "DUPLICATE_INGREDIENT",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::UnknownIngredient => "UNKNOWN_INGREDIENT",
            Self::InvalidCookingTime => "INVALID_COOKING_TIME",
            Self::SelfSubscription => "SELF_SUBSCRIPTION",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::AlreadySaved => "ALREADY_SAVED",
            Self::AlreadySubscribed => "ALREADY_SUBSCRIBED",
            Self::RecipeNotFound => "RECIPE_NOT_FOUND",
            Self::IngredientNotFound => "INGREDIENT_NOT_FOUND",
            Self::TagNotFound => "TAG_NOT_FOUND",
            Self::SavedEntryNotFound => "SAVED_ENTRY_NOT_FOUND",
            Self::SubscriptionNotFound => "SUBSCRIPTION_NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyTags
            | Self::DuplicateTag
            | Self::UnknownTag
            | Self::EmptyIngredients
            | Self::DuplicateIngredient
            | Self::InvalidAmount
            | Self::UnknownIngredient
            | Self::InvalidCookingTime
            | Self::SelfSubscription
            | Self::InvalidQuery => StatusCode::BAD_REQUEST,
            Self::AlreadySaved | Self::AlreadySubscribed => StatusCode::CONFLICT,
            Self::RecipeNotFound
            | Self::IngredientNotFound
            | Self::TagNotFound
            | Self::SavedEntryNotFound
            | Self::SubscriptionNotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RecipesServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for every request; 4xx are expected client errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
