use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use platter_core::health::{healthz, readyz};
use platter_core::middleware::request_id_layer;

use crate::handlers::{
    ingredient::{get_ingredient, search_ingredients},
    recipe::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe},
    saved::{
        create_favorite, create_shopping_cart, delete_favorite, delete_shopping_cart,
        download_shopping_cart,
    },
    subscription::{create_subscription, delete_subscription, get_subscriptions},
    tag::{get_tag, list_tags},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Recipes
        .route("/recipes", get(list_recipes))
        .route("/recipes", post(create_recipe))
        // Static segment registered alongside /recipes/{id}; axum routes
        // it with priority over the capture.
        .route("/recipes/download_shopping_cart", get(download_shopping_cart))
        .route("/recipes/{id}", get(get_recipe))
        .route("/recipes/{id}", patch(update_recipe))
        .route("/recipes/{id}", delete(delete_recipe))
        // Saved-item ledger
        .route("/recipes/{id}/favorite", post(create_favorite))
        .route("/recipes/{id}/favorite", delete(delete_favorite))
        .route("/recipes/{id}/shopping_cart", post(create_shopping_cart))
        .route("/recipes/{id}/shopping_cart", delete(delete_shopping_cart))
        // Catalogs
        .route("/ingredients", get(search_ingredients))
        .route("/ingredients/{id}", get(get_ingredient))
        .route("/tags", get(list_tags))
        .route("/tags/{id}", get(get_tag))
        // Subscriptions
        .route("/users/subscriptions", get(get_subscriptions))
        .route("/users/{id}/subscribe", post(create_subscription))
        .route("/users/{id}/subscribe", delete(delete_subscription))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
