use uuid::Uuid;

use platter_domain::pagination::PageRequest;

use crate::domain::repository::{RecipeRepository, SubscriptionRepository};
use crate::domain::types::SubscribedAuthor;
use crate::error::RecipesServiceError;

// ── Subscribe ────────────────────────────────────────────────────────────────

pub struct SubscribeUseCase<S: SubscriptionRepository> {
    pub subscriptions: S,
}

impl<S: SubscriptionRepository> SubscribeUseCase<S> {
    pub async fn execute(&self, user_id: Uuid, author_id: Uuid) -> Result<(), RecipesServiceError> {
        if user_id == author_id {
            return Err(RecipesServiceError::SelfSubscription);
        }
        let inserted = self.subscriptions.add(user_id, author_id).await?;
        if !inserted {
            return Err(RecipesServiceError::AlreadySubscribed);
        }
        Ok(())
    }
}

// ── Unsubscribe ──────────────────────────────────────────────────────────────

pub struct UnsubscribeUseCase<S: SubscriptionRepository> {
    pub subscriptions: S,
}

impl<S: SubscriptionRepository> UnsubscribeUseCase<S> {
    pub async fn execute(&self, user_id: Uuid, author_id: Uuid) -> Result<(), RecipesServiceError> {
        let removed = self.subscriptions.remove(user_id, author_id).await?;
        if !removed {
            return Err(RecipesServiceError::SubscriptionNotFound);
        }
        Ok(())
    }
}

// ── ListSubscriptions ────────────────────────────────────────────────────────

pub struct ListSubscriptionsUseCase<S: SubscriptionRepository, R: RecipeRepository> {
    pub subscriptions: S,
    pub recipes: R,
}

impl<S: SubscriptionRepository, R: RecipeRepository> ListSubscriptionsUseCase<S, R> {
    /// Followed authors with a preview of their recipes. `recipes_limit`
    /// caps the preview per author; the count is always the full total.
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
        recipes_limit: Option<u64>,
    ) -> Result<Vec<SubscribedAuthor>, RecipesServiceError> {
        let authors = self
            .subscriptions
            .list_authors(user_id, page.clamped())
            .await?;
        let mut result = Vec::with_capacity(authors.len());
        for author_id in authors {
            let recipes = self.recipes.cards_by_author(author_id, recipes_limit).await?;
            let recipes_count = self.recipes.count_by_author(author_id).await?;
            result.push(SubscribedAuthor {
                author_id,
                recipes,
                recipes_count,
            });
        }
        Ok(result)
    }
}
