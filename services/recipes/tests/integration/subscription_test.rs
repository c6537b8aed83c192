use uuid::Uuid;

use platter_domain::pagination::PageRequest;
use platter_recipes::domain::types::{DraftLine, RecipeDraft};
use platter_recipes::error::RecipesServiceError;
use platter_recipes::usecase::recipe::ComposeRecipeUseCase;
use platter_recipes::usecase::subscription::{
    ListSubscriptionsUseCase, SubscribeUseCase, UnsubscribeUseCase,
};

use crate::helpers::{
    ingredient, tag, MockIngredientRepo, MockRecipeRepo, MockSubscriptionRepo, MockTagRepo,
};

#[tokio::test]
async fn subscribe_then_duplicate_conflicts() {
    let uc = SubscribeUseCase {
        subscriptions: MockSubscriptionRepo::default(),
    };
    let user = Uuid::new_v4();
    let author = Uuid::new_v4();

    uc.execute(user, author).await.unwrap();
    let err = uc.execute(user, author).await.unwrap_err();

    assert!(matches!(err, RecipesServiceError::AlreadySubscribed));
}

#[tokio::test]
async fn self_subscription_is_rejected() {
    let subscriptions = MockSubscriptionRepo::default();
    let uc = SubscribeUseCase {
        subscriptions: subscriptions.clone(),
    };
    let user = Uuid::new_v4();

    let err = uc.execute(user, user).await.unwrap_err();

    assert!(matches!(err, RecipesServiceError::SelfSubscription));
    assert!(subscriptions.pairs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unsubscribe_without_subscription_is_not_found() {
    let uc = UnsubscribeUseCase {
        subscriptions: MockSubscriptionRepo::default(),
    };

    let err = uc
        .execute(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, RecipesServiceError::SubscriptionNotFound));
}

#[tokio::test]
async fn subscribe_unsubscribe_round_trip() {
    let subscriptions = MockSubscriptionRepo::default();
    let user = Uuid::new_v4();
    let author = Uuid::new_v4();

    SubscribeUseCase {
        subscriptions: subscriptions.clone(),
    }
    .execute(user, author)
    .await
    .unwrap();

    let unsubscribe = UnsubscribeUseCase {
        subscriptions: subscriptions.clone(),
    };
    unsubscribe.execute(user, author).await.unwrap();

    let err = unsubscribe.execute(user, author).await.unwrap_err();
    assert!(matches!(err, RecipesServiceError::SubscriptionNotFound));
}

#[tokio::test]
async fn listing_returns_author_previews_with_full_counts() {
    let tags = MockTagRepo {
        tags: vec![tag(1, "breakfast", "breakfast")],
    };
    let ingredients = MockIngredientRepo {
        ingredients: vec![ingredient(1, "flour", "g")],
    };
    let recipes = MockRecipeRepo::new(tags.tags.clone(), ingredients.ingredients.clone());
    let compose = ComposeRecipeUseCase {
        recipes: recipes.clone(),
        tags,
        ingredients,
    };

    let author = Uuid::new_v4();
    for i in 0..3 {
        compose
            .execute(
                author,
                RecipeDraft {
                    name: format!("recipe-{i}"),
                    image: "data:image/png;base64,AAAA".to_owned(),
                    text: "stir".to_owned(),
                    cooking_time: 5,
                    tag_ids: vec![1],
                    lines: vec![DraftLine {
                        ingredient_id: 1,
                        amount: 10,
                    }],
                },
            )
            .await
            .unwrap();
    }

    let subscriptions = MockSubscriptionRepo::default();
    let user = Uuid::new_v4();
    SubscribeUseCase {
        subscriptions: subscriptions.clone(),
    }
    .execute(user, author)
    .await
    .unwrap();

    let list = ListSubscriptionsUseCase {
        subscriptions,
        recipes,
    };
    let authors = list
        .execute(user, PageRequest::default(), Some(2))
        .await
        .unwrap();

    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].author_id, author);
    // Preview capped at 2, count reflects all 3.
    assert_eq!(authors[0].recipes.len(), 2);
    assert_eq!(authors[0].recipes[0].name, "recipe-2");
    assert_eq!(authors[0].recipes_count, 3);
}

#[tokio::test]
async fn listing_for_a_user_with_no_subscriptions_is_empty() {
    let list = ListSubscriptionsUseCase {
        subscriptions: MockSubscriptionRepo::default(),
        recipes: MockRecipeRepo::new(vec![], vec![]),
    };

    let authors = list
        .execute(Uuid::new_v4(), PageRequest::default(), None)
        .await
        .unwrap();

    assert!(authors.is_empty());
}
