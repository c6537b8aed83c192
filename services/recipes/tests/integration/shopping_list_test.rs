use uuid::Uuid;

use platter_recipes::domain::types::CartLine;
use platter_recipes::usecase::shopping_list::{render_shopping_list, AggregateShoppingListUseCase};

use crate::helpers::MockSavedRepo;

fn line(ingredient_id: i32, name: &str, unit: &str, amount: i32) -> CartLine {
    CartLine {
        ingredient_id,
        name: name.to_owned(),
        measurement_unit: unit.to_owned(),
        amount,
    }
}

#[tokio::test]
async fn aggregates_cart_lines_across_recipes() {
    // Two recipes sharing flour: 200 g + 100 g.
    let saved = MockSavedRepo::with_cart_lines(vec![
        line(1, "flour", "g", 200),
        line(2, "egg", "pcs", 2),
        line(1, "flour", "g", 100),
        line(3, "milk", "ml", 50),
    ]);
    let uc = AggregateShoppingListUseCase { saved };

    let items = uc.execute(Uuid::new_v4()).await.unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].name, "egg");
    assert_eq!(items[0].amount, 2);
    assert_eq!(items[1].name, "flour");
    assert_eq!(items[1].amount, 300);
    assert_eq!(items[2].name, "milk");
    assert_eq!(items[2].amount, 50);
}

#[tokio::test]
async fn empty_cart_yields_empty_list_and_empty_body() {
    let uc = AggregateShoppingListUseCase {
        saved: MockSavedRepo::default(),
    };

    let items = uc.execute(Uuid::new_v4()).await.unwrap();

    assert!(items.is_empty());
    assert_eq!(render_shopping_list(&items), "");
}

#[tokio::test]
async fn aggregation_is_idempotent_over_the_same_cart() {
    let saved = MockSavedRepo::with_cart_lines(vec![
        line(1, "flour", "g", 200),
        line(2, "egg", "pcs", 2),
    ]);
    let uc = AggregateShoppingListUseCase { saved };
    let user = Uuid::new_v4();

    let first = uc.execute(user).await.unwrap();
    let second = uc.execute(user).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn renders_download_body_in_bucket_order() {
    let saved = MockSavedRepo::with_cart_lines(vec![
        line(1, "flour", "g", 300),
        line(2, "egg", "pcs", 2),
    ]);
    let uc = AggregateShoppingListUseCase { saved };

    let items = uc.execute(Uuid::new_v4()).await.unwrap();

    assert_eq!(render_shopping_list(&items), "egg - 2 pcs.\nflour - 300 g.");
}
