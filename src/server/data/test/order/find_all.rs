use super::*;

/// Tests loading every order without a filter.
///
/// Expected: Ok with both orders in id order
#[tokio::test]
async fn returns_all_orders_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (kim_order, lee_order) = seed_two_orders(db).await?;

    let repo = OrderRepository::new(db);
    let orders = repo.find_all(&OrderSearch::default()).await?;

    assert_eq!(
        orders.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![kim_order.id, lee_order.id]
    );

    Ok(())
}

/// Tests the member name filter.
///
/// Filtering joins member for the predicate only and matches on substrings.
///
/// Expected: Ok with only kim's order
#[tokio::test]
async fn filters_by_member_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (kim_order, _) = seed_two_orders(db).await?;

    let repo = OrderRepository::new(db);
    let orders = repo
        .find_all(&OrderSearch {
            member_name: Some("ki".to_string()),
            order_status: None,
        })
        .await?;

    assert_eq!(orders, vec![kim_order]);

    Ok(())
}

/// Tests the order status filter.
///
/// Expected: Ok with only the canceled order
#[tokio::test]
async fn filters_by_order_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, lee_order) = seed_two_orders(db).await?;

    let repo = OrderRepository::new(db);
    let orders = repo
        .find_all(&OrderSearch {
            member_name: None,
            order_status: Some(OrderStatus::Canceled),
        })
        .await?;

    assert_eq!(orders, vec![lee_order]);

    Ok(())
}

/// Tests an empty table.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);

    assert!(repo.find_all(&OrderSearch::default()).await?.is_empty());

    Ok(())
}

/// Tests that `%` and `_` in the member name filter are not wildcards.
///
/// Expected: Ok with nothing for `%`, and only the underscored member's order for `_`
#[tokio::test]
async fn matches_like_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_orders(db).await?;
    let park = factory::create_member_with_name(db, "park_j").await?;
    let (_, park_order) = factory::create_order_for_member(db, &park).await?;

    let repo = OrderRepository::new(db);
    let by_percent = repo
        .find_all(&OrderSearch {
            member_name: Some("%".to_string()),
            order_status: None,
        })
        .await?;
    let by_underscore = repo
        .find_all(&OrderSearch {
            member_name: Some("_".to_string()),
            order_status: None,
        })
        .await?;

    assert!(by_percent.is_empty());
    assert_eq!(by_underscore, vec![park_order]);

    Ok(())
}
