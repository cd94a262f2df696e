use super::*;

/// Tests that the projection query yields the same summaries as the join fetch.
///
/// Expected: Ok with identical `SimpleOrder` values in the same order
#[tokio::test]
async fn matches_join_fetch_summaries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_orders(db).await?;

    let projected = OrderSimpleQueryRepository::new(db)
        .find_simple_orders(&OrderSearch::default())
        .await?;
    let joined: Vec<SimpleOrder> = OrderRepository::new(db)
        .find_all_with_member_delivery(&OrderSearch::default())
        .await?
        .iter()
        .map(SimpleOrder::from_graph)
        .collect();

    assert_eq!(projected, joined);

    Ok(())
}

/// Tests that the projected address is the delivery address.
///
/// Expected: Ok with kim's delivery city, not kim's home city
#[tokio::test]
async fn projects_delivery_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_orders(db).await?;

    let orders = OrderSimpleQueryRepository::new(db)
        .find_simple_orders(&OrderSearch {
            member_name: Some("kim".to_string()),
            order_status: None,
        })
        .await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].member_name, "kim");
    assert_eq!(orders[0].order_status, OrderStatus::Ordered);
    assert_eq!(orders[0].address.city.as_deref(), Some("Seoul"));
    assert_eq!(orders[0].address.zipcode.as_deref(), Some("11111"));

    Ok(())
}
