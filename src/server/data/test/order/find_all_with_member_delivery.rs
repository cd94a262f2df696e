use super::*;

/// Tests that the join-fetch query rebuilds the same graph as per-entity loading.
///
/// Member and delivery share column names (`id`, `city`, ...) with each other and
/// with orders, so this also checks that prefixed aliases keep them apart.
///
/// Expected: Ok with graphs equal to the separately loaded rows
#[tokio::test]
async fn join_fetches_member_and_delivery() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_orders(db).await?;

    let repo = OrderRepository::new(db);
    let graphs = repo
        .find_all_with_member_delivery(&OrderSearch::default())
        .await?;

    assert_eq!(graphs.len(), 2);
    for graph in &graphs {
        assert_eq!(repo.find_member(&graph.order).await?.as_ref(), Some(&graph.member));
        assert_eq!(
            repo.find_delivery(&graph.order).await?.as_ref(),
            Some(&graph.delivery)
        );
    }
    assert_eq!(graphs[0].member.name, "kim");
    assert_eq!(graphs[0].delivery.city.as_deref(), Some("Seoul"));
    assert_eq!(graphs[1].member.name, "lee");
    assert_eq!(graphs[1].delivery.city.as_deref(), Some("Busan"));

    Ok(())
}

/// Tests both filters on the join-fetch query.
///
/// Expected: Ok with only orders matching name and status
#[tokio::test]
async fn applies_search_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (kim_order, _) = seed_two_orders(db).await?;

    let repo = OrderRepository::new(db);
    let matching = repo
        .find_all_with_member_delivery(&OrderSearch {
            member_name: Some("kim".to_string()),
            order_status: Some(OrderStatus::Ordered),
        })
        .await?;
    let none = repo
        .find_all_with_member_delivery(&OrderSearch {
            member_name: Some("kim".to_string()),
            order_status: Some(OrderStatus::Canceled),
        })
        .await?;

    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].order, kim_order);
    assert!(none.is_empty());

    Ok(())
}
