use super::*;

/// Tests batch loading line items for several orders.
///
/// Expected: Ok with items grouped per order in insertion order, and no entry for
/// an order without items
#[tokio::test]
async fn groups_items_by_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (kim_order, lee_order) = seed_two_orders(db).await?;
    factory::order_item::OrderItemFactory::new(db, kim_order.id)
        .item_name("JPA1 BOOK")
        .order_price(10000)
        .count(1)
        .build()
        .await?;
    factory::order_item::OrderItemFactory::new(db, kim_order.id)
        .item_name("JPA2 BOOK")
        .order_price(20000)
        .count(2)
        .build()
        .await?;

    let repo = OrderItemRepository::new(db);
    let items = repo
        .find_by_order_ids(&[kim_order.id, lee_order.id])
        .await?;

    let kim_items = &items[&kim_order.id];
    assert_eq!(kim_items.len(), 2);
    assert_eq!(kim_items[0].item_name, "JPA1 BOOK");
    assert_eq!(kim_items[1].item_name, "JPA2 BOOK");
    assert_eq!(kim_items[1].order_price, 20000);
    assert_eq!(kim_items[1].count, 2);
    assert!(!items.contains_key(&lee_order.id));

    Ok(())
}

/// Tests that items of orders outside the requested ids are excluded.
///
/// Expected: Ok with only the requested order's items
#[tokio::test]
async fn ignores_orders_not_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (kim_order, lee_order) = seed_two_orders(db).await?;
    factory::create_order_item(db, kim_order.id).await?;
    factory::create_order_item(db, lee_order.id).await?;

    let repo = OrderItemRepository::new(db);
    let items = repo.find_by_order_ids(&[lee_order.id]).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[&lee_order.id].len(), 1);

    Ok(())
}

/// Tests an empty id list.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderItemRepository::new(db);

    assert!(repo.find_by_order_ids(&[]).await?.is_empty());

    Ok(())
}
