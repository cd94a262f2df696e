use super::*;

/// Tests that offset and limit count orders, not joined rows.
///
/// Orders with several line items still occupy exactly one slot of the page.
///
/// Expected: Ok with orders 2 and 3 of 4 for offset 1, limit 2
#[tokio::test]
async fn paginates_by_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let mut order_ids = Vec::new();
    for _ in 0..4 {
        let (_, order) = factory::create_order_for_member(db, &member).await?;
        factory::create_order_item(db, order.id).await?;
        factory::create_order_item(db, order.id).await?;
        order_ids.push(order.id);
    }

    let repo = OrderRepository::new(db);
    let page = repo
        .find_page_with_member_delivery(OrderPage {
            offset: 1,
            limit: 2,
        })
        .await?;

    assert_eq!(
        page.iter().map(|g| g.order.id).collect::<Vec<_>>(),
        order_ids[1..3].to_vec()
    );
    assert!(page.iter().all(|g| g.member.id == member.id));

    Ok(())
}

/// Tests an offset past the last order.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_orders(db).await?;

    let repo = OrderRepository::new(db);
    let page = repo
        .find_page_with_member_delivery(OrderPage {
            offset: 10,
            limit: 100,
        })
        .await?;

    assert!(page.is_empty());

    Ok(())
}
