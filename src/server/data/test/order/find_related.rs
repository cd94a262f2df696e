use super::*;

/// Tests loading the member and delivery of an order one relation at a time.
///
/// Expected: Ok(Some) for both, matching the rows the order references
#[tokio::test]
async fn loads_member_and_delivery_of_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, delivery, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);

    assert_eq!(repo.find_member(&order).await?, Some(member));
    assert_eq!(repo.find_delivery(&order).await?, Some(delivery));

    Ok(())
}
