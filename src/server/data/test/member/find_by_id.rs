use super::*;

/// Tests finding an existing member.
///
/// Expected: Ok(Some) with name and address copied from the row
#[tokio::test]
async fn finds_existing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .name("kim")
        .address("Seoul", "Street 1", "11111")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let member = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(member.id, created.id);
    assert_eq!(member.name, "kim");
    assert_eq!(member.address, Address::new("Seoul", "Street 1", "11111"));

    Ok(())
}

/// Tests finding a member id that was never assigned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}

/// Tests listing every member.
///
/// Expected: Ok with members in id order and a matching count
#[tokio::test]
async fn lists_all_members_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_member_with_name(db, "kim").await?;
    let second = factory::create_member_with_name(db, "lee").await?;

    let repo = MemberRepository::new(db);
    let members = repo.find_all().await?;
    let entities = repo.find_all_entities().await?;

    assert_eq!(
        members.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
    assert_eq!(entities, vec![first, second]);
    assert_eq!(repo.count().await?, 2);

    Ok(())
}
