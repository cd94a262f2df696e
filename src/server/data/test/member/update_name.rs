use super::*;

/// Tests renaming an existing member.
///
/// Expected: Ok(Some) with the same id, the new name, and the address untouched
#[tokio::test]
async fn renames_member_keeping_id_and_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kim = factory::member::MemberFactory::new(db)
        .name("kim")
        .address("Seoul", "Street 1", "11111")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let updated = repo.update_name(kim.id, "park".to_string()).await?.unwrap();

    assert_eq!(updated.id, kim.id);
    assert_eq!(updated.name, "park");
    assert_eq!(updated.address, Address::new("Seoul", "Street 1", "11111"));

    let stored = entity::prelude::Member::find_by_id(kim.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "park");

    Ok(())
}

/// Tests renaming a member that does not exist.
///
/// Expected: Ok(None) and no row written
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);

    assert!(repo.update_name(42, "park".to_string()).await?.is_none());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests renaming onto a name another member already holds.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn rejects_rename_to_taken_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member_with_name(db, "kim").await?;
    let lee = factory::create_member_with_name(db, "lee").await?;

    let repo = MemberRepository::new(db);
    let err = repo
        .update_name(lee.id, "kim".to_string())
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
