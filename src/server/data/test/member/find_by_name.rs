use super::*;

/// Tests exact name lookup.
///
/// Expected: Ok with only the member whose name matches exactly
#[tokio::test]
async fn finds_member_by_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kim = factory::create_member_with_name(db, "kim").await?;
    factory::create_member_with_name(db, "kimchi").await?;

    let repo = MemberRepository::new(db);
    let members = repo.find_by_name("kim").await?;

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, kim.id);

    Ok(())
}

/// Tests lookup of a name nobody has.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member_with_name(db, "kim").await?;

    let repo = MemberRepository::new(db);

    assert!(repo.find_by_name("park").await?.is_empty());

    Ok(())
}
