use super::*;

/// Tests creating a member with an address.
///
/// Expected: Ok with a generated id and every field persisted
#[tokio::test]
async fn creates_member_with_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParam {
            name: "kim".to_string(),
            address: Address::new("Seoul", "Street 1", "11111"),
        })
        .await?;

    assert!(member.id > 0);
    assert_eq!(member.name, "kim");
    assert_eq!(member.address, Address::new("Seoul", "Street 1", "11111"));

    let stored = entity::prelude::Member::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "kim");
    assert_eq!(stored.city.as_deref(), Some("Seoul"));

    Ok(())
}

/// Tests creating a member without an address.
///
/// Expected: Ok with every address column NULL
#[tokio::test]
async fn creates_member_without_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParam {
            name: "lee".to_string(),
            address: Address::default(),
        })
        .await?;

    assert_eq!(member.address, Address::default());

    Ok(())
}

/// Tests the unique index on member name.
///
/// Inserting a second member with an existing name must fail at the storage layer
/// even though the repository itself performs no lookup.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name_with_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member_with_name(db, "kim").await?;

    let repo = MemberRepository::new(db);
    let result = repo
        .create(CreateMemberParam {
            name: "kim".to_string(),
            address: Address::default(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
