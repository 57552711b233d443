use super::*;

/// Tests finding a user with an email in different letter case.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_user_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("Walker@Example.com")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_email("walker@EXAMPLE.com")
        .await?
        .unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.email, "Walker@Example.com");

    Ok(())
}

/// Tests finding a user by an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let found = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
