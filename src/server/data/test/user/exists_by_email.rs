use super::*;

/// Tests the existence check for registered and unregistered emails.
///
/// Expected: true for the registered email in any case, false otherwise
#[tokio::test]
async fn checks_existence_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.exists_by_email("TAKEN@example.com").await?);
    assert!(!repo.exists_by_email("free@example.com").await?);

    Ok(())
}
