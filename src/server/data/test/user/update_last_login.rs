use super::*;

/// Tests recording a login.
///
/// Expected: Ok(User) with last_login_at set and other fields untouched
#[tokio::test]
async fn sets_last_login_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let at = Utc::now();

    let user = UserRepository::new(db)
        .update_last_login(created.id, at)
        .await?;

    let stored = user.last_login_at.unwrap();
    assert_eq!(stored.timestamp_millis(), at.timestamp_millis());
    assert_eq!(user.email, created.email);
    assert_eq!(user.password_hash, created.password_hash);

    Ok(())
}

/// Tests recording a login for a nonexistent user.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update_last_login(Uuid::new_v4(), Utc::now())
        .await;

    assert!(result.is_err());

    Ok(())
}
