use super::*;

fn param(email: &str) -> CreateUserParam {
    CreateUserParam {
        username: "hiker".to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$hash".to_string(),
    }
}

/// Tests creating a user.
///
/// Verifies that the email is stored as submitted and a creation time is set.
///
/// Expected: Ok(User) without a last login time
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let user = UserRepository::new(db).create(param("Hiker@Example.com")).await?;

    assert_eq!(user.email, "Hiker@Example.com");
    assert_eq!(user.username, "hiker");
    assert!(user.created_at.timestamp() >= before.timestamp());
    assert!(user.last_login_at.is_none());

    Ok(())
}

/// Tests creating a second user whose email differs only in letter case.
///
/// Verifies that the unique index on the normalized email rejects the insert.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("hiker@example.com")).await?;

    let err = repo.create(param("HIKER@example.com")).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
