use super::*;

/// Tests listing the seeded difficulties.
///
/// Verifies that migrations insert Easy, Medium and Hard with their static ids.
///
/// Expected: Ok(Vec) of three difficulties in seeded order
#[tokio::test]
async fn returns_seeded_difficulties_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let difficulties = DifficultyRepository::new(db).get_all().await?;

    let names: Vec<&str> = difficulties.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Easy", "Medium", "Hard"]);
    assert_eq!(difficulties[0].id, migration::EASY_ID);
    assert_eq!(difficulties[1].id, migration::MEDIUM_ID);
    assert_eq!(difficulties[2].id, migration::HARD_ID);

    Ok(())
}
