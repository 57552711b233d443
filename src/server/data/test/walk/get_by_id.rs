use super::*;

/// Tests getting an existing walk by id.
///
/// Expected: Ok(Some(Walk)) with its region and difficulty
#[tokio::test]
async fn gets_walk_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (region, difficulty, walk) = factory::helpers::create_walk_with_dependencies(db).await?;

    let found = WalkRepository::new(db).get_by_id(walk.id).await?.unwrap();

    assert_eq!(found.name, walk.name);
    assert_eq!(found.region.code, region.code);
    assert_eq!(found.difficulty.name, difficulty.name);

    Ok(())
}

/// Tests getting a nonexistent walk by id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_walk() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = WalkRepository::new(db).get_by_id(Uuid::new_v4()).await?;

    assert!(found.is_none());

    Ok(())
}
