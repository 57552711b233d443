use super::*;

/// Tests deleting an existing walk.
///
/// Verifies the deleted walk is returned with its relations and the region survives.
///
/// Expected: Ok(Some(Walk)), then get_by_id returns None
#[tokio::test]
async fn deletes_and_returns_walk() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (region, _difficulty, walk) = factory::helpers::create_walk_with_dependencies(db).await?;

    let repo = WalkRepository::new(db);
    let deleted = repo.delete(walk.id).await?.unwrap();

    assert_eq!(deleted.id, walk.id);
    assert_eq!(deleted.region.id, region.id);
    assert!(repo.get_by_id(walk.id).await?.is_none());

    let region_repo = crate::server::data::region::RegionRepository::new(db);
    assert!(region_repo.get_by_id(region.id).await?.is_some());

    Ok(())
}

/// Tests deleting a nonexistent walk.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_walk() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = WalkRepository::new(db).delete(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
