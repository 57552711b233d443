use super::*;

/// Tests deleting an existing region.
///
/// Verifies that the deleted region is returned and no longer retrievable.
///
/// Expected: Ok(Some(Region)), then get_by_id returns None
#[tokio::test]
async fn deletes_and_returns_region() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_region(db).await?;

    let repo = RegionRepository::new(db);
    let deleted = repo.delete(created.id).await?.unwrap();

    assert_eq!(deleted.id, created.id);
    assert_eq!(deleted.name, created.name);
    assert!(repo.get_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a region removes its walks.
///
/// Verifies the cascading foreign key from walks to regions.
///
/// Expected: walk count drops to zero
#[tokio::test]
async fn cascades_to_walks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (region, _difficulty, _walk) =
        factory::helpers::create_walk_with_dependencies(db).await?;

    RegionRepository::new(db).delete(region.id).await?;

    assert_eq!(entity::prelude::Walk::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a nonexistent region.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_region() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RegionRepository::new(db).delete(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
