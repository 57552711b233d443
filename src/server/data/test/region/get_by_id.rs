use super::*;

/// Tests getting an existing region by id.
///
/// Expected: Ok(Some(Region))
#[tokio::test]
async fn gets_existing_region() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::region::RegionFactory::new(db)
        .code("KL")
        .name("Kerala")
        .build()
        .await?;

    let region = RegionRepository::new(db).get_by_id(created.id).await?;

    let region = region.unwrap();
    assert_eq!(region.id, created.id);
    assert_eq!(region.code, "KL");

    Ok(())
}

/// Tests getting a nonexistent region by id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_region() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let region = RegionRepository::new(db).get_by_id(Uuid::new_v4()).await?;

    assert!(region.is_none());

    Ok(())
}
