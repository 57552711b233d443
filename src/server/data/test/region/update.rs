use super::*;

/// Tests updating an existing region.
///
/// Verifies that code, name and image URL are all overwritten while the id stays.
///
/// Expected: Ok(Some(Region)) with new values
#[tokio::test]
async fn overwrites_all_mutable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::region::RegionFactory::new(db)
        .region_image_url(Some("https://example.com/old.jpg".to_string()))
        .build()
        .await?;

    let repo = RegionRepository::new(db);
    let updated = repo
        .update(UpdateRegionParam {
            id: created.id,
            code: "AR".to_string(),
            name: "Arunachal Pradesh".to_string(),
            region_image_url: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.code, "AR");
    assert_eq!(updated.name, "Arunachal Pradesh");
    assert!(updated.region_image_url.is_none());

    assert_eq!(repo.get_by_id(created.id).await?, Some(updated));

    Ok(())
}

/// Tests updating a nonexistent region.
///
/// Verifies that no row is inserted as a side effect.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_region() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RegionRepository::new(db)
        .update(UpdateRegionParam {
            id: Uuid::new_v4(),
            code: "XX".to_string(),
            name: "Nowhere".to_string(),
            region_image_url: None,
        })
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Region::find().count(db).await?, 0);

    Ok(())
}
