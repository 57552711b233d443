use super::*;

/// Tests updating every mutable field of a walk, including moving it to another region.
///
/// Expected: Ok(Some(Walk)) with new values and the new region
#[tokio::test]
async fn overwrites_all_mutable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_region, _difficulty, walk) = factory::helpers::create_walk_with_dependencies(db).await?;
    let new_region = factory::create_region(db).await?;
    let new_difficulty = factory::create_difficulty(db).await?;

    let updated = WalkRepository::new(db)
        .update(UpdateWalkParam {
            id: walk.id,
            name: "Renamed".to_string(),
            description: "Rewritten".to_string(),
            length_in_km: 42.5,
            walk_image_url: Some("https://example.com/w.jpg".to_string()),
            region_id: new_region.id,
            difficulty_id: new_difficulty.id,
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, walk.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, "Rewritten");
    assert_eq!(updated.length_in_km, 42.5);
    assert_eq!(updated.walk_image_url.as_deref(), Some("https://example.com/w.jpg"));
    assert_eq!(updated.region.id, new_region.id);
    assert_eq!(updated.difficulty.id, new_difficulty.id);

    Ok(())
}

/// Tests updating a nonexistent walk.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_walk() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::create_region(db).await?;
    let difficulty = factory::create_difficulty(db).await?;

    let result = WalkRepository::new(db)
        .update(UpdateWalkParam {
            id: Uuid::new_v4(),
            name: "Missing".to_string(),
            description: "Missing".to_string(),
            length_in_km: 1.0,
            walk_image_url: None,
            region_id: region.id,
            difficulty_id: difficulty.id,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
