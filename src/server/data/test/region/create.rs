use super::*;

/// Tests creating a region.
///
/// Verifies that the repository assigns a new id and stores every field.
///
/// Expected: Ok(Region) retrievable by its id
#[tokio::test]
async fn creates_region_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegionRepository::new(db);
    let region = repo
        .create(CreateRegionParam {
            code: "SK".to_string(),
            name: "Sikkim".to_string(),
            region_image_url: Some("https://example.com/sk.jpg".to_string()),
        })
        .await?;

    assert_ne!(region.id, Uuid::nil());
    assert_eq!(region.code, "SK");
    assert_eq!(region.name, "Sikkim");

    let stored = repo.get_by_id(region.id).await?;
    assert_eq!(stored, Some(region));

    Ok(())
}

/// Tests creating two regions with identical fields.
///
/// Verifies that ids are generated server-side and never collide.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn creates_distinct_ids_for_identical_regions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegionRepository::new(db);
    let param = CreateRegionParam {
        code: "GA".to_string(),
        name: "Goa".to_string(),
        region_image_url: None,
    };

    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
