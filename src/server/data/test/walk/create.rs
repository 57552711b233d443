use super::*;

/// Tests creating a walk in an existing region with an existing difficulty.
///
/// Expected: Ok(Walk) with generated id and relations
#[tokio::test]
async fn creates_walk_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::create_region(db).await?;
    let difficulty = factory::create_difficulty(db).await?;

    let walk = WalkRepository::new(db)
        .create(CreateWalkParam {
            name: "Kedarkantha".to_string(),
            description: "Winter summit trek".to_string(),
            length_in_km: 20.0,
            walk_image_url: None,
            region_id: region.id,
            difficulty_id: difficulty.id,
        })
        .await?;

    assert_ne!(walk.id, Uuid::nil());
    assert_eq!(walk.name, "Kedarkantha");
    assert_eq!(walk.length_in_km, 20.0);
    assert_eq!(walk.region.id, region.id);
    assert_eq!(walk.difficulty.id, difficulty.id);

    Ok(())
}

/// Tests creating a walk that references an unknown region.
///
/// Verifies that the foreign key rejects the insert.
///
/// Expected: Err(DbErr) classified as a foreign key violation
#[tokio::test]
async fn fails_for_unknown_region() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let difficulty = factory::create_difficulty(db).await?;

    let result = WalkRepository::new(db)
        .create(CreateWalkParam {
            name: "Ghost Walk".to_string(),
            description: "Nowhere".to_string(),
            length_in_km: 1.0,
            walk_image_url: None,
            region_id: Uuid::new_v4(),
            difficulty_id: difficulty.id,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
