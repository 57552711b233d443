use super::*;

/// Tests listing regions when none exist.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_without_regions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let regions = RegionRepository::new(db).get_all().await?;

    assert!(regions.is_empty());

    Ok(())
}

/// Tests listing regions ordered by name.
///
/// Expected: Ok(Vec) sorted alphabetically by name
#[tokio::test]
async fn returns_regions_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::region::RegionFactory::new(db).name("Sikkim").build().await?;
    factory::region::RegionFactory::new(db).name("Goa").build().await?;
    factory::region::RegionFactory::new(db).name("Kerala").build().await?;

    let names: Vec<String> = RegionRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|r| r.name)
        .collect();

    assert_eq!(names, vec!["Goa", "Kerala", "Sikkim"]);

    Ok(())
}

/// Tests listing the regions seeded by migrations.
///
/// Verifies that a freshly migrated database already holds the seven regions.
///
/// Expected: Ok(Vec) with 7 regions including Ladakh
#[tokio::test]
async fn returns_seeded_regions_after_migration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let regions = RegionRepository::new(db).get_all().await?;

    assert_eq!(regions.len(), 7);
    assert!(regions.iter().any(|r| r.code == "LD" && r.name == "Ladakh"));

    Ok(())
}
