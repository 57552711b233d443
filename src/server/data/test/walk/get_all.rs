use super::*;
use sea_orm::DatabaseConnection;
use test_utils::factory::walk::WalkFactory;

/// Creates walks named `names` with the given lengths in one shared region.
async fn create_walks(db: &DatabaseConnection, walks: &[(&str, f64)]) -> Result<(), DbErr> {
    let region = factory::create_region(db).await?;
    let difficulty = factory::create_difficulty(db).await?;

    for (name, length) in walks {
        WalkFactory::new(db)
            .region_id(region.id)
            .difficulty_id(difficulty.id)
            .name(*name)
            .description(format!("{} description", name))
            .length_in_km(*length)
            .build()
            .await?;
    }

    Ok(())
}

/// Tests listing walks without any query options.
///
/// Verifies that every walk is returned joined with its region and difficulty.
///
/// Expected: Ok(Vec) with relations populated
#[tokio::test]
async fn returns_all_walks_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (region, difficulty, walk) = factory::helpers::create_walk_with_dependencies(db).await?;

    let walks = WalkRepository::new(db).get_all(WalkQuery::default()).await?;

    assert_eq!(walks.len(), 1);
    assert_eq!(walks[0].id, walk.id);
    assert_eq!(walks[0].region.id, region.id);
    assert_eq!(walks[0].region.name, region.name);
    assert_eq!(walks[0].difficulty.id, difficulty.id);

    Ok(())
}

/// Tests listing walks when the table is empty.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_without_walks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let walks = WalkRepository::new(db).get_all(WalkQuery::default()).await?;

    assert!(walks.is_empty());

    Ok(())
}

/// Tests filtering walks by name.
///
/// Verifies that the substring match ignores letter case.
///
/// Expected: Ok(Vec) with only matching walks
#[tokio::test]
async fn filters_by_name_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_walks(db, &[("Triund Trek", 9.0), ("Hampta Pass", 26.0), ("Kheerganga TREK", 12.0)])
        .await?;

    let walks = WalkRepository::new(db)
        .get_all(WalkQuery {
            filter: Some(WalkFilter {
                field: FilterField::Name,
                query: "trek".to_string(),
            }),
            ..Default::default()
        })
        .await?;

    let mut names: Vec<String> = walks.into_iter().map(|w| w.name).collect();
    names.sort();
    assert_eq!(names, vec!["Kheerganga TREK", "Triund Trek"]);

    Ok(())
}

/// Tests filtering on text containing LIKE metacharacters.
///
/// Verifies that `_` and `%` in the query match themselves, not any character.
///
/// Expected: Ok(Vec) with only the walk containing the literal character
#[tokio::test]
async fn filter_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_walks(db, &[("Triund", 9.0), ("Har_ki_dun", 27.0), ("50% Trail", 5.0)]).await?;

    let repo = WalkRepository::new(db);
    let by_name = |text: &str| WalkQuery {
        filter: Some(WalkFilter {
            field: FilterField::Name,
            query: text.to_string(),
        }),
        ..Default::default()
    };

    let names = |walks: Vec<crate::server::model::walk::Walk>| -> Vec<String> {
        walks.into_iter().map(|w| w.name).collect()
    };

    assert_eq!(names(repo.get_all(by_name("_")).await?), vec!["Har_ki_dun"]);
    assert_eq!(names(repo.get_all(by_name("%")).await?), vec!["50% Trail"]);
    assert!(repo.get_all(by_name("\\")).await?.is_empty());

    Ok(())
}

/// Tests filtering on a non-ASCII letter.
///
/// Expected: Ok(Vec) containing the walk whose name has the same letter
#[tokio::test]
async fn filter_matches_non_ascii_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_walks(db, &[("Éco Trail", 4.0), ("Triund", 9.0)]).await?;

    let walks = WalkRepository::new(db)
        .get_all(WalkQuery {
            filter: Some(WalkFilter {
                field: FilterField::Name,
                query: "É".to_string(),
            }),
            ..Default::default()
        })
        .await?;

    assert_eq!(walks.len(), 1);
    assert_eq!(walks[0].name, "Éco Trail");

    Ok(())
}

/// Tests filtering walks by description.
///
/// Expected: Ok(Vec) with the single walk whose description matches
#[tokio::test]
async fn filters_by_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_walks(db, &[("Triund Trek", 9.0), ("Hampta Pass", 26.0)]).await?;

    let walks = WalkRepository::new(db)
        .get_all(WalkQuery {
            filter: Some(WalkFilter {
                field: FilterField::Description,
                query: "hampta".to_string(),
            }),
            ..Default::default()
        })
        .await?;

    assert_eq!(walks.len(), 1);
    assert_eq!(walks[0].name, "Hampta Pass");

    Ok(())
}

/// Tests sorting walks by length in both directions.
///
/// Expected: Ok(Vec) ordered by length ascending, then descending
#[tokio::test]
async fn sorts_by_length() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_walks(db, &[("Medium", 12.0), ("Short", 3.5), ("Long", 26.0)]).await?;

    let repo = WalkRepository::new(db);
    let query = |ascending| WalkQuery {
        sort: Some(WalkSort {
            field: SortField::Length,
            ascending,
        }),
        ..Default::default()
    };

    let ascending: Vec<f64> = repo
        .get_all(query(true))
        .await?
        .into_iter()
        .map(|w| w.length_in_km)
        .collect();
    let descending: Vec<f64> = repo
        .get_all(query(false))
        .await?
        .into_iter()
        .map(|w| w.length_in_km)
        .collect();

    assert_eq!(ascending, vec![3.5, 12.0, 26.0]);
    assert_eq!(descending, vec![26.0, 12.0, 3.5]);

    Ok(())
}

/// Tests sorting walks by name.
///
/// Expected: Ok(Vec) in alphabetical order
#[tokio::test]
async fn sorts_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_walks(db, &[("Chadar", 60.0), ("Annapurna", 100.0), ("Bhrigu Lake", 25.0)]).await?;

    let names: Vec<String> = WalkRepository::new(db)
        .get_all(WalkQuery {
            sort: Some(WalkSort {
                field: SortField::Name,
                ascending: true,
            }),
            ..Default::default()
        })
        .await?
        .into_iter()
        .map(|w| w.name)
        .collect();

    assert_eq!(names, vec!["Annapurna", "Bhrigu Lake", "Chadar"]);

    Ok(())
}

/// Tests paginating sorted walks.
///
/// Verifies that page `n` skips `(n - 1) * size` rows and the last page may be short.
///
/// Expected: Ok(Vec) with the requested slice
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_walks(
        db,
        &[("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 4.0), ("E", 5.0)],
    )
    .await?;

    let repo = WalkRepository::new(db);
    let page = |page_number| WalkQuery {
        sort: Some(WalkSort {
            field: SortField::Name,
            ascending: true,
        }),
        page_number,
        page_size: 2,
        ..Default::default()
    };

    let names = |walks: Vec<crate::server::model::walk::Walk>| -> Vec<String> {
        walks.into_iter().map(|w| w.name).collect()
    };

    assert_eq!(names(repo.get_all(page(1)).await?), vec!["A", "B"]);
    assert_eq!(names(repo.get_all(page(2)).await?), vec!["C", "D"]);
    assert_eq!(names(repo.get_all(page(3)).await?), vec!["E"]);
    assert!(repo.get_all(page(4)).await?.is_empty());

    Ok(())
}

/// Tests a page number whose row offset overflows.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn out_of_range_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trail_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_walks(db, &[("A", 1.0)]).await?;

    let walks = WalkRepository::new(db)
        .get_all(WalkQuery {
            page_number: u64::MAX,
            ..Default::default()
        })
        .await?;

    assert!(walks.is_empty());

    Ok(())
}
