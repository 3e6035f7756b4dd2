use super::*;

/// Tests that levels are returned in level order regardless of insertion order.
///
/// Expected: ascending level numbers
#[tokio::test]
async fn orders_by_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_level(db, 3, 300).await?;
    factory::create_level(db, 1, 0).await?;
    factory::create_level(db, 2, 100).await?;

    let repo = LevelConfigRepository::new(db);
    let levels = repo.get_all().await?;

    let numbers: Vec<_> = levels.iter().map(|l| l.level).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    Ok(())
}

/// Tests reading a single level by ID.
///
/// Expected: Some for an existing ID, None otherwise
#[tokio::test]
async fn gets_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::level_config::LevelConfigFactory::new(db, 2, 100)
        .badge_name("Explorer")
        .build()
        .await?;

    let repo = LevelConfigRepository::new(db);

    let found = repo.get_by_id(created.id).await?;
    assert_eq!(found.map(|l| l.badge_name), Some("Explorer".to_string()));
    assert!(repo.get_by_id(created.id + 100).await?.is_none());

    Ok(())
}
