use super::*;

/// Tests seeding an empty table.
///
/// Expected: Ok(true) and the eight default levels stored
#[tokio::test]
async fn seeds_empty_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LevelService::new(db);
    let seeded = service.seed_defaults().await?;

    assert!(seeded);
    let table = service.get_table().await?;
    assert_eq!(table.levels().len(), 8);
    assert!(table.validate().is_ok());

    Ok(())
}

/// Tests that an existing configuration is left alone.
///
/// Expected: Ok(false) and the existing row untouched
#[tokio::test]
async fn skips_configured_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_level(db, 1, 0).await?;

    let service = LevelService::new(db);
    let seeded = service.seed_defaults().await?;

    assert!(!seeded);
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}
