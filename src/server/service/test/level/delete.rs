use super::*;

/// Tests deleting the top level.
///
/// Expected: Ok and seven levels left
#[tokio::test]
async fn deletes_top_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let levels = factory::create_default_levels(db).await?;

    let service = LevelService::new(db);
    service.delete(levels[7].id).await?;

    assert_eq!(service.get_all().await?.len(), 7);

    Ok(())
}

/// Tests deleting level 1.
///
/// Expected: Err(LevelTableError::MissingBaseLevel) and level 1 kept
#[tokio::test]
async fn refuses_to_delete_base_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let levels = factory::create_default_levels(db).await?;

    let service = LevelService::new(db);
    let result = service.delete(levels[0].id).await;

    assert!(matches!(
        result,
        Err(AppError::LevelErr(LevelTableError::MissingBaseLevel))
    ));
    assert_eq!(service.get_all().await?.len(), 8);

    Ok(())
}

/// Tests deleting a missing ID.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LevelService::new(db);
    let result = service.delete(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
