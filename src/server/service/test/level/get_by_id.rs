use super::*;

/// Tests fetching a stored level configuration.
///
/// Expected: Ok(LevelConfig) with the stored badge
#[tokio::test]
async fn returns_level_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let levels = factory::create_default_levels(db).await?;

    let config = LevelService::new(db).get_by_id(levels[2].id).await?;

    assert_eq!(config.level, 3);
    assert_eq!(config.min_exp, 300);
    assert_eq!(config.badge_name, "Learner");

    Ok(())
}

/// Tests fetching an unknown ID.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LevelService::new(db).get_by_id(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
