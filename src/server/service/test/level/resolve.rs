use super::*;

/// Tests resolving against the stored standard table.
///
/// Expected: 150 EXP is level 2 with 150 EXP to level 3
#[tokio::test]
async fn resolves_against_stored_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_levels(db).await?;

    let view = LevelService::new(db).resolve(150).await?;

    assert_eq!(view.current.level, 2);
    assert_eq!(view.next.as_ref().map(|l| l.level), Some(3));
    assert_eq!(view.exp_to_next_level(150), Some(150));
    assert!(!view.is_default);

    Ok(())
}

/// Tests resolving without any configuration.
///
/// Expected: the built-in level 1 flagged as default, no next level
#[tokio::test]
async fn falls_back_without_configuration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let view = LevelService::new(db).resolve(500).await?;

    assert_eq!(view.current.level, 1);
    assert!(view.is_default);
    assert!(view.next.is_none());

    Ok(())
}
