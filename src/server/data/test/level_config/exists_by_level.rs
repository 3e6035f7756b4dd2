use super::*;

/// Tests detecting a taken level number.
///
/// Expected: true for a stored level, false for a free one
#[tokio::test]
async fn detects_existing_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_level(db, 2, 100).await?;

    let repo = LevelConfigRepository::new(db);

    assert!(repo.exists_by_level(2, None).await?);
    assert!(!repo.exists_by_level(3, None).await?);

    Ok(())
}

/// Tests excluding the row being updated.
///
/// Expected: false when the only match is the excluded row
#[tokio::test]
async fn ignores_excluded_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_level(db, 2, 100).await?;

    let repo = LevelConfigRepository::new(db);

    assert!(!repo.exists_by_level(2, Some(created.id)).await?);

    Ok(())
}
