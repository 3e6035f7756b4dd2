use super::*;

/// Tests ranking and level resolution.
///
/// Expected: ranks from 1 in EXP order with each user's level badge
#[tokio::test]
async fn ranks_users_with_levels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_levels(db).await?;
    factory::user::UserFactory::new(db).name("Ayu").exp(150).build().await?;
    factory::user::UserFactory::new(db).name("Bima").exp(1600).build().await?;
    factory::user::UserFactory::new(db).name("Citra").exp(20).build().await?;

    let entries = UserService::new(db).get_leaderboard(10).await?;
    let entries: Vec<_> = entries.into_iter().map(|e| e.into_dto()).collect();

    assert_eq!(entries.len(), 3);
    assert_eq!((entries[0].rank, entries[0].name.as_str()), (1, "Bima"));
    assert_eq!(entries[0].badge_name, "Expert");
    assert_eq!((entries[1].rank, entries[1].level), (2, 2));
    assert_eq!((entries[2].rank, entries[2].level), (3, 1));

    Ok(())
}

/// Tests limit clamping.
///
/// Expected: a limit of 0 returns one entry
#[tokio::test]
async fn clamps_limit_to_at_least_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    let entries = UserService::new(db).get_leaderboard(0).await?;

    assert_eq!(entries.len(), 1);

    Ok(())
}

/// Tests the leaderboard without level configuration.
///
/// Expected: every user shown with the default level 1 badge
#[tokio::test]
async fn uses_fallback_level_without_configuration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).exp(900).build().await?;

    let entries = UserService::new(db).get_leaderboard(10).await?;

    assert_eq!(entries[0].level.level, 1);
    assert_eq!(entries[0].level.badge_name, "Beginner");

    Ok(())
}
