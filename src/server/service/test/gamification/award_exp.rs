use super::*;

/// Tests a single accepted award.
///
/// Verifies that balance, counter and history are all written.
///
/// Expected: Awarded with the rule's points
#[tokio::test]
async fn awards_points_and_records_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = GamificationConfig::default();

    let user = factory::create_user(db).await?;

    let service = GamificationService::new(db, &config);
    let outcome = service
        .award_exp(user.id, ActivityType::UploadArticle)
        .await?;

    assert_eq!(outcome, AwardOutcome::Awarded { points: 20 });
    assert_eq!(balance(db, user.id).await?, 20);

    let entries = history(db, user.id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].activity_type, "upload_article");
    assert_eq!(entries[0].points, 20);
    assert_eq!(entries[0].description, "Published a new article");

    let day = config.activity_day(entries[0].created_at);
    assert_eq!(counter(db, user.id, ActivityType::UploadArticle, day).await?, 1);

    Ok(())
}

/// Tests the once-per-day AI chat reward.
///
/// A user at 0 EXP chats with the AI: the first award grants 10 EXP, the second on
/// the same day is rejected without touching the balance.
///
/// Expected: Awarded then DailyLimitReached, balance 10, one history entry
#[tokio::test]
async fn caps_chat_ai_at_once_per_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = GamificationConfig::default();

    let user = factory::create_user(db).await?;
    let at = Utc.with_ymd_and_hms(2026, 1, 10, 2, 0, 0).unwrap();

    let service = GamificationService::new(db, &config);
    let first = service.award_exp_at(user.id, ActivityType::ChatAi, at).await?;
    let second = service.award_exp_at(user.id, ActivityType::ChatAi, at).await?;

    assert_eq!(first, AwardOutcome::Awarded { points: 10 });
    assert_eq!(second, AwardOutcome::DailyLimitReached);
    assert_eq!(balance(db, user.id).await?, 10);
    assert_eq!(history(db, user.id).await?.len(), 1);

    Ok(())
}

/// Tests the five-per-day forum comment limit.
///
/// Expected: five awards accepted, the sixth rejected, balance 25
#[tokio::test]
async fn caps_forum_comments_at_five_per_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = GamificationConfig::default();

    let user = factory::create_user(db).await?;
    let at = Utc.with_ymd_and_hms(2026, 1, 10, 4, 0, 0).unwrap();

    let service = GamificationService::new(db, &config);
    let mut outcomes = Vec::new();
    for _ in 0..6 {
        outcomes.push(
            service
                .award_exp_at(user.id, ActivityType::ForumComment, at)
                .await?,
        );
    }

    let awarded = outcomes.iter().filter(|o| o.is_awarded()).count();
    assert_eq!(awarded, 5);
    assert_eq!(outcomes[5], AwardOutcome::DailyLimitReached);
    assert_eq!(balance(db, user.id).await?, 25);

    let day = config.activity_day(at);
    assert_eq!(counter(db, user.id, ActivityType::ForumComment, day).await?, 5);

    Ok(())
}

/// Tests that articles have no daily limit.
///
/// Expected: ten awards accepted, balance 200
#[tokio::test]
async fn never_caps_articles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = GamificationConfig::default();

    let user = factory::create_user(db).await?;

    let service = GamificationService::new(db, &config);
    for _ in 0..10 {
        let outcome = service
            .award_exp(user.id, ActivityType::UploadArticle)
            .await?;
        assert!(outcome.is_awarded());
    }

    assert_eq!(balance(db, user.id).await?, 200);
    assert_eq!(history(db, user.id).await?.len(), 10);

    Ok(())
}

/// Tests that the limit applies per activity type.
///
/// Expected: reaching the chat limit does not block forum comments
#[tokio::test]
async fn limits_are_per_activity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = GamificationConfig::default();

    let user = factory::create_user(db).await?;

    let service = GamificationService::new(db, &config);
    service.award_exp(user.id, ActivityType::ChatAi).await?;
    let capped = service.award_exp(user.id, ActivityType::ChatAi).await?;
    let comment = service
        .award_exp(user.id, ActivityType::ForumComment)
        .await?;

    assert_eq!(capped, AwardOutcome::DailyLimitReached);
    assert_eq!(comment, AwardOutcome::Awarded { points: 5 });
    assert_eq!(balance(db, user.id).await?, 15);

    Ok(())
}

/// Tests awarding a user that does not exist.
///
/// Verifies that nothing is written: no counter row and no history entry.
///
/// Expected: Err(GamificationError::UserNotFound)
#[tokio::test]
async fn rolls_back_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = GamificationConfig::default();

    let at = Utc.with_ymd_and_hms(2026, 1, 10, 4, 0, 0).unwrap();

    let service = GamificationService::new(db, &config);
    let result = service.award_exp_at(999, ActivityType::ChatAi, at).await;

    assert!(matches!(
        result,
        Err(AppError::GamificationErr(GamificationError::UserNotFound(999)))
    ));
    assert!(history(db, 999).await?.is_empty());
    let day = config.activity_day(at);
    assert_eq!(counter(db, 999, ActivityType::ChatAi, day).await?, 0);

    Ok(())
}

/// Tests a failure after the balance and counter writes.
///
/// The history table is missing, so the final insert fails after the balance update
/// and the counter upsert already ran inside the transaction.
///
/// Expected: Err(AppError::DbErr), balance 0 and no counter row
#[tokio::test]
async fn rolls_back_when_history_insert_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::LevelConfig)
        .with_table(entity::prelude::UserActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = GamificationConfig::default();

    let user = factory::create_user(db).await?;
    let at = Utc.with_ymd_and_hms(2026, 1, 10, 4, 0, 0).unwrap();

    let result = GamificationService::new(db, &config)
        .award_exp_at(user.id, ActivityType::ForumComment, at)
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(balance(db, user.id).await?, 0);
    let day = config.activity_day(at);
    assert_eq!(counter(db, user.id, ActivityType::ForumComment, day).await?, 0);

    Ok(())
}

/// Tests injected rules.
///
/// Verifies that the engine reads points and limits from its configuration and rejects
/// activities the configuration does not cover.
///
/// Expected: custom points and limit applied, unconfigured activity rejected
#[tokio::test]
async fn uses_injected_rules() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rules =
        ActivityRules::new().with_rule(ActivityType::ChatAi, ActivityRule::new(3, Some(2)));
    let config = GamificationConfig::with_offset_hours(rules, 0).unwrap();

    let user = factory::create_user(db).await?;

    let service = GamificationService::new(db, &config);
    let outcomes = [
        service.award_exp(user.id, ActivityType::ChatAi).await?,
        service.award_exp(user.id, ActivityType::ChatAi).await?,
        service.award_exp(user.id, ActivityType::ChatAi).await?,
    ];
    let unconfigured = service
        .award_exp(user.id, ActivityType::UploadArticle)
        .await;

    assert_eq!(outcomes[0], AwardOutcome::Awarded { points: 3 });
    assert_eq!(outcomes[1], AwardOutcome::Awarded { points: 3 });
    assert_eq!(outcomes[2], AwardOutcome::DailyLimitReached);
    assert!(matches!(
        unconfigured,
        Err(AppError::GamificationErr(
            GamificationError::UnconfiguredActivity(ActivityType::UploadArticle)
        ))
    ));
    assert_eq!(balance(db, user.id).await?, 6);

    Ok(())
}

/// Tests that the balance always equals the sum of history points.
///
/// Expected: equal after a mix of accepted and rejected awards
#[tokio::test]
async fn keeps_balance_equal_to_history_sum() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = GamificationConfig::default();

    let user = factory::create_user(db).await?;

    let service = GamificationService::new(db, &config);
    for activity in [
        ActivityType::ChatAi,
        ActivityType::ForumComment,
        ActivityType::ChatAi,
        ActivityType::UploadArticle,
        ActivityType::ForumComment,
        ActivityType::ChatAi,
    ] {
        service.award_exp(user.id, activity).await?;
    }

    let total: i64 = history(db, user.id).await?.iter().map(|h| h.points).sum();
    assert_eq!(balance(db, user.id).await?, total);
    assert_eq!(total, 10 + 5 + 20 + 5);

    Ok(())
}
