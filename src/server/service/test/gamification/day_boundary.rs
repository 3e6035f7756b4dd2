use super::*;

/// Tests that the AI chat limit resets on the next activity day.
///
/// Expected: one award on each day
#[tokio::test]
async fn resets_limit_on_next_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = GamificationConfig::default();

    let user = factory::create_user(db).await?;
    let today = Utc.with_ymd_and_hms(2026, 1, 10, 3, 0, 0).unwrap();
    let tomorrow = Utc.with_ymd_and_hms(2026, 1, 11, 3, 0, 0).unwrap();

    let service = GamificationService::new(db, &config);
    let first = service.award_exp_at(user.id, ActivityType::ChatAi, today).await?;
    let capped = service.award_exp_at(user.id, ActivityType::ChatAi, today).await?;
    let next_day = service
        .award_exp_at(user.id, ActivityType::ChatAi, tomorrow)
        .await?;

    assert!(first.is_awarded());
    assert_eq!(capped, AwardOutcome::DailyLimitReached);
    assert!(next_day.is_awarded());
    assert_eq!(balance(db, user.id).await?, 20);

    Ok(())
}

/// Tests the day boundary of the default UTC+7 policy.
///
/// 16:59:59 UTC is still 23:59:59 local time; one second later the local date rolls
/// over, so both awards are accepted.
///
/// Expected: both awards accepted on different counter days
#[tokio::test]
async fn splits_days_at_local_midnight() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = GamificationConfig::default();

    let user = factory::create_user(db).await?;
    let before = Utc.with_ymd_and_hms(2026, 1, 10, 16, 59, 59).unwrap();
    let after = Utc.with_ymd_and_hms(2026, 1, 10, 17, 0, 0).unwrap();

    let service = GamificationService::new(db, &config);
    let first = service.award_exp_at(user.id, ActivityType::ChatAi, before).await?;
    let second = service.award_exp_at(user.id, ActivityType::ChatAi, after).await?;

    assert!(first.is_awarded());
    assert!(second.is_awarded());

    let jan_10 = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
    let jan_11 = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
    assert_eq!(counter(db, user.id, ActivityType::ChatAi, jan_10).await?, 1);
    assert_eq!(counter(db, user.id, ActivityType::ChatAi, jan_11).await?, 1);

    Ok(())
}

/// Tests that awards on either side of UTC midnight share a day under UTC+7.
///
/// 23:00 UTC and 01:00 UTC the next morning are both on the same local date.
///
/// Expected: the second award is rejected
#[tokio::test]
async fn keeps_same_local_day_across_utc_midnight() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = GamificationConfig::default();

    let user = factory::create_user(db).await?;
    let late = Utc.with_ymd_and_hms(2026, 1, 10, 23, 0, 0).unwrap();
    let early = Utc.with_ymd_and_hms(2026, 1, 11, 1, 0, 0).unwrap();

    let service = GamificationService::new(db, &config);
    service.award_exp_at(user.id, ActivityType::ChatAi, late).await?;
    let second = service.award_exp_at(user.id, ActivityType::ChatAi, early).await?;

    assert_eq!(second, AwardOutcome::DailyLimitReached);

    Ok(())
}
