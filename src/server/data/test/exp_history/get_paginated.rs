use super::*;

fn filter(user_id: i32) -> ExpHistoryFilter {
    ExpHistoryFilter {
        user_id,
        ..Default::default()
    }
}

/// Tests that entries come back newest first.
///
/// Expected: entries ordered by created_at descending
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for hour in [8, 12, 10] {
        let at = Utc.with_ymd_and_hms(2026, 1, 10, hour, 0, 0).unwrap();
        factory::create_exp_history(db, user.id, "upload_article", 20, at).await?;
    }

    let repo = ExpHistoryRepository::new(db);
    let (entries, total) = repo.get_paginated(filter(user.id), 0, 10).await?;

    assert_eq!(total, 3);
    let hours: Vec<_> = entries
        .iter()
        .map(|e| e.created_at.format("%H").to_string())
        .collect();
    assert_eq!(hours, vec!["12", "10", "08"]);

    Ok(())
}

/// Tests pagination with multiple pages.
///
/// Expected: page sizes follow per_page and total counts all matching entries
#[tokio::test]
async fn paginates_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for minute in 0..5 {
        let at = Utc.with_ymd_and_hms(2026, 1, 10, 9, minute, 0).unwrap();
        factory::create_exp_history(db, user.id, "forum_comment", 5, at).await?;
    }

    let repo = ExpHistoryRepository::new(db);
    let (first, total) = repo.get_paginated(filter(user.id), 0, 2).await?;
    let (last, _) = repo.get_paginated(filter(user.id), 2, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(first.len(), 2);
    assert_eq!(last.len(), 1);

    Ok(())
}

/// Tests that other users' entries are excluded.
///
/// Expected: only the requested user's entries
#[tokio::test]
async fn scopes_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_exp_history(db, user.id, "chat_ai", 10, Utc::now()).await?;
    factory::create_exp_history(db, other.id, "chat_ai", 10, Utc::now()).await?;

    let repo = ExpHistoryRepository::new(db);
    let (entries, total) = repo.get_paginated(filter(user.id), 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(entries[0].user_id, user.id);

    Ok(())
}

/// Tests filtering by activity type.
///
/// Expected: only entries of the requested type
#[tokio::test]
async fn filters_by_activity_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_exp_history(db, user.id, "chat_ai", 10, Utc::now()).await?;
    factory::create_exp_history(db, user.id, "forum_comment", 5, Utc::now()).await?;
    factory::create_exp_history(db, user.id, "forum_comment", 5, Utc::now()).await?;

    let repo = ExpHistoryRepository::new(db);
    let (entries, total) = repo
        .get_paginated(
            ExpHistoryFilter {
                activity_type: Some("forum_comment".to_string()),
                ..filter(user.id)
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 2);
    assert!(entries.iter().all(|e| e.activity_type == "forum_comment"));

    Ok(())
}

/// Tests the time range bounds.
///
/// Verifies that the lower bound is inclusive and the upper bound exclusive.
///
/// Expected: only the entry at the lower bound and the one inside the range
#[tokio::test]
async fn filters_by_time_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let from = Utc.with_ymd_and_hms(2026, 1, 9, 17, 0, 0).unwrap();
    let until = Utc.with_ymd_and_hms(2026, 1, 10, 17, 0, 0).unwrap();

    let before = Utc.with_ymd_and_hms(2026, 1, 9, 16, 59, 59).unwrap();
    let inside = Utc.with_ymd_and_hms(2026, 1, 10, 3, 0, 0).unwrap();
    for at in [before, from, inside, until] {
        factory::create_exp_history(db, user.id, "upload_article", 20, at).await?;
    }

    let repo = ExpHistoryRepository::new(db);
    let (entries, total) = repo
        .get_paginated(
            ExpHistoryFilter {
                from: Some(from),
                until: Some(until),
                ..filter(user.id)
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 2);
    assert_eq!(entries[0].created_at, inside);
    assert_eq!(entries[1].created_at, from);

    Ok(())
}
