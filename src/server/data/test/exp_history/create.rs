use super::*;

/// Tests appending a history entry.
///
/// Expected: Ok with the stored fields and a generated ID
#[tokio::test]
async fn creates_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created_at = Utc.with_ymd_and_hms(2026, 1, 10, 8, 30, 0).unwrap();

    let repo = ExpHistoryRepository::new(db);
    let entry = repo
        .create(CreateExpHistoryParam {
            user_id: user.id,
            activity_type: "chat_ai".to_string(),
            points: 10,
            description: "Chatted with the AI companion".to_string(),
            created_at,
        })
        .await?;

    assert!(entry.id > 0);
    assert_eq!(entry.user_id, user.id);
    assert_eq!(entry.activity_type, "chat_ai");
    assert_eq!(entry.points, 10);
    assert_eq!(entry.created_at, created_at);

    Ok(())
}
