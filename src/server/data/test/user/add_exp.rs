use super::*;

/// Tests adding points to an existing balance.
///
/// Expected: one row affected and the balance increased by the points
#[tokio::test]
async fn increments_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).exp(40).build().await?;

    let repo = UserRepository::new(db);
    let rows = repo.add_exp(user.id, 20).await?;

    assert_eq!(rows, 1);
    let user = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(user.exp, 60);

    Ok(())
}

/// Tests that repeated increments accumulate.
///
/// Expected: balance equals the sum of all increments
#[tokio::test]
async fn accumulates_repeated_increments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    for _ in 0..3 {
        repo.add_exp(user.id, 5).await?;
    }

    let user = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(user.exp, 15);

    Ok(())
}

/// Tests incrementing a user that does not exist.
///
/// Expected: Ok(0) so callers can detect the missing user
#[tokio::test]
async fn reports_zero_rows_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let rows = repo.add_exp(999, 10).await?;

    assert_eq!(rows, 0);

    Ok(())
}
