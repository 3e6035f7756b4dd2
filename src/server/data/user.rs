//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading user records and applying EXP
//! increments to their balance. Users are created by the authentication service; this
//! repository never inserts or deletes them.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::User;

/// Repository providing database operations for user balances.
///
/// Generic over the connection so the same queries run on a plain connection or inside
/// the award transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Arguments
    /// - `id` - Primary key of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Adds points to a user's EXP balance in place.
    ///
    /// The increment is a single `UPDATE ... SET exp = exp + ?` so concurrent awards for
    /// the same user never lose an update.
    ///
    /// # Arguments
    /// - `id` - Primary key of the user
    /// - `points` - Non-negative amount to add
    ///
    /// # Returns
    /// - `Ok(1)` - Balance updated
    /// - `Ok(0)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn add_exp(&self, id: i32, points: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Exp,
                Expr::col(entity::user::Column::Exp).add(points),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the users with the highest EXP balance.
    ///
    /// Users are ordered by EXP descending; ties are broken by ascending ID so the
    /// ordering is stable between requests.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of users to return
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Up to `limit` users in leaderboard order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::Exp)
            .order_by_asc(entity::user::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
