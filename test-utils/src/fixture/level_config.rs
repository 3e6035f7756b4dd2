//! Level configuration fixtures.

use chrono::{DateTime, Utc};
use entity::level_config;

/// Standard level table: level number, threshold, badge name and badge icon.
pub const STANDARD_LEVELS: [(i32, i64, &str, &str); 8] = [
    (1, 0, "Beginner", "🌱"),
    (2, 100, "Explorer", "🌿"),
    (3, 300, "Learner", "📚"),
    (4, 600, "Intermediate", "🌳"),
    (5, 1000, "Advanced", "🏆"),
    (6, 1500, "Expert", "💎"),
    (7, 2000, "Master", "⭐"),
    (8, 3000, "Grandmaster", "👑"),
];

/// Creates a single level configuration model without inserting it.
///
/// # Arguments
/// - `id` - Primary key to assign
/// - `level` - Level number
/// - `min_exp` - Threshold
///
/// # Returns
/// - `level_config::Model` - In-memory model with a generated badge
pub fn entity(id: i32, level: i32, min_exp: i64) -> level_config::Model {
    let now = fixed_timestamp();
    level_config::Model {
        id,
        level,
        min_exp,
        badge_name: format!("Level {}", level),
        badge_icon: "⭐".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Builds the standard eight-level table as in-memory models with IDs 1..=8.
pub fn standard_table() -> Vec<level_config::Model> {
    let now = fixed_timestamp();
    STANDARD_LEVELS
        .iter()
        .zip(1..)
        .map(|(&(level, min_exp, name, icon), id)| level_config::Model {
            id,
            level,
            min_exp,
            badge_name: name.to_string(),
            badge_icon: icon.to_string(),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}
