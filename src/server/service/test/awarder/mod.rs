use std::sync::Arc;

use crate::server::{
    model::gamification::{ActivityType, GamificationConfig},
    service::awarder::ExpAwarder,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
