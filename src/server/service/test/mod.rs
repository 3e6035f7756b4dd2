mod awarder;
mod gamification;
mod level;
