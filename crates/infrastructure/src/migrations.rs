use sqlx::migrate::Migrator;

/// 内嵌的数据库迁移（`crates/infrastructure/migrations`）
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
