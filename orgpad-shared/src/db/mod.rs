/// Database layer for OrgPad
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with a health check
/// - `migrations`: Embedded migration runner
///
/// Models live in the `models` module at the crate root.
///
/// # Example
///
/// ```no_run
/// use orgpad_shared::db::pool::{create_pool, DatabaseConfig};
/// use orgpad_shared::db::migrations::run_migrations;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     run_migrations(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
