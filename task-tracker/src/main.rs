// task-tracker/src/main.rs
use migration::{Migrator, MigratorTrait};
use task_tracker::api::{create_app, AppState};
use task_tracker::config::Config;
use task_tracker::db::{create_db_pool, create_db_pool_with_schema, create_schema, schema_exists};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env を先に読み込み、RUST_LOG も反映させる
    dotenvy::dotenv().ok();

    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_tracker=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Task Tracker server...");

    let app_config = Config::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        addr = %app_config.server_addr(),
        "Configuration loaded"
    );

    let db_pool = if let Some(schema) = &app_config.db_schema {
        tracing::info!("Using schema: {}", schema);

        // まず基本接続でスキーマの存在を確認し、なければ作成
        let base_pool = create_db_pool(&app_config).await?;
        if !schema_exists(&base_pool, schema).await? {
            tracing::info!("Schema does not exist, creating it: {}", schema);
            create_schema(&base_pool, schema).await?;
        }
        base_pool.close().await?;

        create_db_pool_with_schema(&app_config, schema).await?
    } else {
        create_db_pool(&app_config).await?
    };

    tracing::info!("Database pool created successfully.");

    Migrator::up(&db_pool, None).await?;
    tracing::info!("Database migrations applied.");

    let app_state = AppState::new(db_pool, &app_config)?;
    let app_router = create_app(app_state);

    let listener = TcpListener::bind(app_config.server_addr()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app_router).await?;

    Ok(())
}
