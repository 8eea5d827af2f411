// task-tracker-client/src/main.rs

use chrono::Utc;
use std::env;
use task_tracker_client::{ClientError, Filter, HttpTaskApi, TaskManager, UserIntent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_API_URL: &str = "http://localhost:5000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_tracker_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_url = env::var("TASK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let token = env::var("TASK_API_TOKEN")
        .map_err(|_| ClientError::Config("TASK_API_TOKEN must be set".to_string()))?;
    let filter = match env::args().nth(1) {
        Some(arg) => arg.parse::<Filter>().map_err(ClientError::Config)?,
        None => Filter::All,
    };

    let mut manager = TaskManager::new(HttpTaskApi::new(base_url, token));
    manager.mount().await?;
    manager.dispatch(UserIntent::SetFilter(filter)).await?;

    print!("{}", manager.render(Utc::now()));
    Ok(())
}
