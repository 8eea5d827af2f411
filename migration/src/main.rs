// migration/src/main.rs

use migration::Migrator;
use sea_orm_migration::prelude::*;

// DATABASE_URL を読み、up / down / status などのサブコマンドを実行する
#[async_std::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
