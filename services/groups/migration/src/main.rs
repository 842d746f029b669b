use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(roster_groups_migration::Migrator).await;
}
