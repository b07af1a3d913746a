pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250310_090000_create_reviews_table;
mod m20250310_090100_create_favourites_table;
mod m20250310_090200_create_watchlist_items_table;
mod m20250310_090300_create_movie_lists_tables;
mod m20250310_090400_create_follows_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250310_090000_create_reviews_table::Migration),
            Box::new(m20250310_090100_create_favourites_table::Migration),
            Box::new(m20250310_090200_create_watchlist_items_table::Migration),
            Box::new(m20250310_090300_create_movie_lists_tables::Migration),
            Box::new(m20250310_090400_create_follows_table::Migration),
        ]
    }
}
