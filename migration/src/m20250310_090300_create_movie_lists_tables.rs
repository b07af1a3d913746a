use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // movie_lists
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(MovieLists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MovieLists::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MovieLists::UserId).uuid().not_null())
                    .col(ColumnDef::new(MovieLists::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(MovieLists::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_lists_user_id")
                            .from(MovieLists::Table, MovieLists::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_movie_lists_user_name")
                    .table(MovieLists::Table)
                    .col(MovieLists::UserId)
                    .col(MovieLists::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // movie_list_items
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(MovieListItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MovieListItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MovieListItems::ListId).uuid().not_null())
                    .col(
                        ColumnDef::new(MovieListItems::MovieId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MovieListItems::AddedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_list_items_list_id")
                            .from(MovieListItems::Table, MovieListItems::ListId)
                            .to(MovieLists::Table, MovieLists::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_movie_list_items_list_movie")
                    .table(MovieListItems::Table)
                    .col(MovieListItems::ListId)
                    .col(MovieListItems::MovieId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_movie_list_items_list_added
                ON movie_list_items (list_id, added_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MovieListItems::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MovieLists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MovieLists {
    Table,
    Id,
    UserId,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum MovieListItems {
    Table,
    Id,
    ListId,
    MovieId,
    AddedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
