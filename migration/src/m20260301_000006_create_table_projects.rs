use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(
                        ColumnDef::new(Projects::DetailedDescription)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Projects::Status)
                            .string_len(20)
                            .not_null()
                            .default("completed"),
                    )
                    .col(ColumnDef::new(Projects::StartDate).date().not_null())
                    .col(ColumnDef::new(Projects::EndDate).date())
                    .col(
                        ColumnDef::new(Projects::ProjectUrl)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Projects::GithubUrl)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Projects::DemoUrl)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Projects::FeaturedImageId).uuid())
                    .col(
                        ColumnDef::new(Projects::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::cust("display_order >= 0")),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::cust(
                        "status IN ('completed', 'in_progress', 'planned')",
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_featured_image_id")
                            .from(Projects::Table, Projects::FeaturedImageId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Canonical listing order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_listing
                ON projects (is_featured DESC, display_order, start_date DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_status
                ON projects (status);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_projects_updated_at
                BEFORE UPDATE ON projects
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop trigger
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_projects_updated_at ON projects;
                "#,
            )
            .await?;

        // Drop indexes
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_projects_listing;
                DROP INDEX IF EXISTS idx_projects_status;
                "#,
            )
            .await?;

        // Drop table
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    DetailedDescription,
    Status,
    StartDate,
    EndDate,
    ProjectUrl,
    GithubUrl,
    DemoUrl,
    FeaturedImageId,
    IsFeatured,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
}
