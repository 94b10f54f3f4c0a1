use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Category).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Skills::ProficiencyLevel)
                            .small_integer()
                            .not_null()
                            .check(Expr::cust("proficiency_level BETWEEN 1 AND 5")),
                    )
                    .col(
                        ColumnDef::new(Skills::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Skills::IconId).uuid())
                    .col(
                        ColumnDef::new(Skills::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::cust("display_order >= 0")),
                    )
                    .col(
                        ColumnDef::new(Skills::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .check(Expr::cust(
                        "category IN ('technical', 'soft', 'language', 'tool')",
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skills_icon_id")
                            .from(Skills::Table, Skills::IconId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Canonical listing order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_skills_listing
                ON skills (category, display_order, name);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_skills_featured
                ON skills (category, display_order, name)
                WHERE is_featured;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_skills_listing;
                DROP INDEX IF EXISTS idx_skills_featured;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Category,
    ProficiencyLevel,
    Description,
    IconId,
    DisplayOrder,
    IsFeatured,
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
}
