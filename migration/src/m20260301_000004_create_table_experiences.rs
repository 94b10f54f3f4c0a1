use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Experiences::Company).string_len(200).not_null())
                    .col(ColumnDef::new(Experiences::Position).string_len(200).not_null())
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(
                        ColumnDef::new(Experiences::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Experiences::Location)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Experiences::CompanyUrl)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Experiences::CompanyLogoId).uuid())
                    .col(
                        ColumnDef::new(Experiences::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::cust("display_order >= 0")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiences_company_logo_id")
                            .from(Experiences::Table, Experiences::CompanyLogoId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_experiences_listing
                ON experiences (start_date DESC, display_order);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_experiences_listing")
            .await?;

        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Company,
    Position,
    Description,
    StartDate,
    EndDate,
    IsCurrent,
    Location,
    CompanyUrl,
    CompanyLogoId,
    DisplayOrder,
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
}
