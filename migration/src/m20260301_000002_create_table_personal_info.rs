use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PersonalInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PersonalInfo::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(PersonalInfo::Name).string_len(100).not_null())
                    .col(ColumnDef::new(PersonalInfo::Title).string_len(200).not_null())
                    .col(ColumnDef::new(PersonalInfo::Bio).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::Email).string_len(254).not_null())
                    .col(
                        ColumnDef::new(PersonalInfo::Phone)
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::Location)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::LinkedinUrl)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::GithubUrl)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::WebsiteUrl)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(PersonalInfo::ProfileImageId).uuid())
                    .col(ColumnDef::new(PersonalInfo::ResumeId).uuid())
                    .col(
                        ColumnDef::new(PersonalInfo::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_personal_info_profile_image_id")
                            .from(PersonalInfo::Table, PersonalInfo::ProfileImageId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_personal_info_resume_id")
                            .from(PersonalInfo::Table, PersonalInfo::ResumeId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one active profile.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_personal_info_single_active
                ON personal_info (is_active)
                WHERE is_active;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_personal_info_updated_at
                BEFORE UPDATE ON personal_info
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
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
                DROP TRIGGER IF EXISTS update_personal_info_updated_at ON personal_info;
                DROP INDEX IF EXISTS idx_personal_info_single_active;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PersonalInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PersonalInfo {
    Table,
    Id,
    Name,
    Title,
    Bio,
    Email,
    Phone,
    Location,
    LinkedinUrl,
    GithubUrl,
    WebsiteUrl,
    ProfileImageId,
    ResumeId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
}
