use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ProjectImages::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(ProjectImages::ImageId).uuid().not_null())
                    .col(
                        ColumnDef::new(ProjectImages::Caption)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ProjectImages::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::cust("display_order >= 0")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_images_project_id")
                            .from(ProjectImages::Table, ProjectImages::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_images_image_id")
                            .from(ProjectImages::Table, ProjectImages::ImageId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Gallery order within a project
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_images_project_order
                ON project_images (project_id, display_order);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectImages {
    Table,
    Id,
    ProjectId,
    ImageId,
    Caption,
    DisplayOrder,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
}
