use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectTechnologies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectTechnologies::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ProjectTechnologies::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(ProjectTechnologies::SkillId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technologies_project_id")
                            .from(ProjectTechnologies::Table, ProjectTechnologies::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technologies_skill_id")
                            .from(ProjectTechnologies::Table, ProjectTechnologies::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_project_technologies_unique
                ON project_technologies (project_id, skill_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_technologies_skill_id
                ON project_technologies (skill_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectTechnologies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectTechnologies {
    Table,
    Id,
    ProjectId,
    SkillId,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
}
