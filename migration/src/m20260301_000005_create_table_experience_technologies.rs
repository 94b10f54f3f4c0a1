use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExperienceTechnologies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperienceTechnologies::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ExperienceTechnologies::ExperienceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceTechnologies::SkillId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_technologies_experience_id")
                            .from(
                                ExperienceTechnologies::Table,
                                ExperienceTechnologies::ExperienceId,
                            )
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_technologies_skill_id")
                            .from(ExperienceTechnologies::Table, ExperienceTechnologies::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One link per (experience, skill)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_experience_technologies_unique
                ON experience_technologies (experience_id, skill_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_experience_technologies_skill_id
                ON experience_technologies (skill_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ExperienceTechnologies::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ExperienceTechnologies {
    Table,
    Id,
    ExperienceId,
    SkillId,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
}
