use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SavedRecipes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SavedRecipes::UserId).uuid().not_null())
                    .col(ColumnDef::new(SavedRecipes::RecipeId).integer().not_null())
                    .col(
                        ColumnDef::new(SavedRecipes::Purpose)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SavedRecipes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // At-most-one membership per (user, recipe, purpose);
                    // concurrent duplicate adds race on this key.
                    .primary_key(
                        Index::create()
                            .col(SavedRecipes::UserId)
                            .col(SavedRecipes::RecipeId)
                            .col(SavedRecipes::Purpose),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SavedRecipes::Table, SavedRecipes::RecipeId)
                            .to(Recipes::Table, Recipes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(SavedRecipes::Table)
                    .col(SavedRecipes::RecipeId)
                    .name("idx_saved_recipes_recipe_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SavedRecipes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SavedRecipes {
    Table,
    UserId,
    RecipeId,
    Purpose,
    CreatedAt,
}

#[derive(Iden)]
enum Recipes {
    Table,
    Id,
}
