//! Create `Pizzas` table.
//! Column names are PascalCase to match the catalog database layout
//! so existing `Pizzas.db` files open unchanged.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pizzas::Table)
                    .if_not_exists()
                    .col(pk_auto(Pizzas::Id))
                    .col(string(Pizzas::Name))
                    .col(string_null(Pizzas::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pizzas::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pizzas {
    #[sea_orm(iden = "Pizzas")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "Name")]
    Name,
    #[sea_orm(iden = "Description")]
    Description,
}
