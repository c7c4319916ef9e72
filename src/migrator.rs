use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250310_000001_create_produit_table::Migration)]
    }
}

mod m20250310_000001_create_produit_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250310_000001_create_produit_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Produit::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Produit::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Produit::Nom).string_len(100).not_null())
                        .col(ColumnDef::new(Produit::TypeThe).string_len(50).not_null())
                        .col(ColumnDef::new(Produit::Origine).string_len(100).not_null())
                        .col(
                            ColumnDef::new(Produit::Prix)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Produit::QuantiteStock)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Produit::Description).string_len(500).null())
                        .col(ColumnDef::new(Produit::DateReception).date().not_null())
                        .to_owned(),
                )
                .await?;

            // Le filtre par type est une égalité stricte, il profite d'un index.
            manager
                .create_index(
                    Index::create()
                        .name("idx_produit_type_the")
                        .table(Produit::Table)
                        .col(Produit::TypeThe)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Produit::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Produit {
        Table,
        Id,
        Nom,
        TypeThe,
        Origine,
        Prix,
        QuantiteStock,
        Description,
        DateReception,
    }
}
