//! Create `fournisseur` table.
//!
//! Every column except the generated id is nullable; the service performs no field validation.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fournisseur::Table)
                    .if_not_exists()
                    .col(big_integer(Fournisseur::Id).auto_increment().primary_key())
                    .col(string_len_null(Fournisseur::Societe, 255))
                    .col(string_len_null(Fournisseur::Email, 255))
                    .col(string_len_null(Fournisseur::Contact, 255))
                    .col(string_len_null(Fournisseur::Telephone, 32))
                    .col(string_len_null(Fournisseur::Adresse, 512))
                    .col(string_len_null(Fournisseur::Ville, 128))
                    .col(string_len_null(Fournisseur::Ice, 32))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Fournisseur::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Fournisseur {
    Table,
    Id,
    Societe,
    Email,
    Contact,
    Telephone,
    Adresse,
    Ville,
    Ice,
}
