//! Secondary indexes for the supplier lookups.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fournisseur_societe")
                    .table(Fournisseur::Table)
                    .col(Fournisseur::Societe)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fournisseur_email")
                    .table(Fournisseur::Table)
                    .col(Fournisseur::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_fournisseur_email").table(Fournisseur::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_fournisseur_societe").table(Fournisseur::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Fournisseur { Table, Societe, Email }
