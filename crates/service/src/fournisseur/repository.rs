use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, TransactionTrait,
};
use tracing::debug;

use models::{fournisseur, Fournisseur};

use crate::errors::ServiceError;

/// Persistence contract for suppliers. Absence is `Ok(None)`, never an error.
#[async_trait]
pub trait FournisseurRepository: Send + Sync {
    /// Inserts when `id` is `None`, otherwise upserts keyed by `id`.
    async fn save(&self, fournisseur: Fournisseur) -> Result<Fournisseur, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Fournisseur>, ServiceError>;
    /// All rows in ascending id order.
    async fn find_all(&self) -> Result<Vec<Fournisseur>, ServiceError>;
    /// Returns whether a row was removed; a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;

    async fn find_by_societe(&self, fragment: &str) -> Result<Vec<Fournisseur>, ServiceError> {
        let mut all = self.find_all().await?;
        all.retain(|f| f.societe_contains(fragment));
        Ok(all)
    }

    async fn find_by_email_domain(&self, domain: &str) -> Result<Vec<Fournisseur>, ServiceError> {
        let mut all = self.find_all().await?;
        all.retain(|f| f.email_ends_with(domain));
        Ok(all)
    }
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmFournisseurRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmFournisseurRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FournisseurRepository for SeaOrmFournisseurRepository {
    async fn save(&self, record: Fournisseur) -> Result<Fournisseur, ServiceError> {
        let txn = self.db.begin().await?;
        let saved = match record.id {
            None => fournisseur::ActiveModel::from(record).insert(&txn).await?,
            Some(id) => {
                fournisseur::Entity::insert(fournisseur::ActiveModel::from(record))
                    .on_conflict(
                        OnConflict::column(fournisseur::Column::Id)
                            .update_columns(fournisseur::UPDATABLE_COLUMNS)
                            .to_owned(),
                    )
                    .exec_without_returning(&txn)
                    .await?;
                fournisseur::realign_id_sequence(&txn).await?;
                fournisseur::Entity::find_by_id(id)
                    .one(&txn)
                    .await?
                    .ok_or_else(|| ServiceError::Db(format!("fournisseur {id} missing after upsert")))?
            }
        };
        txn.commit().await?;
        debug!(id = saved.id, "fournisseur saved");
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Fournisseur>, ServiceError> {
        let found = fournisseur::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Fournisseur::from))
    }

    async fn find_all(&self) -> Result<Vec<Fournisseur>, ServiceError> {
        let rows = fournisseur::Entity::find()
            .order_by_asc(fournisseur::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Fournisseur::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let res = fournisseur::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(fournisseur::Entity::find().count(&self.db).await?)
    }
}
