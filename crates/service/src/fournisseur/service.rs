use std::sync::Arc;
use tracing::{info, instrument};

use models::Fournisseur;

use crate::errors::ServiceError;
use crate::fournisseur::repository::FournisseurRepository;

/// Application service for suppliers. Delegates to the repository; the only rule it
/// adds is that `update` pins the identifier to the one addressed by the caller.
pub struct FournisseurService<R: FournisseurRepository> {
    repo: Arc<R>,
}

impl<R: FournisseurRepository> FournisseurService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip_all)]
    pub async fn save(&self, fournisseur: Fournisseur) -> Result<Fournisseur, ServiceError> {
        let saved = self.repo.save(fournisseur).await?;
        info!(id = ?saved.id, "fournisseur_saved");
        Ok(saved)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Fournisseur>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Fournisseur>, ServiceError> {
        self.repo.find_all().await
    }

    /// Upserts: an unknown `id` yields a new record carrying that id.
    #[instrument(skip(self, fournisseur))]
    pub async fn update(&self, id: i64, mut fournisseur: Fournisseur) -> Result<Fournisseur, ServiceError> {
        fournisseur.id = Some(id);
        self.repo.save(fournisseur).await
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let removed = self.repo.delete_by_id(id).await?;
        info!(id, removed, "fournisseur_delete");
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        self.repo.count().await
    }

    pub async fn find_by_societe(&self, fragment: &str) -> Result<Vec<Fournisseur>, ServiceError> {
        self.repo.find_by_societe(fragment).await
    }

    pub async fn find_by_email_domain(&self, domain: &str) -> Result<Vec<Fournisseur>, ServiceError> {
        self.repo.find_by_email_domain(domain).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use crate::fournisseur::repository::SeaOrmFournisseurRepository;
    use crate::test_support::get_db;

    /// In-memory stand-in for the SeaORM repository.
    #[derive(Default)]
    struct RecordingRepo {
        rows: Mutex<BTreeMap<i64, Fournisseur>>,
    }

    #[async_trait]
    impl FournisseurRepository for RecordingRepo {
        async fn save(&self, mut f: Fournisseur) -> Result<Fournisseur, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let id = f.id.unwrap_or_else(|| rows.keys().next_back().map_or(1, |k| k + 1));
            f.id = Some(id);
            rows.insert(id, f.clone());
            Ok(f)
        }
        async fn find_by_id(&self, id: i64) -> Result<Option<Fournisseur>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }
        async fn find_all(&self) -> Result<Vec<Fournisseur>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }
        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
        async fn count(&self) -> Result<u64, ServiceError> {
            Ok(self.rows.lock().unwrap().len() as u64)
        }
    }

    #[tokio::test]
    async fn update_overrides_payload_id() -> Result<(), anyhow::Error> {
        let svc = FournisseurService::new(Arc::new(RecordingRepo::default()));
        let created = svc.save(Fournisseur::new("Acme", "a@acme.com")).await?;
        assert_eq!(created.id, Some(1));

        let payload = Fournisseur { id: Some(99), ..Fournisseur::new("Acme2", "a2@acme.com") };
        let updated = svc.update(1, payload).await?;
        assert_eq!(updated.id, Some(1));
        assert!(svc.find_by_id(99).await?.is_none());
        assert_eq!(svc.find_by_id(1).await?.unwrap().societe.as_deref(), Some("Acme2"));
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_upserts() -> Result<(), anyhow::Error> {
        let svc = FournisseurService::new(Arc::new(SeaOrmFournisseurRepository::new(get_db().await?)));

        let updated = svc.update(42, Fournisseur::new("Ghost", "g@ghost.io")).await?;
        assert_eq!(updated.id, Some(42));
        assert_eq!(svc.count().await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn crud_through_service() -> Result<(), anyhow::Error> {
        let svc = FournisseurService::new(Arc::new(SeaOrmFournisseurRepository::new(get_db().await?)));

        let created = svc.save(Fournisseur::new("Acme", "a@acme.com")).await?;
        let id = created.id.unwrap();
        assert_eq!(svc.find_by_id(id).await?, Some(created.clone()));

        let updated = svc.update(id, Fournisseur::new("Acme", "billing@acme.ma")).await?;
        assert_eq!(svc.find_by_id(id).await?, Some(updated));
        assert_eq!(svc.find_by_email_domain("acme.ma").await?.len(), 1);
        assert_eq!(svc.find_by_societe("Acm").await?.len(), 1);

        svc.delete_by_id(id).await?;
        svc.delete_by_id(id).await?;
        assert!(svc.find_by_id(id).await?.is_none());
        assert_eq!(svc.find_all().await?.len() as u64, svc.count().await?);
        Ok(())
    }
}
