//! Supplier record: the `fournisseur` table mapping plus the JSON-facing shape.

use sea_orm::{entity::prelude::*, ActiveValue, ConnectionTrait, DbBackend, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fournisseur")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub societe: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
    pub ville: Option<String>,
    pub ice: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Columns rewritten when an upsert hits an existing id.
pub const UPDATABLE_COLUMNS: [Column; 7] = [
    Column::Societe,
    Column::Email,
    Column::Contact,
    Column::Telephone,
    Column::Adresse,
    Column::Ville,
    Column::Ice,
];

/// Supplier as exchanged over HTTP. `id` is `None` until the store assigns one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fournisseur {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub societe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ville: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ice: Option<String>,
}

impl Fournisseur {
    pub fn new(societe: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            societe: Some(societe.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Case-sensitive substring test on the company name.
    pub fn societe_contains(&self, fragment: &str) -> bool {
        self.societe.as_deref().is_some_and(|s| s.contains(fragment))
    }

    /// Case-sensitive suffix test on the email.
    pub fn email_ends_with(&self, domain: &str) -> bool {
        self.email.as_deref().is_some_and(|e| e.ends_with(domain))
    }
}

impl From<Model> for Fournisseur {
    fn from(m: Model) -> Self {
        Self {
            id: Some(m.id),
            societe: m.societe,
            email: m.email,
            contact: m.contact,
            telephone: m.telephone,
            adresse: m.adresse,
            ville: m.ville,
            ice: m.ice,
        }
    }
}

impl From<Fournisseur> for ActiveModel {
    fn from(f: Fournisseur) -> Self {
        Self {
            id: match f.id {
                Some(id) => Set(id),
                None => ActiveValue::NotSet,
            },
            societe: Set(f.societe),
            email: Set(f.email),
            contact: Set(f.contact),
            telephone: Set(f.telephone),
            adresse: Set(f.adresse),
            ville: Set(f.ville),
            ice: Set(f.ice),
        }
    }
}

/// After an insert with an explicit id, move the Postgres `serial` sequence past the
/// highest id so generated ids keep clear of it. Other backends derive ids from the table.
pub async fn realign_id_sequence<C: ConnectionTrait>(db: &C) -> Result<(), errors::ModelError> {
    if db.get_database_backend() != DbBackend::Postgres {
        return Ok(());
    }
    db.execute_unprepared(
        "SELECT setval(pg_get_serial_sequence('fournisseur', 'id'), COALESCE((SELECT MAX(id) FROM fournisseur), 1))",
    )
    .await
    .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
