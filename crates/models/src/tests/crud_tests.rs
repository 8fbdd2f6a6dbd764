use crate::db::{connect_with_config, DatabaseConfig};
use crate::fournisseur::{self, Fournisseur};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};

async fn migrated_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[test]
fn serializes_without_absent_fields() {
    let mut f = Fournisseur::new("Acme", "a@acme.com");
    f.id = Some(1);
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(json, r#"{"id":1,"societe":"Acme","email":"a@acme.com"}"#);
}

#[test]
fn deserializes_partial_payloads() {
    let f: Fournisseur = serde_json::from_str(r#"{"societe":"Acme"}"#).unwrap();
    assert_eq!(f.id, None);
    assert_eq!(f.societe.as_deref(), Some("Acme"));
    assert_eq!(f.email, None);

    let f: Fournisseur = serde_json::from_str(r#"{"id":null,"ville":"Safi"}"#).unwrap();
    assert_eq!(f.id, None);
    assert_eq!(f.ville.as_deref(), Some("Safi"));
}

#[test]
fn rejects_non_integer_id() {
    let res: Result<Fournisseur, _> = serde_json::from_str(r#"{"id":"abc"}"#);
    assert!(res.is_err());
}

#[test]
fn lookup_helpers_are_case_sensitive() {
    let f = Fournisseur::new("Acme Industries", "sales@acme.com");
    assert!(f.societe_contains("Industries"));
    assert!(!f.societe_contains("industries"));
    assert!(f.email_ends_with("acme.com"));
    assert!(!f.email_ends_with("ACME.COM"));

    let empty = Fournisseur::default();
    assert!(!empty.societe_contains(""));
    assert!(!empty.email_ends_with(""));
}

#[test]
fn active_model_leaves_missing_id_unset() {
    let am: fournisseur::ActiveModel = Fournisseur::new("Acme", "a@acme.com").into();
    assert!(am.id.is_not_set());

    let mut f = Fournisseur::new("Acme", "a@acme.com");
    f.id = Some(42);
    let am: fournisseur::ActiveModel = f.into();
    assert_eq!(am.id.clone().unwrap(), 42);
}

#[tokio::test]
async fn insert_assigns_sequential_ids() -> Result<()> {
    let db = migrated_db().await?;

    let a = fournisseur::ActiveModel::from(Fournisseur::new("Acme", "a@acme.com")).insert(&db).await?;
    let b = fournisseur::ActiveModel::from(Fournisseur::new("Globex", "g@globex.com")).insert(&db).await?;
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);

    let found = fournisseur::Entity::find_by_id(a.id).one(&db).await?.unwrap();
    assert_eq!(Fournisseur::from(found), Fournisseur { id: Some(1), ..Fournisseur::new("Acme", "a@acme.com") });
    assert_eq!(fournisseur::Entity::find().count(&db).await?, 2);
    Ok(())
}

#[tokio::test]
async fn realign_is_noop_outside_postgres() -> Result<()> {
    let db = migrated_db().await?;
    fournisseur::realign_id_sequence(&db).await?;
    Ok(())
}

/// The sequence realignment only does work on Postgres; set `TEST_POSTGRES_URL` to run it.
#[tokio::test]
async fn realign_moves_postgres_sequence_past_explicit_id() -> Result<()> {
    let Ok(url) = std::env::var("TEST_POSTGRES_URL") else { return Ok(()); };
    let db = connect_with_config(&DatabaseConfig { url, min_connections: 1, ..DatabaseConfig::default() }).await?;
    migration::Migrator::up(&db, None).await?;

    let txn = db.begin().await?;
    let explicit = Fournisseur { id: Some(4_000_000_000), ..Fournisseur::new("Wide", "w@wide.io") };
    fournisseur::ActiveModel::from(explicit).insert(&txn).await?;
    fournisseur::realign_id_sequence(&txn).await?;

    let generated = fournisseur::ActiveModel::from(Fournisseur::new("Next", "n@next.io")).insert(&txn).await?;
    assert!(generated.id > 4_000_000_000, "generated id {} collides with explicit one", generated.id);
    txn.rollback().await?;
    Ok(())
}
