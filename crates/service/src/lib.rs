//! Service layer for supplier management.
//! - `repository`: persistence contract and its SeaORM implementation.
//! - `service`: orchestration used by the HTTP handlers.

pub mod errors;
pub mod fournisseur;
#[cfg(test)]
pub mod test_support;

pub use fournisseur::{repository::{FournisseurRepository, SeaOrmFournisseurRepository}, service::FournisseurService};
