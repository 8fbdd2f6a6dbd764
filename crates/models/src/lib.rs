pub mod errors;
pub mod db;
pub mod fournisseur;

pub use fournisseur::Fournisseur;

#[cfg(test)]
mod tests;
