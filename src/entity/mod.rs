pub mod produit;

pub use produit::Entity as Produits;
