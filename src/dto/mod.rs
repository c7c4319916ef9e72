pub mod produits;
