pub mod produit_service;
