use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

/// Message affiché une seule fois sur la page suivant une redirection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl Flash {
    pub fn succes(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn erreur(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// Classe CSS du bandeau.
    pub fn class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }
}

struct Entry {
    flash: Flash,
    stored_at: Instant,
}

/// Dépôt de messages flash côté serveur, indexé par un jeton de
/// redirection. Chaque entrée est lisible exactement une fois puis
/// disparaît; les entrées jamais relues sont balayées à l'insertion
/// suivante une fois le TTL écoulé.
#[derive(Clone)]
pub struct FlashStore {
    entries: Arc<DashMap<Uuid, Entry>>,
    ttl: Duration,
}

const FLASH_TTL: Duration = Duration::from_secs(120);

impl Default for FlashStore {
    fn default() -> Self {
        Self::with_ttl(FLASH_TTL)
    }
}

impl FlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Dépose un message et rend le jeton à joindre à la redirection.
    pub fn store(&self, flash: Flash) -> Uuid {
        let now = Instant::now();
        self.entries
            .retain(|_, entry| now.duration_since(entry.stored_at) < self.ttl);

        let token = Uuid::new_v4();
        self.entries.insert(
            token,
            Entry {
                flash,
                stored_at: now,
            },
        );
        token
    }

    /// Retire le message associé au jeton. Un jeton inconnu, déjà consommé
    /// ou expiré rend `None`.
    pub fn take(&self, token: &Uuid) -> Option<Flash> {
        let (_, entry) = self.entries.remove(token)?;
        if entry.stored_at.elapsed() < self.ttl {
            Some(entry.flash)
        } else {
            None
        }
    }
}
