use sea_orm::DatabaseConnection;

use crate::flash::FlashStore;

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub flash: FlashStore,
}

impl AppState {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self {
            orm,
            flash: FlashStore::new(),
        }
    }
}
