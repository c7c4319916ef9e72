/// Sonde de disponibilité, sans toucher à la base.
pub async fn health_check() -> &'static str {
    "ok"
}
