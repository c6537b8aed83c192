/// Recipes service configuration loaded from environment variables.
#[derive(Debug)]
pub struct RecipesConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3210). Env var: `RECIPES_PORT`.
    pub recipes_port: u16,
}

impl RecipesConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            recipes_port: std::env::var("RECIPES_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3210),
        }
    }
}
