/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid size: {0} (expected TALL, GRANDE or VENTI)")]
    InvalidSize(String),

    #[error("Unknown roast: {0}")]
    UnknownRoast(String),

    #[error("Unknown condiment: {0}")]
    UnknownCondiment(String),

    #[error("Invalid recipe: {0}")]
    InvalidRecipe(#[from] serde_json::Error),
}
