use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("listing must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("tree error: {0}")]
    Tree(#[from] doggybag_tree::Error),
}
