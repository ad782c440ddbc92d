#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("Unsupported instruction : {0}")]
    UnsupportedInstruction(String),
    #[error("Unknown instruction format type: {0:?}")]
    UnknownFormatKind(String),
    #[error("Invalid catalog entry {mnemonic:?}: {reason}")]
    InvalidCatalogEntry { mnemonic: String, reason: String },
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),
}
