use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog Error: {0}")]
    Catalog(String),

    #[error("Invalid cell '{0}' (expected cell-<index>)")]
    Cell(String),

    #[error("Cell {0} is outside the current board")]
    OutOfBounds(crate::core_types::CellId),

    #[error("Unknown token '{0}'")]
    Token(String),

    #[error("Script Error (line {line}): {message}")]
    Script { line: usize, message: String },
}

pub type BoardResult<T> = Result<T, BoardError>;
