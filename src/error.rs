use thiserror::Error;

/// Everything that can go wrong between reading a request and writing its
/// response. Only `Resource` and `Io` are fatal, and only at startup; the
/// request loop converts the rest into structured error responses.
#[derive(Error, Debug)]
pub enum EquityError {
    /// Malformed card token in a request field.
    #[error("invalid card: {0}")]
    InvalidCard(String),

    /// Structurally valid line, semantically bad request fields.
    #[error("{0}")]
    InvalidRequest(String),

    /// Lookup table artifact missing or structurally wrong.
    #[error("lookup table: {0}")]
    Resource(String),

    /// I/O failure while reading the lookup table artifact.
    #[error("lookup table: {0}")]
    Io(#[from] std::io::Error),

    /// Deal requires more cards than remain in the deck.
    #[error("need {need} cards but only {have} remain in the deck")]
    Sampling { need: usize, have: usize },

    /// A computed table index fell outside the loaded table. Signals a
    /// table/version mismatch, not bad input.
    #[error("{table} index {index} out of bounds for table of length {len}")]
    Index {
        table: &'static str,
        index: usize,
        len: usize,
    },

    /// Seven-card evaluation handed the wrong number of cards.
    #[error("selection holds {0} cards, evaluation requires 7")]
    Selection(usize),
}

pub type EquityResult<T> = Result<T, EquityError>;
