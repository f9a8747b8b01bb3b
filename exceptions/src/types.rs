use crate::error::GeneratorError;

/// Type alias for Result with `GeneratorError`
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Which side of the exchange an error is blamed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Client,
    Server,
}

impl ErrorKind {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Client" => Some(Self::Client),
            "Server" => Some(Self::Server),
            _ => None,
        }
    }
}

/// One row of the error table, already normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRow {
    pub name: String,
    pub reason: String,
    /// Decimal digits only, possibly empty
    pub status_code: String,
    pub kind: ErrorKind,
}

impl ErrorRow {
    pub fn has_status_code(&self) -> bool {
        !self.status_code.is_empty()
    }
}

/// A single generated class, rendered and written immediately
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    pub class_name: String,
    pub superclass_name: String,
    pub doc_comment: String,
}

/// Counters collected over one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub rows_matched: usize,
    pub rows_skipped: usize,
    pub duplicate_rows: usize,
    pub client_rows: usize,
    pub server_rows: usize,
    pub exception_classes: usize,
    pub status_classes: usize,
}

impl GenerationSummary {
    pub fn total_classes(&self) -> usize {
        self.exception_classes + self.status_classes
    }
}
