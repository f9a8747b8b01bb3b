use thiserror::Error;

/// Errors that can occur while generating exception classes
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Status code {0} has no standard reason phrase")]
    MalformedStatusCode(String),

    #[error("Failed to read input: {0}")]
    UnreadableInput(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),

    #[error("{0}: {1}")]
    WithContext(String, Box<GeneratorError>),
}

impl GeneratorError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedStatusCode(code) => {
                format!("Unknown HTTP status code '{code}': no standard reason phrase exists")
            }
            Self::UnreadableInput(e) => format!("Could not read the error table: {e}"),
            Self::Write(e) => format!("Could not write generated classes: {e}"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
