use thiserror::Error;

/// Category of an [`InterpretError`], for callers that only need to branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Operator,
    Lookup,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[error("Syntax error: expected 3 tokens, got {found}")]
    Syntax { found: usize },

    #[error("Operator error: expected exactly one of `add`/`sub`, found {}{}", .found, extra_operator(.token))]
    Operator { found: usize, token: Option<String> },

    #[error("Undefined variable: {name}")]
    Lookup { name: String },
}

fn extra_operator(token: &Option<String>) -> String {
    match token {
        Some(token) => format!(" (extra operator `{}`)", token),
        None => String::new(),
    }
}

impl InterpretError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InterpretError::Syntax { .. } => ErrorKind::Syntax,
            InterpretError::Operator { .. } => ErrorKind::Operator,
            InterpretError::Lookup { .. } => ErrorKind::Lookup,
        }
    }
}
