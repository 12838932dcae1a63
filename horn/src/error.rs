use std::fmt;

/// Error types for the Horn system.
///
/// Unprovable goals and detected cycles are not errors; they are normal
/// negative results carried in the trace. Errors only arise at the
/// construction boundary (malformed rule-set files) or in the host
/// layer.
#[derive(Debug, Clone)]
pub enum HornError {
    /// Host-level error without a more specific shape
    Engine(String),

    /// A rule that fails construction-time validation
    InvalidRule { index: usize, message: String },

    /// A rule-set document that does not parse as JSON
    Import(String),

    /// Multiple errors collected together
    MultipleErrors(Vec<HornError>),
}

impl fmt::Display for HornError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HornError::Engine(msg) => write!(f, "Engine error: {}", msg),
            HornError::InvalidRule { index, message } => {
                write!(f, "Invalid rule at index {}: {}", index, message)
            }
            HornError::Import(msg) => write!(f, "Import error: {}", msg),
            HornError::MultipleErrors(errors) => {
                writeln!(f, "Multiple errors:")?;
                for (i, error) in errors.iter().enumerate() {
                    write!(f, "  {}. {}", i + 1, error)?;
                    if i < errors.len() - 1 {
                        writeln!(f)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for HornError {}
