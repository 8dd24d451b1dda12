use std::fmt;

/// Store operations, named the way the operator sees them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Fetch => "fetch users",
            Operation::Create => "save user",
            Operation::Update => "update user",
            Operation::Delete => "delete user",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdminError {
    /// Transport failure or a non-2xx answer from the store.
    #[error("Failed to {op}: {message}")]
    Network { op: Operation, message: String },

    /// Rejected client-side before any request was made.
    #[error("{0}")]
    Validation(String),
}

impl AdminError {
    pub(crate) fn network(op: Operation, err: &anyhow::Error) -> Self {
        AdminError::Network {
            op,
            message: format!("{:#}", err),
        }
    }
}
