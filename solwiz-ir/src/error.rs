use thiserror::Error;

/// Result type for IR assembly and rendering.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations raised while assembling or rendering a contract.
///
/// These always indicate a bug in the code driving the builder, never bad
/// end-user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("parent contract '{name}' is already part of '{contract}'")]
    DuplicateParent { contract: String, name: String },

    #[error("cannot append code to '{function}': its body was replaced")]
    BodyAlreadyReplaced { function: String },

    #[error("cannot replace the body of '{function}': code was already appended")]
    BodyAlreadyAppended { function: String },

    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    #[error("'{function}' overrides '{ancestor}', which is not a parent of '{contract}'")]
    UnknownAncestor {
        contract: String,
        function: String,
        ancestor: String,
    },
}
