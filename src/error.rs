pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("duplicate id: {0}")]
    DuplicateId(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An arc on an augmenting path has no paired reverse arc.
    #[error("malformed network: arc {arc} has no reverse arc")]
    MalformedNetwork { arc: String },

    /// The total flow does not fit in the capacity type.
    #[error("total flow exceeds the capacity range")]
    FlowOverflow,

    /// Only raised under `ZeroFlowPolicy::Reject`.
    #[error("there is no augmenting path between the given vertices")]
    NoAugmentingPath,
}
