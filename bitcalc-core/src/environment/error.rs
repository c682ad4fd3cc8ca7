use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },
    #[error("variable `{name}` is already defined")]
    VariableAlreadyDefined { name: String },
    #[error("can't set const variable `{name}`")]
    ImmutableVariable { name: String },
}
