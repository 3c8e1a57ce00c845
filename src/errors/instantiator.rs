#[derive(thiserror::Error, Debug)]
pub enum InstantiatorErrorKind<DepsErr, FactoryErr> {
    #[error(transparent)]
    Deps(DepsErr),
    #[error(transparent)]
    Factory(FactoryErr),
}

#[derive(thiserror::Error, Debug)]
pub enum InstantiateErrorKind {
    #[error("Missing required argument at index {index}")]
    MissingArgument { index: usize },
    #[error("Argument at index {index} has an incorrect type")]
    IncorrectArgumentType { index: usize },
    #[error("Injected value for property {key} has an incorrect type")]
    IncorrectPropertyType { key: &'static str },
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
