use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Query parse error: {0}")]
    Parse(#[from] graphql_parser::query::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
