#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("endpoint scheme must be http or https, got `{0}`")]
    Scheme(String),

    #[error("graphql: {0}")]
    Response(String),

    #[error("graphql response carried no data")]
    EmptyResponse,

    #[error("unexpected response shape: {0}")]
    Shape(String),

    #[error("{0}")]
    Recipe(#[from] chefbook_shared::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
