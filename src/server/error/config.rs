use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed, e.g. a non-numeric guild id.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },

    /// A configured URL could not be parsed.
    #[error("Invalid URL in configuration: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
