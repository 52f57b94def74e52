use std::num::ParseIntError;

/// The host given on the command line couldn't be turned into a server
/// address.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("host name is empty")]
    EmptyHost,

    #[error("invalid port {port:?}: {source}")]
    Port {
        port: String,
        source: ParseIntError,
    },

    #[error("invalid server address: {0}")]
    Url(#[from] url::ParseError),
}
