use std::{fmt, str::FromStr};

use url::Url;

use crate::error::EndpointError;

/// The port the notes server listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 4567;

/// A notes server, parsed from a `[scheme://]host[:port]` argument. The
/// scheme defaults to `http` and the port to [`DEFAULT_PORT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    /// The login RPC, used to get a fresh token when none was given
    pub fn login_url(&self) -> Result<Url, EndpointError> {
        Ok(self.base.join("api/v1/login")?)
    }

    /// The upload RPC for a single file. The file name is sent in the query
    /// string.
    pub fn upload_url(&self, file: &str) -> Result<Url, EndpointError> {
        let mut url = self.base.join("api/v1/upload")?;
        url.query_pairs_mut().append_pair("name", file);
        Ok(url)
    }
}

impl FromStr for Endpoint {
    type Err = EndpointError;

    fn from_str(host: &str) -> Result<Self, Self::Err> {
        let (scheme, rest) = match host.split_once("://") {
            Some((scheme @ ("http" | "https"), rest)) => (scheme, rest),
            _ => ("http", host),
        };

        let rest = rest.trim_end_matches('/');

        // Bracketed IPv6 addresses contain colons of their own
        let separator = match rest.ends_with(']') {
            true => None,
            false => memchr::memrchr(b':', rest.as_bytes()),
        };

        let (name, port) = match separator {
            None => (rest, DEFAULT_PORT),
            Some(i) => {
                let port = &rest[i + 1..];

                let port = port.parse::<u16>().map_err(|source| EndpointError::Port {
                    port: port.to_owned(),
                    source,
                })?;

                (&rest[..i], port)
            }
        };

        if name.is_empty() {
            return Err(EndpointError::EmptyHost);
        }

        let base = Url::parse(&format!("{scheme}://{name}:{port}/"))?;

        Ok(Self { base })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Url always has a trailing slash on an empty path
        f.write_str(self.base.as_str().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(host: &str) -> Endpoint {
        host.parse().unwrap()
    }

    #[test]
    fn bare_host_gets_defaults() {
        assert_eq!(endpoint("localhost").to_string(), "http://localhost:4567");
    }

    #[test]
    fn explicit_port_and_scheme() {
        assert_eq!(
            endpoint("https://notes.example.com:8443").to_string(),
            "https://notes.example.com:8443"
        );
        assert_eq!(endpoint("10.0.0.2:9000/").to_string(), "http://10.0.0.2:9000");
    }

    #[test]
    fn ipv6_host() {
        assert_eq!(endpoint("[::1]").to_string(), "http://[::1]:4567");
        assert_eq!(endpoint("[::1]:80").to_string(), "http://[::1]");
    }

    #[test]
    fn bad_hosts() {
        assert!(matches!(
            "localhost:http".parse::<Endpoint>(),
            Err(EndpointError::Port { .. })
        ));
        assert!(matches!(
            "localhost:70000".parse::<Endpoint>(),
            Err(EndpointError::Port { .. })
        ));
        assert!(matches!(
            ":4567".parse::<Endpoint>(),
            Err(EndpointError::EmptyHost)
        ));
    }

    #[test]
    fn upload_url_encodes_file_name() {
        let url = endpoint("localhost").upload_url("my notes.md").unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:4567/api/v1/upload?name=my+notes.md"
        );
    }

    #[test]
    fn login_url() {
        assert_eq!(
            endpoint("localhost:80").login_url().unwrap().as_str(),
            "http://localhost/api/v1/login"
        );
    }
}
