use crate::error::Error;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Resolver queried when neither the command line nor a config file names one.
pub const DEFAULT_SERVER: &str = "1.1.1.1";

/// Port used for a resolver address given without one.
pub const DEFAULT_DNS_PORT: u16 = 53;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Transport used to reach the resolver.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Udp,
    Tcp,
}

/// Which answer records of a response are decoded into a lookup result.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnswerPolicy {
    /// Decode only the first answer record. Anything else in the answer section is ignored, and
    /// a first record of the wrong type counts as no answer at all.
    #[default]
    First,
    /// Decode every answer record of the queried type owned by the queried name.
    All,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub server: String,
    pub protocol: Protocol,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub timeout: Duration,
    pub answers: AnswerPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            protocol: Protocol::default(),
            timeout: DEFAULT_TIMEOUT,
            answers: AnswerPolicy::default(),
        }
    }
}

impl Config {
    /// Load a [`Config`] from a JSON file. Fields missing from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the path can't be opened, or [`Error::InvalidJSON`] if its
    /// content isn't a valid config object.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        Ok(conf)
    }

    /// Resolve [`Config::server`] into the socket address queries are sent to.
    ///
    /// Accepts `ip`, `ip:port`, `[v6]:port`, `host` and `host:port`. Missing ports default to
    /// [`DEFAULT_DNS_PORT`]. Host names are looked up once, with the system resolver.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidServer`] if the address can't be parsed or resolved.
    pub fn server_addr(&self) -> Result<SocketAddr, Error> {
        let server = self.server.trim();
        if let Ok(addr) = SocketAddr::from_str(server) {
            return Ok(addr);
        }
        let bare = server.trim_start_matches('[').trim_end_matches(']');
        if let Ok(ip) = IpAddr::from_str(bare) {
            return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
        }

        let (host, port) = match server.rsplit_once(':') {
            Some((host, port)) if !host.contains(':') => match port.parse::<u16>() {
                Ok(port) => (host, port),
                Err(_) => return Err(Error::InvalidServer(self.server.clone())),
            },
            _ => (server, DEFAULT_DNS_PORT),
        };
        if host.is_empty() {
            return Err(Error::InvalidServer(self.server.clone()));
        }
        (host, port)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| Error::InvalidServer(self.server.clone()))
    }
}
