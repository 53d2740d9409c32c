use crate::config::{AnswerPolicy, Config, Protocol};
use crate::resolver::{decode, RecordKind, Resolver, ResolverError};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};
use trust_dns_client::client::{Client, SyncClient};
use trust_dns_client::error::{ClientError, ClientErrorKind};
use trust_dns_client::tcp::TcpClientConnection;
use trust_dns_client::udp::UdpClientConnection;
use trust_dns_proto::rr::{DNSClass, Name};

/// A [`Resolver`] that queries one DNS server over the network.
///
/// A fresh connection is opened for every query, so nothing carries over between lookups.
#[derive(Debug, Clone)]
pub struct DnsResolver {
    /// The resolved server, or why it couldn't be resolved.
    server: Result<SocketAddr, String>,
    protocol: Protocol,
    timeout: Duration,
    answers: AnswerPolicy,
}

impl DnsResolver {
    /// Build a resolver for the server, transport and answer policy in `config`.
    ///
    /// A [`Config::server`] that can't be resolved to an address doesn't fail here: every query
    /// then fails with [`ResolverError::Transport`], the same as an unreachable server.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let server = config.server_addr().map_err(|err| {
            warn!(server = %config.server, "{err}");
            err.to_string()
        });
        Self {
            server,
            protocol: config.protocol,
            timeout: config.timeout,
            answers: config.answers,
        }
    }
}

impl Resolver for DnsResolver {
    fn query(&self, name: &str, kind: RecordKind) -> Result<Vec<String>, ResolverError> {
        let name = Name::from_str(name)?;
        let server = match &self.server {
            Ok(server) => *server,
            Err(reason) => {
                return Err(ClientError::from(ClientErrorKind::Msg(reason.clone())).into())
            }
        };
        debug!(%name, %kind, %server, protocol = ?self.protocol, "querying");

        let response = match self.protocol {
            Protocol::Udp => {
                let conn = UdpClientConnection::with_timeout(server, self.timeout)?;
                SyncClient::new(conn).query(&name, DNSClass::IN, kind.into())?
            }
            Protocol::Tcp => {
                let conn = TcpClientConnection::with_timeout(server, self.timeout)?;
                SyncClient::new(conn).query(&name, DNSClass::IN, kind.into())?
            }
        };
        debug!(
            %name,
            %kind,
            code = %response.response_code(),
            answers = response.answers().len(),
            "response"
        );

        decode(response.answers(), &name, kind, self.answers)
    }
}
