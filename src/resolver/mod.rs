//! Single-shot CNAME and TXT lookups.
//!
//! A [`Resolver`] sends exactly one query per call to the resolver it was built for, with no
//! retries, no fallback server and no caching. Every failure is reported as a
//! [`ResolverError`]; callers in this crate treat all of them as "record absent".
//!
//! [`DnsResolver`] is the network implementation, built on [`trust_dns_client`]'s blocking
//! [`SyncClient`][trust_dns_client::client::SyncClient].

use crate::config::AnswerPolicy;
use std::fmt;
use trust_dns_client::error::ClientError;
use trust_dns_proto::error::ProtoError;
use trust_dns_proto::rr::{Name, RData, Record, RecordType};

pub mod dns;
#[cfg(test)]
pub(crate) mod fake;

#[allow(clippy::module_name_repetitions)]
pub use dns::DnsResolver;

/// The record types a challenge check looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Cname,
    Txt,
}

impl From<RecordKind> for RecordType {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Cname => RecordType::CNAME,
            RecordKind::Txt => RecordType::TXT,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&RecordType::from(*self), f)
    }
}

/// Lookup failures. None of them are fatal to a run.
#[derive(thiserror::Error, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ResolverError {
    /// The response carried no usable answer records.
    #[error("record not found")]
    RecordNotFound,

    /// The first answer record wasn't of the queried type, e.g. a `CNAME` returned for a `TXT`
    /// query at an aliased name.
    #[error("expected a {expected} answer, found {found}")]
    Mismatched {
        expected: RecordType,
        found: RecordType,
    },

    /// The name to query isn't a valid DNS name.
    #[error("invalid DNS name: {0}")]
    InvalidName(#[from] ProtoError),

    /// The exchange with the resolver failed: timeout, refused connection, malformed response.
    #[error("DNS exchange failed: {0}")]
    Transport(#[from] ClientError),
}

/// A DNS lookup capability bound to one resolver.
pub trait Resolver {
    /// Query `name` for records of `kind`, returning the decoded values in answer order.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolverError`] when no values could be decoded for any reason.
    fn query(&self, name: &str, kind: RecordKind) -> Result<Vec<String>, ResolverError>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn query(&self, name: &str, kind: RecordKind) -> Result<Vec<String>, ResolverError> {
        (**self).query(name, kind)
    }
}

/// Decode the answer section of a response to a `kind` query for `name`.
pub(crate) fn decode(
    answers: &[Record],
    name: &Name,
    kind: RecordKind,
    policy: AnswerPolicy,
) -> Result<Vec<String>, ResolverError> {
    let values: Vec<String> = match policy {
        AnswerPolicy::First => match answers.first() {
            None => return Err(ResolverError::RecordNotFound),
            Some(first) => decode_record(first, kind)?,
        },
        AnswerPolicy::All => answers
            .iter()
            .filter(|r| r.record_type() == RecordType::from(kind) && r.name() == name)
            .filter_map(|r| decode_record(r, kind).ok())
            .flatten()
            .collect(),
    };

    if values.is_empty() {
        return Err(ResolverError::RecordNotFound);
    }
    Ok(values)
}

fn decode_record(record: &Record, kind: RecordKind) -> Result<Vec<String>, ResolverError> {
    match (kind, record.data()) {
        (RecordKind::Cname, Some(RData::CNAME(target))) => Ok(vec![target.to_string()]),
        (RecordKind::Txt, Some(RData::TXT(txt))) => Ok(txt
            .txt_data()
            .iter()
            .map(|s| String::from_utf8_lossy(s).into_owned())
            .collect()),
        _ => Err(ResolverError::Mismatched {
            expected: kind.into(),
            found: record.record_type(),
        }),
    }
}
