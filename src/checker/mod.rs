//! DNS-01 challenge record checks.
//!
//! For each domain the [`Checker`] looks up, in order:
//!
//! 1. the `CNAME` at the challenge label (see [`normalize`]),
//! 2. the `TXT` records at the CNAME target, only when a CNAME was found,
//! 3. the `TXT` records directly at the challenge label.
//!
//! The results are folded into an [`Outcome`]. Lookup failures of any kind count as the record
//! being absent, so a check always completes.
//!
//! ```bash
//! ❯ dig +short _acme-challenge.example.com CNAME
//! abcd.acme-dns.io.
//! ❯ dig +short abcd.acme-dns.io TXT
//! "token123"
//! ```
//!
//! With the records above, checking `example.com` yields [`Outcome::CnameWithTxt`].

mod name;
mod outcome;

pub use name::{normalize, CHALLENGE_LABEL};
pub use outcome::Outcome;

use crate::resolver::{RecordKind, Resolver, ResolverError};
use serde::Serialize;
use tracing::{debug, info};

/// The reportable result of one lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Answer {
    Found { values: Vec<String> },
    Absent { reason: String },
    /// The lookup wasn't needed.
    Skipped,
}

impl Answer {
    /// The found values, empty unless [`Answer::Found`].
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::Found { values } => values,
            Self::Absent { .. } | Self::Skipped => &[],
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.values().is_empty()
    }
}

/// Everything learned about one challenge label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The normalized challenge label that was queried.
    pub name: String,
    pub cname: Answer,
    pub txt_at_cname: Answer,
    pub txt_direct: Answer,
    pub outcome: Outcome,
}

impl Report {
    #[must_use]
    pub fn cname_target(&self) -> Option<&str> {
        self.cname.values().first().map(String::as_str)
    }

    /// TXT records published directly at a label that also has a CNAME. Unusual for DNS-01, but
    /// not an error, so they are only worth a note.
    #[must_use]
    pub fn straight_txt_note(&self) -> Option<&[String]> {
        if self.cname.is_found() && self.txt_direct.is_found() {
            Some(self.txt_direct.values())
        } else {
            None
        }
    }
}

/// Runs challenge checks against a [`Resolver`].
#[derive(Debug, Clone)]
pub struct Checker<R> {
    resolver: R,
}

impl<R: Resolver> Checker<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Check the challenge records for a domain argument.
    pub fn check(&self, raw_name: &str) -> Report {
        let name = normalize(raw_name);
        let cname = self.lookup(&name, RecordKind::Cname);
        let txt_at_cname = match cname.values().first() {
            Some(target) => self.lookup(target, RecordKind::Txt),
            None => Answer::Skipped,
        };
        let txt_direct = self.lookup(&name, RecordKind::Txt);

        let outcome = Outcome::classify(
            cname.is_found(),
            txt_at_cname.is_found(),
            txt_direct.is_found(),
        );
        info!(%name, %outcome, "checked");
        Report {
            name,
            cname,
            txt_at_cname,
            txt_direct,
            outcome,
        }
    }

    fn lookup(&self, name: &str, kind: RecordKind) -> Answer {
        match self.resolver.query(name, kind) {
            Ok(values) if !values.is_empty() => Answer::Found { values },
            Ok(_) => Answer::Absent {
                reason: ResolverError::RecordNotFound.to_string(),
            },
            Err(err) => {
                debug!(%name, %kind, error = %err, "lookup failed");
                Answer::Absent {
                    reason: err.to_string(),
                }
            }
        }
    }
}
