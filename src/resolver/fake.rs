//! A canned [`Resolver`] for tests.

use crate::resolver::{RecordKind, Resolver, ResolverError};
use std::cell::RefCell;
use std::collections::HashMap;
use trust_dns_client::error::{ClientError, ClientErrorKind};

/// Canned response for one (name, kind) pair.
#[derive(Debug, Clone)]
pub(crate) enum Canned {
    Values(Vec<String>),
    NotFound,
    Timeout,
}

/// Answers from a fixed table and records every query it receives. Unknown queries are
/// [`ResolverError::RecordNotFound`].
#[derive(Debug, Default)]
pub(crate) struct FakeResolver {
    answers: HashMap<(String, RecordKind), Canned>,
    pub(crate) queries: RefCell<Vec<(String, RecordKind)>>,
}

impl FakeResolver {
    pub(crate) fn with(mut self, name: &str, kind: RecordKind, canned: Canned) -> Self {
        self.answers.insert((name.to_string(), kind), canned);
        self
    }

    pub(crate) fn with_values(self, name: &str, kind: RecordKind, values: &[&str]) -> Self {
        let values = values.iter().map(ToString::to_string).collect();
        self.with(name, kind, Canned::Values(values))
    }
}

impl Resolver for FakeResolver {
    fn query(&self, name: &str, kind: RecordKind) -> Result<Vec<String>, ResolverError> {
        self.queries.borrow_mut().push((name.to_string(), kind));
        match self.answers.get(&(name.to_string(), kind)) {
            Some(Canned::Values(values)) if !values.is_empty() => Ok(values.clone()),
            Some(Canned::Values(_) | Canned::NotFound) | None => Err(ResolverError::RecordNotFound),
            Some(Canned::Timeout) => Err(ClientError::from(ClientErrorKind::Timeout).into()),
        }
    }
}
