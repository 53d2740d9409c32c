//! ACME Check
//!
//! Verifies that [RFC-8555][RFC-8555] [DNS-01] challenge records are published for one or more
//! domains, the way [acme-dns] style setups expect them: a `CNAME` at
//! `_acme-challenge.<domain>` pointing at a name that serves the challenge `TXT` records, or
//! `TXT` records directly at `_acme-challenge.<domain>`.
//!
//! Only the presence of the records is checked, not their content.
//!
//! ```bash
//! ❯ acmecheck -v -dns 9.9.9.9 example.com
//! Checking for DNS name: _acme-challenge.example.com.
//! CNAME resolve: abcd.acme-dns.io.
//! TXTs at CNAME: [LPsIwTo7o8BoG0-vjCyGQGBWSVIPxI-i_X336eUOQZo]
//! Straight TXTs: none (expected a TXT answer, found CNAME)
//! This name has a CNAME record that points to [abcd.acme-dns.io.] and has these TXTs: [LPsIwTo7o8BoG0-vjCyGQGBWSVIPxI-i_X336eUOQZo]
//! ```
//!
//! [acme-dns]: https://github.com/joohoi/acme-dns
//! [RFC-8555]: https://www.rfc-editor.org/rfc/rfc8555
//! [DNS-01]: https://www.rfc-editor.org/rfc/rfc8555#section-8.4
//!
#![warn(clippy::pedantic)]

pub mod app;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod resolver;

pub use checker::{Checker, Outcome, Report};
pub use config::Config;
pub use resolver::{DnsResolver, RecordKind, Resolver};
