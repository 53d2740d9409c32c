use serde::Serialize;
use std::fmt;

/// The four mutually exclusive states a challenge label can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// A CNAME is published and its target carries TXT records.
    CnameWithTxt,
    /// A CNAME is published but its target has no TXT records.
    CnameNoTxt,
    /// No CNAME, but TXT records are published directly at the challenge label.
    NoCnameWithTxt,
    /// Neither a CNAME nor TXT records.
    NoCnameNoTxt,
}

impl Outcome {
    /// Fold the presence of the CNAME, the TXT records at its target and the TXT records at the
    /// challenge label into an outcome. CNAME presence takes priority: once a CNAME is found,
    /// direct TXT records don't change the result.
    #[must_use]
    pub fn classify(cname: bool, txt_at_cname: bool, txt_direct: bool) -> Self {
        match (cname, txt_at_cname, txt_direct) {
            (true, true, _) => Self::CnameWithTxt,
            (true, false, _) => Self::CnameNoTxt,
            (false, _, true) => Self::NoCnameWithTxt,
            (false, _, false) => Self::NoCnameNoTxt,
        }
    }

    /// The outcome name as shown in reports, e.g. `CNAME_WITH_TXT`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CnameWithTxt => "CNAME_WITH_TXT",
            Self::CnameNoTxt => "CNAME_NO_TXT",
            Self::NoCnameWithTxt => "NO_CNAME_WITH_TXT",
            Self::NoCnameNoTxt => "NO_CNAME_NO_TXT",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
