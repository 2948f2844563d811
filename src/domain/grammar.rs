//! The two textual encodings of an addon version
//!
//! - Dotted: `R.F.P.S.I.BR.BF.BP[.B]` where `S` is the state ordinal
//! - Semver: `R.F.P-STATE[I]-BR.BF.BP[+B]` where `STATE` is the state name
//!
//! Both patterns are anchored. Matching only captures the raw groups; turning
//! them into a `Version` is left to the caller so both grammars share one
//! conversion path.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const VERSION_PART: &str = r"(?P<r>[0-9]+)[.](?P<f>[0-9]+)[.](?P<p>[0-9]+)";
const HOST_PART: &str = r"(?P<br>[0-9]+)[.](?P<bf>[0-9]+)[.](?P<bp>[0-9]+)";

static DOTTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{VERSION_PART}[.](?P<s>[0-9])[.](?P<i>[0-9]+)[.]{HOST_PART}(?:[.](?P<b>[0-9]+))?$"
    ))
    .expect("dotted version pattern is valid")
});

static SEMVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{VERSION_PART}-(?P<s>[a-zA-Z]+)(?P<i>[0-9]+)?-{HOST_PART}(?:[+](?P<b>[0-9]+))?$"
    ))
    .expect("semver version pattern is valid")
});

/// Which encoding produced a set of captures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Dotted,
    Semver,
}

/// Raw captured groups of a matched version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub grammar: Grammar,
    pub release: &'a str,
    pub feature: &'a str,
    pub patch: &'a str,
    /// Digit for the dotted form, name for the semver form
    pub state: &'a str,
    pub increment: Option<&'a str>,
    pub brelease: &'a str,
    pub bfeature: &'a str,
    pub bpatch: &'a str,
    pub build: Option<&'a str>,
}

impl<'a> RawFields<'a> {
    fn from_captures(grammar: Grammar, caps: &Captures<'a>) -> Option<Self> {
        let group = |name: &str| caps.name(name).map(|m| m.as_str());

        Some(RawFields {
            grammar,
            release: group("r")?,
            feature: group("f")?,
            patch: group("p")?,
            state: group("s")?,
            increment: group("i"),
            brelease: group("br")?,
            bfeature: group("bf")?,
            bpatch: group("bp")?,
            build: group("b"),
        })
    }
}

/// Matches the all-numeric dotted encoding
pub fn match_dotted(input: &str) -> Option<RawFields<'_>> {
    let caps = DOTTED_RE.captures(input)?;
    RawFields::from_captures(Grammar::Dotted, &caps)
}

/// Matches the semver-like encoding with a named release state
pub fn match_semver(input: &str) -> Option<RawFields<'_>> {
    let caps = SEMVER_RE.captures(input)?;
    RawFields::from_captures(Grammar::Semver, &caps)
}
