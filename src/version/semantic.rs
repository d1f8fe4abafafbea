//! Semantic version parsing and ordering.
//!
//! Implements the PEP 440 version scheme as pip-installed packages use it:
//! optional epoch, dotted numeric release, pre-release (`a`/`b`/`rc`),
//! post-release, and dev-release segments. Local version labels (`+cpu`)
//! are accepted and ignored for ordering. Trailing zero components are
//! insignificant: `1.0` and `1.0.0` compare equal.
//!
//! Versions that do not fit this scheme (date stamps, git hashes) fail to
//! parse; callers degrade to the reduced-accuracy string comparison in
//! [`crate::version::constraint`].

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)^
        v?
        (?:(?P<epoch>[0-9]+)!)?
        (?P<release>[0-9]+(?:\.[0-9]+)*)
        (?:[._-]?(?P<pre_tag>alpha|a|beta|b|preview|pre|rc|c)[._-]?(?P<pre_n>[0-9]*))?
        (?:-(?P<post_implicit>[0-9]+)|[._-]?(?:post|rev|r)[._-]?(?P<post_n>[0-9]*))?
        (?:[._-]?dev[._-]?(?P<dev_n>[0-9]*))?
        (?:\+[a-z0-9]+(?:[._-][a-z0-9]+)*)?
        $",
    )
    .expect("VERSION_RE must compile")
});

/// A version string that does not follow the PEP 440 scheme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version: {0:?}")]
pub struct InvalidVersion(pub String);

/// Pre-release phase, ordered alpha < beta < release candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreTag {
    Alpha,
    Beta,
    Rc,
}

impl PreTag {
    fn from_label(label: &str) -> Self {
        match label {
            "a" | "alpha" => Self::Alpha,
            "b" | "beta" => Self::Beta,
            // "pre"/"preview" normalize to rc, matching pip
            _ => Self::Rc,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Alpha => "a",
            Self::Beta => "b",
            Self::Rc => "rc",
        }
    }
}

/// A parsed package version.
///
/// Ordering follows PEP 440: epoch first, then the release components
/// (zero-padded to equal length), then dev < pre-release < final < post.
#[derive(Debug, Clone)]
pub struct Version {
    epoch: u64,
    release: Vec<u64>,
    pre: Option<(PreTag, u64)>,
    post: Option<u64>,
    dev: Option<u64>,
}

impl Version {
    /// Parse a version string.
    pub fn parse(input: &str) -> Result<Self, InvalidVersion> {
        let normalized = input.trim().to_ascii_lowercase();
        let caps = VERSION_RE
            .captures(&normalized)
            .ok_or_else(|| InvalidVersion(input.to_string()))?;

        let parse_num = |s: &str| -> Result<u64, InvalidVersion> {
            s.parse::<u64>()
                .map_err(|_| InvalidVersion(input.to_string()))
        };
        // An empty segment number means zero: "1.0a" is "1.0a0"
        let segment_num = |m: regex::Match<'_>| -> Result<u64, InvalidVersion> {
            if m.as_str().is_empty() {
                Ok(0)
            } else {
                parse_num(m.as_str())
            }
        };

        let epoch = match caps.name("epoch") {
            Some(m) => parse_num(m.as_str())?,
            None => 0,
        };
        let release = caps["release"]
            .split('.')
            .map(parse_num)
            .collect::<Result<Vec<_>, _>>()?;

        let pre = match caps.name("pre_tag") {
            Some(tag) => {
                let n = caps.name("pre_n").map(segment_num).transpose()?.unwrap_or(0);
                Some((PreTag::from_label(tag.as_str()), n))
            }
            None => None,
        };

        // A capture group participates only when its branch matched, so
        // presence of post_n/dev_n (even empty) means the segment was there.
        let post = match (caps.name("post_implicit"), caps.name("post_n")) {
            (Some(m), _) => Some(parse_num(m.as_str())?),
            (None, Some(m)) => Some(segment_num(m)?),
            (None, None) => None,
        };

        let dev = caps.name("dev_n").map(segment_num).transpose()?;

        Ok(Self {
            epoch,
            release,
            pre,
            post,
            dev,
        })
    }

    /// Release components as parsed (no zero padding).
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    /// Whether this is a pre-release or dev-release.
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some() || self.dev.is_some()
    }

    /// The release truncated to `len` components, zero-padded if shorter.
    ///
    /// Used for wildcard (`==1.4.*`) and compatible-release (`~=`) prefix
    /// matching.
    pub fn release_prefix(&self, len: usize) -> Vec<u64> {
        (0..len)
            .map(|i| self.release.get(i).copied().unwrap_or(0))
            .collect()
    }

    fn sort_key(&self) -> (u8, u8, u64, u8, u64, u8, u64) {
        let (pre_rank, pre_tag, pre_num) = match (&self.pre, self.dev) {
            // A dev-only release sorts before any pre-release of the same version
            (None, Some(_)) => (0, 0, 0),
            (Some((tag, n)), _) => (1, *tag as u8 + 1, *n),
            (None, None) => (2, 0, 0),
        };
        let (post_rank, post_num) = match self.post {
            None => (0, 0),
            Some(n) => (1, n),
        };
        let (dev_rank, dev_num) = match self.dev {
            Some(n) => (0, n),
            None => (1, 0),
        };
        (
            pre_rank, pre_tag, pre_num, post_rank, post_num, dev_rank, dev_num,
        )
    }
}

fn cmp_release(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| cmp_release(&self.release, &other.release))
            .then_with(|| self.sort_key().cmp(&other.sort_key()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl FromStr for Version {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}!", self.epoch)?;
        }
        let release: Vec<String> = self.release.iter().map(u64::to_string).collect();
        write!(f, "{}", release.join("."))?;
        if let Some((tag, n)) = &self.pre {
            write!(f, "{}{}", tag.label(), n)?;
        }
        if let Some(n) = self.post {
            write!(f, ".post{}", n)?;
        }
        if let Some(n) = self.dev {
            write!(f, ".dev{}", n)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn parses_plain_release() {
        let version = v("1.2.3");
        assert_eq!(version.release(), &[1, 2, 3]);
        assert!(!version.is_prerelease());
    }

    #[test]
    fn ordering_is_component_wise() {
        assert!(v("1.2.3") < v("1.3.0"));
        assert!(v("1.3.0") < v("2.0.0"));
        assert!(v("1.2.2") < v("1.2.3"));
        assert!(v("10.0") > v("9.99.99"));
    }

    #[test]
    fn trailing_zeros_are_insignificant() {
        assert_eq!(v("1.0"), v("1.0.0"));
        assert_eq!(v("1"), v("1.0.0.0"));
        assert!(v("1.0") < v("1.0.1"));
    }

    #[test]
    fn prerelease_orders_before_final() {
        assert!(v("1.0a1") < v("1.0"));
        assert!(v("1.0b1") < v("1.0rc1"));
        assert!(v("1.0a2") < v("1.0b1"));
        assert!(v("1.0rc1") < v("1.0"));
    }

    #[test]
    fn dev_orders_before_prerelease() {
        assert!(v("1.0.dev1") < v("1.0a1"));
        assert!(v("1.0a1.dev1") < v("1.0a1"));
        assert!(v("1.0.dev1") < v("1.0.dev2"));
    }

    #[test]
    fn post_orders_after_final() {
        assert!(v("1.0") < v("1.0.post1"));
        assert!(v("1.0.post1") < v("1.0.1"));
    }

    #[test]
    fn epoch_dominates() {
        assert!(v("1!1.0") > v("2.0"));
        assert!(v("1!1.0") < v("1!1.1"));
    }

    #[test]
    fn separator_variants_normalize() {
        assert_eq!(v("1.0-alpha.1"), v("1.0a1"));
        assert_eq!(v("1.0preview2"), v("1.0rc2"));
        assert_eq!(v("1.0a"), v("1.0a0"));
    }

    #[test]
    fn local_label_is_ignored() {
        assert_eq!(v("1.13.1+cpu"), v("1.13.1"));
    }

    #[test]
    fn leading_v_is_accepted() {
        assert_eq!(v("v2.1.0"), v("2.1.0"));
    }

    #[test]
    fn rejects_non_semantic_strings() {
        assert!(Version::parse("not-a-version").is_err());
        assert!(Version::parse("2023-05-01").is_err());
        assert!(Version::parse("").is_err());
        assert!(Version::parse("1.2.x").is_err());
    }

    #[test]
    fn release_prefix_pads_and_truncates() {
        assert_eq!(v("1.4.2").release_prefix(2), vec![1, 4]);
        assert_eq!(v("1.4").release_prefix(3), vec![1, 4, 0]);
    }

    #[test]
    fn display_round_trips_canonical_forms() {
        assert_eq!(v("1.2.3").to_string(), "1.2.3");
        assert_eq!(v("1.0-alpha.1").to_string(), "1.0a1");
        assert_eq!(v("2!1.0.post1").to_string(), "2!1.0.post1");
        assert_eq!(v("1.0.dev3").to_string(), "1.0.dev3");
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: Version = "1.2.3".parse().unwrap();
        assert_eq!(parsed, v("1.2.3"));
    }
}
