//! Version constraint expressions.
//!
//! A constraint is a comma-joined conjunction of clauses, each an operator
//! plus a version (`>=1.2,<2.0`). Evaluation runs in one of two modes,
//! decided per clause:
//!
//! - **Semantic**: both the installed version and the clause version parse
//!   as [`Version`]; operators follow their strict definitions.
//! - **Reduced**: either side fails semantic parsing. Only `==` (raw
//!   string equality) and `>=` (lexicographic comparison of `.`-split
//!   components) are supported; every other operator assumes the clause is
//!   satisfied. This mirrors the limited fallback of the original checker
//!   and is a documented contract, not a defect — do not tighten it.

use crate::version::semantic::Version;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A constraint expression that could not be parsed strictly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid constraint: {0:?}")]
pub struct InvalidConstraint(pub String);

/// Comparison operator of a single clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `==`
    Exact,
    /// `!=`
    NotEqual,
    /// `>=`
    GreaterEq,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `~=` compatible release
    Compatible,
}

impl CompareOp {
    /// Split a clause into its operator and the remaining version text.
    ///
    /// Two-character operators take precedence over their one-character
    /// prefixes.
    pub fn split(clause: &str) -> Option<(Self, &str)> {
        let ops = [
            ("==", Self::Exact),
            ("!=", Self::NotEqual),
            (">=", Self::GreaterEq),
            ("<=", Self::LessEq),
            ("~=", Self::Compatible),
            (">", Self::Greater),
            ("<", Self::Less),
        ];
        for (symbol, op) in ops {
            if let Some(rest) = clause.strip_prefix(symbol) {
                return Some((op, rest.trim()));
            }
        }
        None
    }

    /// The operator's manifest spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Exact => "==",
            Self::NotEqual => "!=",
            Self::GreaterEq => ">=",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Compatible => "~=",
        }
    }
}

/// One operator+version clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    pub op: CompareOp,
    /// Version text as written, without any wildcard suffix.
    pub version: String,
    /// `==1.4.*` / `!=1.4.*` prefix form (strict parse only).
    pub wildcard: bool,
}

impl Comparator {
    /// Parse a clause strictly: operator recognized, version well-formed,
    /// wildcards only on equality operators.
    pub fn parse(clause: &str) -> Result<Self, InvalidConstraint> {
        let (op, rest) = CompareOp::split(clause.trim())
            .ok_or_else(|| InvalidConstraint(clause.to_string()))?;
        if rest.is_empty() || rest.contains(char::is_whitespace) {
            return Err(InvalidConstraint(clause.to_string()));
        }

        if let Some(prefix) = rest.strip_suffix(".*") {
            if !matches!(op, CompareOp::Exact | CompareOp::NotEqual) {
                return Err(InvalidConstraint(clause.to_string()));
            }
            Version::parse(prefix).map_err(|_| InvalidConstraint(clause.to_string()))?;
            return Ok(Self {
                op,
                version: prefix.to_string(),
                wildcard: true,
            });
        }

        let version =
            Version::parse(rest).map_err(|_| InvalidConstraint(clause.to_string()))?;
        if op == CompareOp::Compatible && version.release().len() < 2 {
            // ~= needs at least major.minor to define a compatible range
            return Err(InvalidConstraint(clause.to_string()));
        }
        Ok(Self {
            op,
            version: rest.to_string(),
            wildcard: false,
        })
    }

    /// Parse a clause leniently: operator recognized, version text kept as
    /// written. Used by the permissive manifest fallback; evaluation of an
    /// unparseable version degrades to reduced mode.
    pub fn parse_lenient(clause: &str) -> Option<Self> {
        let (op, rest) = CompareOp::split(clause.trim())?;
        if rest.is_empty() {
            return None;
        }
        Some(Self {
            op,
            version: rest.to_string(),
            wildcard: false,
        })
    }

    /// Whether `installed` satisfies this clause.
    pub fn satisfied_by(&self, installed: &str) -> bool {
        if self.wildcard {
            return self.eval_wildcard(installed);
        }
        match (Version::parse(installed), Version::parse(&self.version)) {
            (Ok(have), Ok(want)) => self.eval_semantic(&have, &want),
            _ => self.eval_reduced(installed),
        }
    }

    fn eval_semantic(&self, have: &Version, want: &Version) -> bool {
        match self.op {
            CompareOp::Exact => have == want,
            CompareOp::NotEqual => have != want,
            CompareOp::GreaterEq => have >= want,
            CompareOp::LessEq => have <= want,
            CompareOp::Greater => have > want,
            CompareOp::Less => have < want,
            CompareOp::Compatible => {
                let len = want.release().len();
                if len < 2 {
                    // Undefined range (lenient parse let it through):
                    // assume satisfied, as reduced mode does.
                    return true;
                }
                have >= want && have.release_prefix(len - 1) == want.release_prefix(len - 1)
            }
        }
    }

    fn eval_wildcard(&self, installed: &str) -> bool {
        let (have, want) = match (Version::parse(installed), Version::parse(&self.version)) {
            (Ok(h), Ok(w)) => (h, w),
            // Wildcards are outside the reduced mode's vocabulary
            _ => return true,
        };
        let len = want.release().len();
        let matches = have.release_prefix(len) == want.release_prefix(len);
        match self.op {
            CompareOp::NotEqual => !matches,
            _ => matches,
        }
    }

    fn eval_reduced(&self, installed: &str) -> bool {
        match self.op {
            CompareOp::Exact => installed == self.version,
            CompareOp::GreaterEq => {
                let have: Vec<&str> = installed.split('.').collect();
                let want: Vec<&str> = self.version.split('.').collect();
                have >= want
            }
            // Unsupported in reduced mode: assume satisfied
            _ => true,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.symbol(), self.version)?;
        if self.wildcard {
            write!(f, ".*")?;
        }
        Ok(())
    }
}

/// A conjunction of clauses; every clause must hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    clauses: Vec<Comparator>,
}

impl Constraint {
    /// Parse a comma-joined constraint expression strictly.
    pub fn parse(spec: &str) -> Result<Self, InvalidConstraint> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(InvalidConstraint(spec.to_string()));
        }
        let clauses = spec
            .split(',')
            .map(Comparator::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { clauses })
    }

    /// Build a constraint from a single leniently-parsed clause.
    pub fn single(clause: Comparator) -> Self {
        Self {
            clauses: vec![clause],
        }
    }

    /// The individual clauses.
    pub fn clauses(&self) -> &[Comparator] {
        &self.clauses
    }

    /// Whether `installed` satisfies every clause.
    pub fn satisfied_by(&self, installed: &str) -> bool {
        self.clauses.iter().all(|c| c.satisfied_by(installed))
    }
}

impl FromStr for Constraint {
    type Err = InvalidConstraint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.clauses.iter().map(Comparator::to_string).collect();
        write!(f, "{}", rendered.join(","))
    }
}

impl Serialize for Constraint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
