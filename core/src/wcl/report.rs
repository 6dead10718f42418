use std::fmt;
use std::str::FromStr;

use super::error::WclError;

const REPORT_PATH: &str = "/reports/";
const REPORT_CODE_LEN: usize = 16;

/// The 16 character code identifying a report
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportCode(String);

impl ReportCode {
    /// Extract the report code from a report URL.
    ///
    /// Anything after the code (`?query`, `#fragment`) is ignored. A bare code
    /// is accepted as well since it has nothing to split on.
    pub fn from_url(url: &str) -> Result<Self, WclError> {
        let tail = url.rsplit(REPORT_PATH).next().unwrap_or(url);
        let code = tail
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        if code.chars().count() != REPORT_CODE_LEN {
            return Err(WclError::InvalidReportUrl {
                url: url.to_string(),
            });
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which fight of a report to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FightSelector {
    /// Last Mythic+ fight, or the last fight if the report has none
    #[default]
    Last,
    Id(u32),
}

impl FromStr for FightSelector {
    type Err = WclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("last") {
            return Ok(Self::Last);
        }
        s.parse::<u32>()
            .map(Self::Id)
            .map_err(|_| WclError::InvalidFightId {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for FightSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Last => f.write_str("last"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}
