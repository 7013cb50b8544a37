//! Data sections which are refreshed periodically from ESI.
//!
//! The status of each section tells the GUI whether data has been loaded at all, whether it
//! is still current, and whether the last update failed. Views use this to distinguish an
//! empty result from data that simply has not arrived yet.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A section of character data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterSection {
    Assets,
    Attributes,
    Contracts,
    Implants,
    IndustryJobs,
    JumpClones,
    Location,
    Mails,
    Online,
    Ship,
    Skillqueue,
    Skills,
    WalletBalance,
    WalletJournal,
    WalletTransactions,
}

impl CharacterSection {
    pub const ALL: [CharacterSection; 15] = [
        Self::Assets,
        Self::Attributes,
        Self::Contracts,
        Self::Implants,
        Self::IndustryJobs,
        Self::JumpClones,
        Self::Location,
        Self::Mails,
        Self::Online,
        Self::Ship,
        Self::Skillqueue,
        Self::Skills,
        Self::WalletBalance,
        Self::WalletJournal,
        Self::WalletTransactions,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Assets => "Assets",
            Self::Attributes => "Attributes",
            Self::Contracts => "Contracts",
            Self::Implants => "Implants",
            Self::IndustryJobs => "Industry Jobs",
            Self::JumpClones => "Jump Clones",
            Self::Location => "Location",
            Self::Mails => "Mails",
            Self::Online => "Online",
            Self::Ship => "Ship",
            Self::Skillqueue => "Skillqueue",
            Self::Skills => "Skills",
            Self::WalletBalance => "Wallet Balance",
            Self::WalletJournal => "Wallet Journal",
            Self::WalletTransactions => "Wallet Transactions",
        }
    }

    /// Time until data of this section becomes stale.
    pub fn timeout(self) -> Duration {
        let seconds = match self {
            Self::Assets => 3600,
            Self::Attributes | Self::Implants | Self::JumpClones => 120,
            Self::Contracts | Self::IndustryJobs | Self::Location | Self::Ship => 300,
            Self::Mails | Self::Online => 60,
            Self::Skillqueue | Self::Skills => 120,
            Self::WalletBalance | Self::WalletJournal | Self::WalletTransactions => 3600,
        };
        Duration::seconds(seconds)
    }
}

impl fmt::Display for CharacterSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A section of data shared by all characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneralSection {
    MarketPrices,
    Universe,
}

impl GeneralSection {
    pub fn timeout(self) -> Duration {
        match self {
            Self::MarketPrices => Duration::hours(6),
            Self::Universe => Duration::hours(24),
        }
    }
}

/// Update status of a section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionStatus {
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
    pub timeout: Duration,
}

impl SectionStatus {
    /// Reports whether the section has never been loaded.
    pub fn is_missing(&self) -> bool {
        self.completed_at.is_none()
    }

    pub fn is_ok(&self) -> bool {
        self.error_message.as_deref().map_or(true, str::is_empty)
    }

    /// Reports whether loaded data is still within its timeout.
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.completed_at
            .is_some_and(|completed_at| completed_at + self.timeout > now)
    }

    /// Reports whether an update has started and not completed yet.
    pub fn is_running(&self) -> bool {
        match (self.started_at, self.completed_at) {
            (Some(started), Some(completed)) => started > completed,
            (Some(_), None) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(completed_minutes_ago: Option<i64>) -> SectionStatus {
        let now = Utc::now();
        SectionStatus {
            started_at: None,
            completed_at: completed_minutes_ago.map(|m| now - Duration::minutes(m)),
            error_message: None,
            timeout: CharacterSection::Assets.timeout(),
        }
    }

    /// Expect a section without completion time to be missing and not current
    #[test]
    fn missing_section() {
        let s = status(None);
        assert!(s.is_missing());
        assert!(!s.is_current(Utc::now()));
    }

    /// Expect a section to become stale after its timeout
    #[test]
    fn current_until_timeout() {
        assert!(status(Some(10)).is_current(Utc::now()));
        assert!(!status(Some(61)).is_current(Utc::now()));
    }

    /// Expect a started but not yet completed update to be running
    #[test]
    fn running_update() {
        let mut s = status(Some(10));
        assert!(!s.is_running());
        s.started_at = Some(Utc::now());
        assert!(s.is_running());
    }

    /// Expect an empty error message to count as ok
    #[test]
    fn error_message_controls_ok() {
        let mut s = status(Some(1));
        s.error_message = Some(String::new());
        assert!(s.is_ok());
        s.error_message = Some("ESI down".to_string());
        assert!(!s.is_ok());
    }
}
