use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The toggle button shows the theme you'd switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    /// Background painted behind leaderboard snapshots.
    pub fn capture_background(self) -> &'static str {
        match self {
            Theme::Light => "#f4f7f6",
            Theme::Dark => "#121212",
        }
    }

    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark-mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("unknown theme {}", s)),
        }
    }
}

/// Admin actions that need the league password before they're sent.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PendingAction {
    DeleteMatch(i64),
    EditMatch(i64),
    DeletePlayer(i64),
    DeleteLeague(String),
}

impl fmt::Display for PendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingAction::DeleteMatch(id) => write!(f, "delete match #{}", id),
            PendingAction::EditMatch(id) => write!(f, "edit match #{}", id),
            PendingAction::DeletePlayer(id) => write!(f, "delete player #{}", id),
            PendingAction::DeleteLeague(slug) => write!(f, "delete league {}", slug),
        }
    }
}

/// An open password prompt. It holds the action it was opened for, so there
/// is no page-wide "current target" to go stale.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Prompt {
    pub action: PendingAction,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Confirmed {
    pub action: PendingAction,
    pub admin_password: String,
}

impl Prompt {
    pub fn new(action: PendingAction) -> Self {
        Self { action }
    }

    /// `None` means the prompt was cancelled. An empty password is treated
    /// the same way.
    pub fn resolve(self, answer: Option<String>) -> Option<Confirmed> {
        match answer {
            Some(admin_password) if !admin_password.is_empty() => Some(Confirmed {
                action: self.action,
                admin_password,
            }),
            _ => {
                debug!("prompt to {} dismissed", self.action);
                None
            }
        }
    }
}
