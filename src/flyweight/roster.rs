//! Cricket roster: players shared across matches.

use crate::flyweight::cache::FlyweightCache;
use crate::flyweight::Flyweight;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Attributes that identify a player for sharing purposes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerKey {
    pub name: String,
    pub bowling_style: String,
    pub batting_style: String,
}

impl PlayerKey {
    pub fn new(
        name: impl Into<String>,
        bowling_style: impl Into<String>,
        batting_style: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            bowling_style: bowling_style.into(),
            batting_style: batting_style.into(),
        }
    }
}

/// Shared player record; holds intrinsic attributes only.
#[derive(Debug, PartialEq, Eq)]
pub struct PlayerProfile {
    name: String,
    bowling_style: String,
    batting_style: String,
}

impl PlayerProfile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bowling_style(&self) -> &str {
        &self.bowling_style
    }

    pub fn batting_style(&self) -> &str {
        &self.batting_style
    }
}

/// Per-match figures, supplied at the point of use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub runs: u32,
    pub wickets: u32,
}

impl Flyweight for PlayerProfile {
    type Extrinsic = MatchStats;
    type Output = String;

    fn render(&self, stats: &MatchStats) -> String {
        format!(
            "{} scored {} and took {}",
            self.name, stats.runs, stats.wickets
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Player {attribute} must not be blank")]
    BlankAttribute { attribute: &'static str },
}

/// Hands out one [`PlayerProfile`] per distinct (name, bowling, batting).
#[derive(Default)]
pub struct Roster {
    players: FlyweightCache<PlayerKey, PlayerProfile>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared profile for a player, created on first use.
    pub fn player(
        &self,
        name: &str,
        bowling_style: &str,
        batting_style: &str,
    ) -> Result<Arc<PlayerProfile>, RosterError> {
        self.players.get_or_create(
            PlayerKey::new(name, bowling_style, batting_style),
            build_profile,
        )
    }

    /// Number of distinct players created so far.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

fn build_profile(key: &PlayerKey) -> Result<PlayerProfile, RosterError> {
    let checks = [
        ("name", &key.name),
        ("bowling style", &key.bowling_style),
        ("batting style", &key.batting_style),
    ];
    if let Some(&(attribute, _)) = checks.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(RosterError::BlankAttribute { attribute });
    }

    Ok(PlayerProfile {
        name: key.name.clone(),
        bowling_style: key.bowling_style.clone(),
        batting_style: key.batting_style.clone(),
    })
}
