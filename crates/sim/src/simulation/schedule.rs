//! Seasonal demography of the aestivating compartment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Season of a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Breeding season; few individuals aestivate.
    Wet,
    /// Harsh season; most individuals aestivate.
    Dry,
}

impl Season {
    /// The other season.
    pub fn other(self) -> Self {
        match self {
            Season::Wet => Season::Dry,
            Season::Dry => Season::Wet,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Wet => write!(f, "wet"),
            Season::Dry => write!(f, "dry"),
        }
    }
}

impl std::str::FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wet" => Ok(Season::Wet),
            "dry" => Ok(Season::Dry),
            _ => Err(format!("Unknown season: {s}. Available: wet, dry")),
        }
    }
}

/// Alternating wet/dry seasons, each lasting `half_period` generations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalSchedule {
    /// Generations per season
    pub half_period: usize,
    /// Aestivating individuals during the wet season
    pub wet_aestivating: usize,
    /// Aestivating individuals during the dry season
    pub dry_aestivating: usize,
    /// Season of generation 0
    pub start_in: Season,
}

impl SeasonalSchedule {
    /// Create a schedule starting in the wet season.
    pub fn new(half_period: usize, wet_aestivating: usize, dry_aestivating: usize) -> Self {
        Self {
            half_period,
            wet_aestivating,
            dry_aestivating,
            start_in: Season::Wet,
        }
    }

    /// A schedule whose aestivating size never changes.
    pub fn constant(aestivating: usize) -> Self {
        Self::new(1, aestivating, aestivating)
    }

    /// Season of `generation`.
    pub fn season_at(&self, generation: usize) -> Season {
        if (generation / self.half_period.max(1)) % 2 == 0 {
            self.start_in
        } else {
            self.start_in.other()
        }
    }

    /// Target aestivating size for `generation`.
    pub fn aestivating_at(&self, generation: usize) -> usize {
        match self.season_at(generation) {
            Season::Wet => self.wet_aestivating,
            Season::Dry => self.dry_aestivating,
        }
    }

    /// Largest aestivating size the schedule asks for.
    pub fn max_aestivating(&self) -> usize {
        self.wet_aestivating.max(self.dry_aestivating)
    }
}

impl Default for SeasonalSchedule {
    fn default() -> Self {
        Self::new(6, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seasons_alternate_every_half_period() {
        let s = SeasonalSchedule::new(3, 10, 90);
        let seasons: Vec<Season> = (0..8).map(|g| s.season_at(g)).collect();
        use Season::*;
        assert_eq!(seasons, vec![Wet, Wet, Wet, Dry, Dry, Dry, Wet, Wet]);
        assert_eq!(s.aestivating_at(0), 10);
        assert_eq!(s.aestivating_at(4), 90);
    }

    #[test]
    fn test_start_in_dry() {
        let s = SeasonalSchedule {
            start_in: Season::Dry,
            ..SeasonalSchedule::new(2, 1, 5)
        };
        assert_eq!(s.aestivating_at(0), 5);
        assert_eq!(s.aestivating_at(2), 1);
    }

    #[test]
    fn test_constant() {
        let s = SeasonalSchedule::constant(4);
        assert!((0..20).all(|g| s.aestivating_at(g) == 4));
        assert_eq!(s.max_aestivating(), 4);
    }

    #[test]
    fn test_season_parse() {
        assert_eq!("dry".parse::<Season>().unwrap(), Season::Dry);
        assert_eq!(Season::Wet.to_string(), "wet");
        assert!("spring".parse::<Season>().is_err());
    }
}
