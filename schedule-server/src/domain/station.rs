//! Terminal stations and the routes between them.

use std::fmt;

/// One of the two terminals served by the shuttle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    Putrajaya,
    KlSentral,
}

impl Station {
    /// Display name, as shown on departure boards.
    pub fn name(&self) -> &'static str {
        match self {
            Station::Putrajaya => "Putrajaya",
            Station::KlSentral => "KL Sentral",
        }
    }

    /// The terminal at the other end of the line.
    pub fn opposite(&self) -> Station {
        match self {
            Station::Putrajaya => Station::KlSentral,
            Station::KlSentral => Station::Putrajaya,
        }
    }

    /// The platform group departures from this terminal use.
    pub fn platform_group(&self) -> PlatformGroup {
        match self {
            Station::Putrajaya => PlatformGroup::Pj,
            Station::KlSentral => PlatformGroup::Kl,
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of travel for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    pub from: Station,
    pub to: Station,
}

impl Route {
    /// Route departing from `from` towards the other terminal.
    pub fn departing(from: Station) -> Self {
        Self {
            from,
            to: from.opposite(),
        }
    }

    /// Alternating direction by trip parity: even → Putrajaya → KL Sentral,
    /// odd → KL Sentral → Putrajaya.
    pub fn by_parity(n: usize) -> Self {
        if n % 2 == 0 {
            Self::departing(Station::Putrajaya)
        } else {
            Self::departing(Station::KlSentral)
        }
    }

    /// Both routes, in the order the filter dropdown lists them.
    pub fn all() -> [Route; 2] {
        [
            Self::departing(Station::Putrajaya),
            Self::departing(Station::KlSentral),
        ]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// Platform groups at the two terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformGroup {
    /// KL Sentral platforms, prefix "KL".
    Kl,
    /// Putrajaya platforms, prefix "PJ".
    Pj,
}

impl PlatformGroup {
    pub fn prefix(&self) -> &'static str {
        match self {
            PlatformGroup::Kl => "KL",
            PlatformGroup::Pj => "PJ",
        }
    }
}

/// A platform a trip departs from.
///
/// Platforms assigned by the conflict-checked greedy search belong to a
/// group ("KL2"); the DP scheduler only numbers them round-robin
/// ("Platform 2").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
    pub group: Option<PlatformGroup>,
    pub number: u8,
}

impl Platform {
    pub fn in_group(group: PlatformGroup, number: u8) -> Self {
        Self {
            group: Some(group),
            number,
        }
    }

    pub fn numbered(number: u8) -> Self {
        Self {
            group: None,
            number,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.group {
            Some(group) => write!(f, "{}{}", group.prefix(), self.number),
            None => write!(f, "Platform {}", self.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_names() {
        assert_eq!(Station::Putrajaya.to_string(), "Putrajaya");
        assert_eq!(Station::KlSentral.to_string(), "KL Sentral");
        assert_eq!(Station::KlSentral.opposite(), Station::Putrajaya);
    }

    #[test]
    fn route_display() {
        let route = Route::departing(Station::Putrajaya);
        assert_eq!(route.to_string(), "Putrajaya → KL Sentral");
        assert_eq!(route.to, Station::KlSentral);
    }

    #[test]
    fn route_alternates_by_parity() {
        assert_eq!(Route::by_parity(0).from, Station::Putrajaya);
        assert_eq!(Route::by_parity(1).from, Station::KlSentral);
        assert_eq!(Route::by_parity(2).from, Station::Putrajaya);
    }

    #[test]
    fn platform_group_follows_origin() {
        assert_eq!(Station::KlSentral.platform_group(), PlatformGroup::Kl);
        assert_eq!(Station::Putrajaya.platform_group(), PlatformGroup::Pj);
    }

    #[test]
    fn platform_display() {
        assert_eq!(Platform::in_group(PlatformGroup::Kl, 2).to_string(), "KL2");
        assert_eq!(Platform::in_group(PlatformGroup::Pj, 1).to_string(), "PJ1");
        assert_eq!(Platform::numbered(3).to_string(), "Platform 3");
    }
}
