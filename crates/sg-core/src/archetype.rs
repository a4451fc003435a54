//! Agent type enumeration.
//!
//! The set of types is closed: every variant is compiled in and carries a
//! fixed display colour.  Which of them take part in a run is chosen by
//! `SimConfig::archetypes`.

/// The immutable social/visual category of an agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Archetype {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl Archetype {
    /// Every variant, in declaration order.
    pub const ALL: [Archetype; 5] = [
        Archetype::Red,
        Archetype::Blue,
        Archetype::Green,
        Archetype::Yellow,
        Archetype::Purple,
    ];

    /// Display colour as `[r, g, b, a]`.
    pub fn rgba(self) -> [u8; 4] {
        match self {
            Archetype::Red    => [230, 41, 55, 255],
            Archetype::Blue   => [0, 121, 241, 255],
            Archetype::Green  => [0, 228, 48, 255],
            Archetype::Yellow => [253, 249, 0, 255],
            Archetype::Purple => [200, 122, 255, 255],
        }
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::Red    => "red",
            Archetype::Blue   => "blue",
            Archetype::Green  => "green",
            Archetype::Yellow => "yellow",
            Archetype::Purple => "purple",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
