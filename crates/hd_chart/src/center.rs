//! The nine structural centers and the gates they own.

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// A structural center of the bodygraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    Ego,
    Spleen,
    SolarPlexus,
    Sacral,
    Root,
}

/// All centers, top of the chart to bottom.
pub const ALL_CENTERS: [Center; 9] = [
    Center::Head,
    Center::Ajna,
    Center::Throat,
    Center::G,
    Center::Ego,
    Center::Spleen,
    Center::SolarPlexus,
    Center::Sacral,
    Center::Root,
];

/// Centers that count as motors for throat reachability.
pub const MOTOR_CENTERS: [Center; 4] = [
    Center::Sacral,
    Center::SolarPlexus,
    Center::Ego,
    Center::Root,
];

impl Center {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Ajna => "Ajna",
            Self::Throat => "Throat",
            Self::G => "G",
            Self::Ego => "Ego",
            Self::Spleen => "Spleen",
            Self::SolarPlexus => "Solar Plexus",
            Self::Sacral => "Sacral",
            Self::Root => "Root",
        }
    }

    /// 0-based index into [`ALL_CENTERS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_motor(self) -> bool {
        matches!(
            self,
            Self::Sacral | Self::SolarPlexus | Self::Ego | Self::Root
        )
    }

    /// Gates belonging to this center.
    pub const fn gates(self) -> &'static [u8] {
        match self {
            Self::Head => &[64, 61, 63],
            Self::Ajna => &[47, 24, 4, 17, 43, 11],
            Self::Throat => &[62, 23, 56, 35, 12, 45, 33, 8, 31, 20, 16],
            Self::G => &[7, 1, 13, 10, 25, 15, 46, 2],
            Self::Ego => &[21, 40, 26, 51],
            Self::Spleen => &[48, 57, 44, 50, 32, 28, 18],
            Self::SolarPlexus => &[36, 22, 37, 6, 49, 55, 30],
            Self::Sacral => &[5, 14, 29, 59, 9, 3, 42, 27, 34],
            Self::Root => &[53, 60, 52, 19, 39, 41, 58, 38, 54],
        }
    }
}

impl Display for Center {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Center owning a gate, or `None` outside 1..=64.
pub fn center_of_gate(gate: u8) -> Option<Center> {
    ALL_CENTERS
        .into_iter()
        .find(|center| center.gates().contains(&gate))
}
