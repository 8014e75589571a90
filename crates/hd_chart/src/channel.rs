//! The 36 channels.

use serde::Serialize;

use crate::center::Center::{self, Ajna, Ego, G, Head, Root, Sacral, SolarPlexus, Spleen, Throat};

/// An unordered pair of gates joining two centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Channel {
    /// Gate pair, lower number first.
    pub gates: (u8, u8),
    /// Centers at each end, in the order of `gates`.
    pub centers: (Center, Center),
}

impl Channel {
    const fn new(a: u8, ca: Center, b: u8, cb: Center) -> Self {
        Self {
            gates: (a, b),
            centers: (ca, cb),
        }
    }

    pub fn has_gate(&self, gate: u8) -> bool {
        self.gates.0 == gate || self.gates.1 == gate
    }

    /// The gate at the other end, if `gate` belongs to this channel.
    pub fn partner(&self, gate: u8) -> Option<u8> {
        match gate {
            g if g == self.gates.0 => Some(self.gates.1),
            g if g == self.gates.1 => Some(self.gates.0),
            _ => None,
        }
    }

    /// `"a-b"`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.gates.0, self.gates.1)
    }
}

/// All channels, ordered by lower gate.
pub static CHANNELS: [Channel; 36] = [
    Channel::new(1, G, 8, Throat),
    Channel::new(2, G, 14, Sacral),
    Channel::new(3, Sacral, 60, Root),
    Channel::new(4, Ajna, 63, Head),
    Channel::new(5, Sacral, 15, G),
    Channel::new(6, SolarPlexus, 59, Sacral),
    Channel::new(7, G, 31, Throat),
    Channel::new(9, Sacral, 52, Root),
    Channel::new(10, G, 20, Throat),
    Channel::new(10, G, 34, Sacral),
    Channel::new(10, G, 57, Spleen),
    Channel::new(11, Ajna, 56, Throat),
    Channel::new(12, Throat, 22, SolarPlexus),
    Channel::new(13, G, 33, Throat),
    Channel::new(16, Throat, 48, Spleen),
    Channel::new(17, Ajna, 62, Throat),
    Channel::new(18, Spleen, 58, Root),
    Channel::new(19, Root, 49, SolarPlexus),
    Channel::new(20, Throat, 34, Sacral),
    Channel::new(20, Throat, 57, Spleen),
    Channel::new(21, Ego, 45, Throat),
    Channel::new(23, Throat, 43, Ajna),
    Channel::new(24, Ajna, 61, Head),
    Channel::new(25, G, 51, Ego),
    Channel::new(26, Ego, 44, Spleen),
    Channel::new(27, Sacral, 50, Spleen),
    Channel::new(28, Spleen, 38, Root),
    Channel::new(29, Sacral, 46, G),
    Channel::new(30, SolarPlexus, 41, Root),
    Channel::new(32, Spleen, 54, Root),
    Channel::new(34, Sacral, 57, Spleen),
    Channel::new(35, Throat, 36, SolarPlexus),
    Channel::new(37, SolarPlexus, 40, Ego),
    Channel::new(39, Root, 55, SolarPlexus),
    Channel::new(42, Sacral, 53, Root),
    Channel::new(47, Ajna, 64, Head),
];

/// Channel joining two gates, in either order.
pub fn channel_between(a: u8, b: u8) -> Option<&'static Channel> {
    let key = if a <= b { (a, b) } else { (b, a) };
    CHANNELS.iter().find(|c| c.gates == key)
}

/// Channels containing a gate.
pub fn channels_of_gate(gate: u8) -> impl Iterator<Item = &'static Channel> {
    CHANNELS.iter().filter(move |c| c.has_gate(gate))
}
