/// Amount of energy in base energy units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Energy(pub u64);

impl Energy {
    pub const ZERO: Self = Self(0);

    /// `n` million base units, saturating at `u64::MAX`.
    pub const fn mega(n: u64) -> Self {
        Self(n.saturating_mul(1_000_000))
    }

    pub const fn units(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl core::fmt::Display for Energy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0 >= 1_000_000 && self.0 % 1_000_000 == 0 {
            write!(f, "{}M", self.0 / 1_000_000)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Combustion category of a fuel.
///
/// Only chemical fuel exists in the catalog; further kinds are not assumed.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FuelKind {
    Chemical,
}

/// Combustion properties of a burnable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fuel {
    pub kind: FuelKind,
    pub energy: Energy,
}

impl Fuel {
    pub const fn new(kind: FuelKind, energy: Energy) -> Self {
        Self { kind, energy }
    }

    pub const fn chemical(energy: Energy) -> Self {
        Self::new(FuelKind::Chemical, energy)
    }
}
