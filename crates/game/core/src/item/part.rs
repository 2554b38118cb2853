use super::Rgba;
use crate::error::ValidationError;

/// Per-axis vector used for part scale and offset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Same value on every axis.
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// One visual/physical piece of an item.
///
/// Parts are assembled in list order; multi-part items use `translate` to
/// position pieces relative to each other.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartDefinition {
    /// High-detail mesh asset path.
    pub hd_stl: String,

    /// Low-detail mesh asset path. The host falls back to `hd_stl` at
    /// distance when absent.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub ld_stl: Option<String>,

    pub paint: Rgba,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub gloss: Option<f32>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub scale: Option<Vec3>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub translate: Option<Vec3>,
}

impl PartDefinition {
    pub fn new(hd_stl: impl Into<String>, paint: Rgba) -> Self {
        Self {
            hd_stl: hd_stl.into(),
            ld_stl: None,
            paint,
            gloss: None,
            scale: None,
            translate: None,
        }
    }

    /// Attaches a low-detail mesh (builder pattern).
    #[must_use]
    pub fn with_ld(mut self, ld_stl: impl Into<String>) -> Self {
        self.ld_stl = Some(ld_stl.into());
        self
    }

    #[must_use]
    pub fn with_gloss(mut self, gloss: f32) -> Self {
        self.gloss = Some(gloss);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn with_translate(mut self, translate: Vec3) -> Self {
        self.translate = Some(translate);
        self
    }

    /// Scale with the `[1,1,1]` default applied.
    pub fn scale_or_default(&self) -> Vec3 {
        self.scale.unwrap_or(Vec3::ONE)
    }

    /// Offset with the `[0,0,0]` default applied.
    pub fn translate_or_default(&self) -> Vec3 {
        self.translate.unwrap_or(Vec3::ZERO)
    }

    /// Mesh used at distance.
    pub fn ld_or_hd(&self) -> &str {
        self.ld_stl.as_deref().unwrap_or(&self.hd_stl)
    }

    /// Every mesh path this part references, high-detail first.
    pub fn mesh_paths(&self) -> impl Iterator<Item = &str> {
        core::iter::once(self.hd_stl.as_str()).chain(self.ld_stl.as_deref())
    }

    /// Checks this part as the `index`-th part of `item`.
    pub fn validate(&self, item: &str, index: usize) -> Result<(), ValidationError> {
        if self.mesh_paths().any(str::is_empty) {
            return Err(ValidationError::EmptyMeshPath {
                item: item.to_owned(),
                part: index,
            });
        }

        if let Some(gloss) = self.gloss {
            if !(gloss.is_finite() && gloss >= 0.0) {
                return Err(ValidationError::InvalidGloss {
                    item: item.to_owned(),
                    part: index,
                    gloss,
                });
            }
        }

        let vectors = [("scale", self.scale), ("translate", self.translate)];
        for (field, vector) in vectors {
            if vector.is_some_and(|v| !v.is_finite()) {
                return Err(ValidationError::NonFiniteVector {
                    item: item.to_owned(),
                    part: index,
                    field,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> PartDefinition {
        PartDefinition::new("models/sheet-hd.stl", Rgba(0xB0C4DEff))
            .with_ld("models/sheet-ld.stl")
            .with_gloss(16.0)
    }

    #[test]
    fn defaults_apply_when_unset() {
        let part = sheet();
        assert_eq!(part.scale_or_default(), Vec3::ONE);
        assert_eq!(part.translate_or_default(), Vec3::ZERO);
    }

    #[test]
    fn low_detail_falls_back_to_high_detail() {
        let part = PartDefinition::new("models/coal.stl", Rgba(0x444444ff));
        assert_eq!(part.ld_or_hd(), "models/coal.stl");
        assert_eq!(sheet().ld_or_hd(), "models/sheet-ld.stl");
        assert_eq!(
            sheet().mesh_paths().collect::<Vec<_>>(),
            vec!["models/sheet-hd.stl", "models/sheet-ld.stl"]
        );
    }

    #[test]
    fn negative_gloss_is_rejected() {
        let part = sheet().with_gloss(-0.5);
        assert!(matches!(
            part.validate("steel-sheet", 0),
            Err(ValidationError::InvalidGloss { part: 0, .. })
        ));
    }

    #[test]
    fn non_finite_translate_is_rejected() {
        let part = sheet().with_translate(Vec3::new(0.0, f32::NAN, 0.0));
        assert_eq!(
            part.validate("steel-sheet", 2),
            Err(ValidationError::NonFiniteVector {
                item: "steel-sheet".into(),
                part: 2,
                field: "translate",
            })
        );
    }

    #[test]
    fn empty_ld_path_is_rejected() {
        let part = sheet().with_ld("");
        assert!(matches!(
            part.validate("steel-sheet", 0),
            Err(ValidationError::EmptyMeshPath { .. })
        ));
    }
}
