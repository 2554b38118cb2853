use factory_core::{Catalog, Energy, Fuel, ItemDefinition, PartDefinition, Rgba, Vec3};

use super::METALLIC;
use super::colors::{COPPER, PERU, STEEL};

const ORE_SCALE: Vec3 = Vec3::splat(0.6);
const INGOT_SCALE: Vec3 = Vec3::splat(0.95);
const INGOT_OFFSET: Vec3 = Vec3::new(0.0, -0.01, 0.0);

/// Builds the base catalog in registration order.
pub fn catalog() -> Catalog {
    vec![
        log(),
        ore("iron-ore", "models/iron-ore.stl", Rgba(0xb25607ff), Some(-0.05)),
        ore("copper-ore", "models/copper-ore.stl", Rgba(0xAFEEEEff), None),
        ore("coal", "models/coal.stl", Rgba(0x444444ff), Some(0.05))
            .with_fuel(Fuel::chemical(Energy::mega(20))),
        ore("stone", "models/stone.stl", Rgba(0x999999ff), None),
        ingot("copper-ingot", COPPER),
        sheet("copper-sheet", COPPER),
        ingot("steel-ingot", STEEL),
        sheet("steel-sheet", STEEL),
        brick(),
        copper_wire(),
        circuit_board(),
        pipe(),
    ]
    .into()
}

fn log() -> ItemDefinition {
    ItemDefinition::new("log")
        .with_fuel(Fuel::chemical(Energy::mega(10)))
        .with_part(PartDefinition::new("models/wood.stl", PERU).with_scale(Vec3::splat(0.5)))
}

/// Minable ore; `shift_x` nudges the mesh sideways.
fn ore(name: &str, mesh: &str, paint: Rgba, shift_x: Option<f32>) -> ItemDefinition {
    let mut part = PartDefinition::new(mesh, paint)
        .with_gloss(METALLIC)
        .with_scale(ORE_SCALE);
    if let Some(x) = shift_x {
        part = part.with_translate(Vec3::new(x, 0.0, 0.0));
    }

    ItemDefinition::new(name)
        .with_arm_v(0.2)
        .minable()
        .with_part(part)
}

fn ingot(name: &str, paint: Rgba) -> ItemDefinition {
    ItemDefinition::new(name).with_part(
        PartDefinition::new("models/ingot.stl", paint)
            .with_gloss(METALLIC)
            .with_scale(INGOT_SCALE)
            .with_translate(INGOT_OFFSET),
    )
}

fn sheet(name: &str, paint: Rgba) -> ItemDefinition {
    ItemDefinition::new(name).with_arm_v(-0.1).with_part(
        PartDefinition::new("models/sheet-hd.stl", paint)
            .with_ld("models/sheet-ld.stl")
            .with_gloss(METALLIC),
    )
}

fn brick() -> ItemDefinition {
    ItemDefinition::new("brick").with_arm_v(0.1).with_part(
        PartDefinition::new("models/brick-hd.stl", Rgba(0x888888ff)).with_ld("models/brick-ld.stl"),
    )
}

/// Spool with a wire end above and below it.
fn copper_wire() -> ItemDefinition {
    let end = |y: f32| {
        PartDefinition::new("models/copper-wire-end-hd.stl", Rgba(0x444444ff))
            .with_ld("models/copper-wire-end-ld.stl")
            .with_translate(Vec3::new(0.0, y, 0.0))
    };

    ItemDefinition::new("copper-wire")
        .with_part(
            PartDefinition::new("models/copper-wire-roll-hd.stl", COPPER)
                .with_ld("models/copper-wire-roll-ld.stl")
                .with_translate(Vec3::new(0.0, 0.25, 0.0)),
        )
        .with_part(end(0.5))
        .with_part(end(0.0))
}

fn circuit_board() -> ItemDefinition {
    ItemDefinition::new("circuit-board")
        .with_arm_v(0.45)
        .with_part(PartDefinition::new("models/circuit-board.stl", Rgba(0x228800ff)))
}

fn pipe() -> ItemDefinition {
    ItemDefinition::new("pipe").with_arm_v(-0.18).with_part(
        PartDefinition::new("models/pipe-item-hd.stl", Rgba(0xffa500ff))
            .with_ld("models/pipe-item-ld.stl")
            .with_gloss(METALLIC)
            .with_scale(Vec3::splat(0.7))
            .with_translate(Vec3::new(0.0, 0.31, 0.0)),
    )
}
