//! Printable summary of a loaded registry.
use factory_core::{Fuel, ItemId};
use factory_runtime::ItemRegistryImpl;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CatalogReport {
    pub mods: Vec<String>,
    pub ticks: u64,
    pub items: Vec<ItemRow>,
}

#[derive(Debug, Serialize)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub parts: usize,
    pub minable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arm_v: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel: Option<Fuel>,
}

impl CatalogReport {
    pub fn new(mods: Vec<String>, ticks: u64, registry: &ItemRegistryImpl) -> Self {
        let items = registry
            .iter()
            .map(|(id, def)| ItemRow {
                id,
                name: def.name.clone(),
                parts: def.parts.len(),
                minable: def.minable,
                arm_v: def.arm_v,
                fuel: def.fuel,
            })
            .collect();

        Self { mods, ticks, items }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        let mut out = format!(
            "mods: {}  ticks: {}  items: {}\n",
            self.mods.join(", "),
            self.ticks,
            self.items.len()
        );
        for row in &self.items {
            out.push_str(&format!("{:>4}  {:<14} parts={}", row.id.0, row.name, row.parts));
            if row.minable {
                out.push_str(" minable");
            }
            if let Some(arm_v) = row.arm_v {
                out.push_str(&format!(" armV={arm_v}"));
            }
            if let Some(fuel) = row.fuel {
                out.push_str(&format!(" fuel={}:{}", fuel.kind, fuel.energy));
            }
            out.push('\n');
        }
        out
    }
}
