//! Administrative divisions used by the address form.
//!
//! The catalog is static configuration: it ships embedded in the binary as
//! JSON and is turned into a [`HierarchyMap`] once at startup.

use crate::shared::cascade::HierarchyMap;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Catalog bundled with the application.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("address_catalog.json");

/// Province → district → ward tables keyed by display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCatalog {
    /// Every selectable province, in display order.
    pub provinces: Vec<String>,
    /// Districts per province. Provinces without an entry have no districts.
    #[serde(default)]
    pub districts: HashMap<String, Vec<String>>,
    /// Wards per district.
    #[serde(default)]
    pub wards: HashMap<String, Vec<String>>,
}

impl AddressCatalog {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let catalog: AddressCatalog =
            serde_json::from_str(json).context("address catalog is not valid JSON")?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Parse [`BUILTIN_CATALOG_JSON`].
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN_CATALOG_JSON).context("embedded address catalog")
    }

    /// Lists must not contain blank or repeated names, otherwise a chosen
    /// value could not be told apart from its twin.
    fn check(&self) -> anyhow::Result<()> {
        check_list("provinces", &self.provinces)?;
        for (province, districts) in &self.districts {
            check_list(province, districts)?;
        }
        for (district, wards) in &self.wards {
            check_list(district, wards)?;
        }
        Ok(())
    }

    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }

    pub fn into_hierarchy(self) -> HierarchyMap {
        HierarchyMap::new(self.provinces, self.districts, self.wards)
    }
}

fn check_list(owner: &str, names: &[String]) -> anyhow::Result<()> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if name.trim().is_empty() {
            bail!("blank name under '{}'", owner);
        }
        if !seen.insert(name.as_str()) {
            bail!("duplicate name '{}' under '{}'", name, owner);
        }
    }
    Ok(())
}
