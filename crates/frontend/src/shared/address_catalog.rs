use contracts::shared::address_catalog::AddressCatalog;
use contracts::shared::cascade::HierarchyMap;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Hierarchy to use for a load result; a failed load degrades to no options.
fn hierarchy_from(loaded: anyhow::Result<AddressCatalog>) -> HierarchyMap {
    match loaded {
        Ok(catalog) => {
            log::info!(
                "Address catalog loaded: {} provinces, {} with districts",
                catalog.province_count(),
                catalog.districts.len()
            );
            let map = catalog.into_hierarchy();
            if map.is_empty() {
                log::warn!("Address catalog is empty; address selects will have no options");
            }
            map
        }
        Err(e) => {
            log::error!("Address catalog could not be loaded: {:#}", e);
            HierarchyMap::default()
        }
    }
}

static HIERARCHY: Lazy<Arc<HierarchyMap>> =
    Lazy::new(|| Arc::new(hierarchy_from(AddressCatalog::builtin())));

/// Province/district/ward hierarchy shared by every address form.
pub fn hierarchy() -> Arc<HierarchyMap> {
    HIERARCHY.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_catalog_falls_back_to_empty() {
        let map = hierarchy_from(AddressCatalog::from_json("{ provinces: "));
        assert!(map.is_empty());
    }

    #[test]
    fn test_builtin_catalog_is_used() {
        let map = hierarchy_from(AddressCatalog::builtin());
        assert!(!map.is_empty());
        assert_eq!(map.children_of_a("Đà Nẵng").len(), 7);
    }
}
