//! Three-level dependent selector (province → district → ward and similar).
//!
//! Choosing a value on one level recomputes the options of the next level
//! from a [`HierarchyMap`] and clears every deeper level. Unknown keys are not
//! an error: they simply produce an empty option list, which blocks progress
//! in the UI.

use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Hierarchy
// ============================================================================

/// Read-only lookup tables for the three levels.
///
/// Keys are display names, not identifiers. Values keep their display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyMap {
    roots: Vec<String>,
    a_to_b: HashMap<String, Vec<String>>,
    b_to_c: HashMap<String, Vec<String>>,
}

impl HierarchyMap {
    /// Build a hierarchy with an explicit, ordered list of level-A options.
    pub fn new(
        roots: Vec<String>,
        a_to_b: HashMap<String, Vec<String>>,
        b_to_c: HashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            roots,
            a_to_b,
            b_to_c,
        }
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Options for level B under `a`; empty for unknown keys.
    pub fn children_of_a(&self, a: &str) -> &[String] {
        self.a_to_b.get(a).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Options for level C under `b`; empty for unknown keys.
    pub fn children_of_b(&self, b: &str) -> &[String] {
        self.b_to_c.get(b).map(Vec::as_slice).unwrap_or(&[])
    }

    /// No level has any option.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.a_to_b.is_empty() && self.b_to_c.is_empty()
    }
}

// ============================================================================
// Selector state
// ============================================================================

/// Level of the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    A,
    B,
    C,
}

/// Outcome of a change handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The value was stored and descendants were reset.
    Applied,
    /// The value would break downward closure; the level and its
    /// descendants were cleared instead.
    Rejected,
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// Owned snapshot of the three selected values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub a: String,
    pub b: String,
    pub c: String,
}

/// Selection state of one form instance.
///
/// `filtered_b` and `filtered_c` are derived from the hierarchy on every
/// change and never persisted.
#[derive(Debug, Clone)]
pub struct CascadingSelector {
    hierarchy: Arc<HierarchyMap>,
    a: String,
    b: String,
    c: String,
    filtered_b: Vec<String>,
    filtered_c: Vec<String>,
}

impl CascadingSelector {
    /// Empty selection.
    pub fn new(hierarchy: Arc<HierarchyMap>) -> Self {
        Self {
            hierarchy,
            a: String::new(),
            b: String::new(),
            c: String::new(),
            filtered_b: Vec::new(),
            filtered_c: Vec::new(),
        }
    }

    /// Selection loaded from an existing record.
    ///
    /// The values are kept verbatim even if they are not downward closed or
    /// not present in the hierarchy; the option lists are computed from
    /// whatever `a` and `b` hold. The first edit restores the invariant.
    pub fn with_initial(
        hierarchy: Arc<HierarchyMap>,
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
    ) -> Self {
        let a = a.into();
        let b = b.into();
        let filtered_b = if a.is_empty() {
            Vec::new()
        } else {
            hierarchy.children_of_a(&a).to_vec()
        };
        let filtered_c = if b.is_empty() {
            Vec::new()
        } else {
            hierarchy.children_of_b(&b).to_vec()
        };
        Self {
            hierarchy,
            a,
            b,
            c: c.into(),
            filtered_b,
            filtered_c,
        }
    }

    pub fn a(&self) -> &str {
        &self.a
    }

    pub fn b(&self) -> &str {
        &self.b
    }

    pub fn c(&self) -> &str {
        &self.c
    }

    /// Level-A options: the hierarchy roots.
    pub fn filtered_a(&self) -> &[String] {
        self.hierarchy.roots()
    }

    pub fn filtered_b(&self) -> &[String] {
        &self.filtered_b
    }

    pub fn filtered_c(&self) -> &[String] {
        &self.filtered_c
    }

    pub fn options(&self, level: Level) -> &[String] {
        match level {
            Level::A => self.filtered_a(),
            Level::B => self.filtered_b(),
            Level::C => self.filtered_c(),
        }
    }

    pub fn value(&self, level: Level) -> &str {
        match level {
            Level::A => &self.a,
            Level::B => &self.b,
            Level::C => &self.c,
        }
    }

    pub fn selection(&self) -> Selection {
        Selection {
            a: self.a.clone(),
            b: self.b.clone(),
            c: self.c.clone(),
        }
    }

    /// Set level A and reset everything below it.
    ///
    /// Any value is accepted; a key missing from the hierarchy leaves level B
    /// without options.
    pub fn set_level_a(&mut self, value: impl Into<String>) -> Transition {
        self.a = value.into();
        self.filtered_b = if self.a.is_empty() {
            Vec::new()
        } else {
            self.hierarchy.children_of_a(&self.a).to_vec()
        };
        self.clear_b();
        Transition::Applied
    }

    /// Set level B and reset level C.
    ///
    /// Requires a chosen level A and a value offered by `filtered_b`.
    /// Otherwise level B is cleared and `Rejected` is returned.
    pub fn set_level_b(&mut self, value: impl Into<String>) -> Transition {
        let value = value.into();
        if value.is_empty() {
            self.clear_b();
            return Transition::Applied;
        }
        if self.a.is_empty() || !self.filtered_b.contains(&value) {
            self.clear_b();
            return Transition::Rejected;
        }
        self.filtered_c = self.hierarchy.children_of_b(&value).to_vec();
        self.b = value;
        self.c.clear();
        Transition::Applied
    }

    /// Set level C. Nothing cascades from here.
    pub fn set_level_c(&mut self, value: impl Into<String>) -> Transition {
        let value = value.into();
        if value.is_empty() {
            self.c.clear();
            return Transition::Applied;
        }
        if self.b.is_empty() || !self.filtered_c.contains(&value) {
            self.c.clear();
            return Transition::Rejected;
        }
        self.c = value;
        Transition::Applied
    }

    pub fn set_level(&mut self, level: Level, value: impl Into<String>) -> Transition {
        match level {
            Level::A => self.set_level_a(value),
            Level::B => self.set_level_b(value),
            Level::C => self.set_level_c(value),
        }
    }

    /// Whether the control for `level` should accept input.
    pub fn level_enabled(&self, level: Level) -> bool {
        match level {
            Level::A => true,
            Level::B => !self.a.is_empty(),
            Level::C => !self.b.is_empty(),
        }
    }

    /// All three levels chosen.
    pub fn is_complete(&self) -> bool {
        !self.a.is_empty() && !self.b.is_empty() && !self.c.is_empty()
    }

    /// A deeper level is set only when every shallower level is set.
    pub fn is_downward_closed(&self) -> bool {
        (self.b.is_empty() || !self.a.is_empty()) && (self.c.is_empty() || !self.b.is_empty())
    }

    fn clear_b(&mut self) {
        self.b.clear();
        self.c.clear();
        self.filtered_c.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn sample() -> Arc<HierarchyMap> {
        let a_to_b = HashMap::from([("P1".to_string(), strings(&["D1", "D2"]))]);
        let b_to_c = HashMap::from([("D1".to_string(), strings(&["W1"]))]);
        Arc::new(HierarchyMap::new(strings(&["P1"]), a_to_b, b_to_c))
    }

    fn wide() -> Arc<HierarchyMap> {
        let a_to_b = HashMap::from([
            ("Hà Nội".to_string(), strings(&["Quận Ba Đình", "Quận Hoàn Kiếm"])),
            ("TP. Hồ Chí Minh".to_string(), strings(&["Quận 1", "Quận 3", "Quận 4"])),
        ]);
        let b_to_c = HashMap::from([
            ("Quận 1".to_string(), strings(&["Phường Tân Định", "Phường Đa Kao"])),
            ("Quận Ba Đình".to_string(), strings(&["Phường Phúc Xá"])),
        ]);
        Arc::new(HierarchyMap::new(
            strings(&["Hà Nội", "TP. Hồ Chí Minh", "Đà Nẵng"]),
            a_to_b,
            b_to_c,
        ))
    }

    #[test]
    fn test_scenario_from_province_to_unknown_province() {
        let mut sel = CascadingSelector::new(sample());

        sel.set_level_a("P1");
        assert_eq!(sel.filtered_b(), strings(&["D1", "D2"]).as_slice());

        sel.set_level_b("D1");
        assert_eq!(sel.filtered_c(), strings(&["W1"]).as_slice());

        sel.set_level_a("P2");
        assert!(sel.filtered_b().is_empty());
        assert_eq!(sel.b(), "");
        assert_eq!(sel.c(), "");
        assert!(sel.filtered_c().is_empty());
    }

    #[test]
    fn test_known_keys_yield_children_in_order() {
        let map = wide();
        for root in map.roots().to_vec() {
            let mut sel = CascadingSelector::new(map.clone());
            sel.set_level_a(root.clone());
            assert_eq!(sel.filtered_b(), map.children_of_a(&root));
        }
        let mut sel = CascadingSelector::new(map);
        sel.set_level_a("TP. Hồ Chí Minh");
        assert_eq!(sel.filtered_b(), strings(&["Quận 1", "Quận 3", "Quận 4"]).as_slice());
    }

    #[test]
    fn test_unknown_keys_yield_no_options() {
        let mut sel = CascadingSelector::new(wide());
        for key in ["Đà Nẵng", "Hue", "", "hà nội"] {
            sel.set_level_a(key);
            assert!(sel.filtered_b().is_empty(), "key {key:?}");
        }
    }

    #[test]
    fn test_level_a_resets_descendants() {
        let mut sel = CascadingSelector::new(wide());
        sel.set_level_a("TP. Hồ Chí Minh");
        sel.set_level_b("Quận 1");
        sel.set_level_c("Phường Đa Kao");
        assert!(sel.is_complete());

        for key in ["TP. Hồ Chí Minh", "Hà Nội", "nowhere", ""] {
            sel.set_level_a(key);
            assert_eq!(sel.b(), "");
            assert_eq!(sel.c(), "");
            assert!(sel.filtered_c().is_empty());
            assert!(sel.is_downward_closed());
        }
    }

    #[test]
    fn test_level_b_resets_c() {
        let mut sel = CascadingSelector::new(wide());
        sel.set_level_a("TP. Hồ Chí Minh");
        sel.set_level_b("Quận 1");
        sel.set_level_c("Phường Tân Định");

        assert!(sel.set_level_b("Quận 3").is_applied());
        assert_eq!(sel.c(), "");
        // Quận 3 has no ward data
        assert!(sel.filtered_c().is_empty());

        sel.set_level_b("Quận 1");
        sel.set_level_c("Phường Tân Định");
        assert_eq!(sel.set_level_b("Quận 9"), Transition::Rejected);
        assert_eq!(sel.b(), "");
        assert_eq!(sel.c(), "");
    }

    #[test]
    fn test_level_b_requires_level_a() {
        let mut sel = CascadingSelector::new(sample());
        assert!(!sel.level_enabled(Level::B));
        assert_eq!(sel.set_level_b("D1"), Transition::Rejected);
        assert_eq!(sel.b(), "");
        assert!(sel.is_downward_closed());
    }

    #[test]
    fn test_level_c_has_no_cascade() {
        let mut sel = CascadingSelector::new(sample());
        sel.set_level_a("P1");
        sel.set_level_b("D1");
        assert!(sel.level_enabled(Level::C));
        assert!(sel.set_level_c("W1").is_applied());
        assert_eq!(sel.selection(), Selection {
            a: "P1".into(),
            b: "D1".into(),
            c: "W1".into(),
        });
        assert_eq!(sel.filtered_b(), strings(&["D1", "D2"]).as_slice());
        assert_eq!(sel.filtered_c(), strings(&["W1"]).as_slice());

        assert_eq!(sel.set_level_c("W9"), Transition::Rejected);
        assert_eq!(sel.c(), "");
        assert_eq!(sel.b(), "D1");
    }

    #[test]
    fn test_is_complete() {
        let map = sample();
        let partial = CascadingSelector::with_initial(map.clone(), "P1", "", "");
        assert!(!partial.is_complete());

        let full = CascadingSelector::with_initial(map, "P1", "D1", "W1");
        assert!(full.is_complete());
    }

    #[test]
    fn test_initial_state_is_tolerated_then_corrected() {
        let mut sel = CascadingSelector::with_initial(sample(), "", "D1", "W1");
        assert!(!sel.is_downward_closed());
        assert_eq!(sel.b(), "D1");
        assert!(sel.filtered_b().is_empty());
        assert_eq!(sel.filtered_c(), strings(&["W1"]).as_slice());

        sel.set_level_a("P1");
        assert!(sel.is_downward_closed());
        assert_eq!(sel.b(), "");
        assert_eq!(sel.c(), "");
    }

    #[test]
    fn test_initial_state_computes_options() {
        let sel = CascadingSelector::with_initial(wide(), "TP. Hồ Chí Minh", "Quận 1", "Phường Đa Kao");
        assert_eq!(sel.filtered_b().len(), 3);
        assert_eq!(sel.filtered_c().len(), 2);
        assert_eq!(sel.filtered_a().len(), 3);
        assert!(sel.is_complete());
    }

    #[test]
    fn test_every_handler_keeps_downward_closure() {
        let map = wide();
        let values = ["", "Hà Nội", "TP. Hồ Chí Minh", "Quận 1", "Quận Ba Đình", "Phường Đa Kao", "Phường Phúc Xá", "x"];
        let levels = [Level::A, Level::B, Level::C];
        let mut sel = CascadingSelector::new(map);
        for (i, value) in values.iter().cycle().take(200).enumerate() {
            sel.set_level(levels[(i * 7 + i / 3) % 3], *value);
            assert!(sel.is_downward_closed(), "step {i}: {:?}", sel.selection());
            if !sel.b().is_empty() {
                assert!(sel.filtered_b().iter().any(|b| b == sel.b()));
            }
            if !sel.c().is_empty() {
                assert!(sel.filtered_c().iter().any(|c| c == sel.c()));
            }
        }
    }

    #[test]
    fn test_empty_value_clears_level() {
        let mut sel = CascadingSelector::new(sample());
        sel.set_level_a("P1");
        sel.set_level_b("D1");
        sel.set_level_c("W1");

        sel.set_level_b("");
        assert_eq!(sel.b(), "");
        assert_eq!(sel.c(), "");
        assert!(sel.filtered_c().is_empty());
        assert_eq!(sel.filtered_b().len(), 2);
        assert!(!sel.level_enabled(Level::C));
    }

    #[test]
    fn test_empty_hierarchy_offers_nothing() {
        let map = Arc::new(HierarchyMap::default());
        assert!(map.is_empty());
        assert!(!sample().is_empty());

        let mut sel = CascadingSelector::new(map);
        assert!(sel.filtered_a().is_empty());
        sel.set_level_a("P1");
        assert!(sel.filtered_b().is_empty());
        assert_eq!(sel.set_level_b("D1"), Transition::Rejected);
        assert!(!sel.is_complete());
    }
}
