//! Hover / selection / category-filter state shared by the table and the detail panel.
//!
//! The three fields vary independently; every transition is a synchronous reducer
//! step and derived flags (faded, tooltip) are computed on demand, never stored.
//! Element ids that are not in the dataset are ignored with a warning, for every
//! action that carries one.

use std::rc::Rc;
use yew::{Reducible, UseReducerHandle};

use crate::model::{Category, Dataset, ElementRecord};

/// Handle handed to components through `ContextProvider`.
pub type InteractionContext = UseReducerHandle<InteractionState>;

#[derive(Clone, Debug)]
pub struct InteractionState {
    dataset: Rc<Dataset>,
    pub hovered: Option<u32>,
    pub selected: Option<u32>,
    pub active_filter: Option<Category>,
}

impl PartialEq for InteractionState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dataset, &other.dataset)
            && self.hovered == other.hovered
            && self.selected == other.selected
            && self.active_filter == other.active_filter
    }
}

impl InteractionState {
    pub fn new(dataset: Rc<Dataset>) -> Self {
        Self {
            dataset,
            hovered: None,
            selected: None,
            active_filter: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn is_hovered(&self, atomic_number: u32) -> bool {
        self.hovered == Some(atomic_number)
    }

    pub fn is_selected(&self, atomic_number: u32) -> bool {
        self.selected == Some(atomic_number)
    }

    /// True when a filter is active and the element belongs to another category.
    pub fn is_faded(&self, atomic_number: u32) -> bool {
        let Some(filter) = self.active_filter else {
            return false;
        };
        match self.dataset.get(atomic_number) {
            Some(element) => element.category != filter,
            None => {
                log::warn!("is_faded: element {atomic_number} is not in the dataset");
                false
            }
        }
    }

    /// Selection always suppresses the hover tooltip.
    pub fn tooltip_visible(&self) -> bool {
        self.hovered.is_some() && self.selected.is_none()
    }

    pub fn hovered_element(&self) -> Option<&Rc<ElementRecord>> {
        self.hovered.and_then(|n| self.dataset.get(n))
    }

    pub fn selected_element(&self) -> Option<&Rc<ElementRecord>> {
        self.selected.and_then(|n| self.dataset.get(n))
    }

    fn knows(&self, atomic_number: u32, action: &InteractionAction) -> bool {
        if self.dataset.contains(atomic_number) {
            true
        } else {
            log::warn!("ignoring {action:?}: element {atomic_number} is not in the dataset");
            false
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InteractionAction {
    PointerEnter(u32),
    /// Clears the hover unconditionally; callers send it for the cell they last entered.
    PointerLeave,
    ElementClick(u32),
    CategoryToggle(Category),
    ClearSelection,
}

impl Reducible for InteractionState {
    type Action = InteractionAction;

    // Returning `self` untouched lets Yew skip the re-render.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use InteractionAction::*;
        match action {
            PointerEnter(id) => {
                if self.hovered == Some(id) || !self.knows(id, &action) {
                    return self;
                }
                let mut new = (*self).clone();
                new.hovered = Some(id);
                Rc::new(new)
            }
            PointerLeave => {
                if self.hovered.is_none() {
                    return self;
                }
                let mut new = (*self).clone();
                new.hovered = None;
                Rc::new(new)
            }
            ElementClick(id) => {
                if !self.knows(id, &action) {
                    return self;
                }
                let mut new = (*self).clone();
                new.selected = if self.selected == Some(id) { None } else { Some(id) };
                log::debug!("selection: {:?} -> {:?}", self.selected, new.selected);
                Rc::new(new)
            }
            CategoryToggle(category) => {
                let mut new = (*self).clone();
                new.active_filter = if self.active_filter == Some(category) {
                    None
                } else {
                    Some(category)
                };
                log::debug!("filter: {:?} -> {:?}", self.active_filter, new.active_filter);
                Rc::new(new)
            }
            ClearSelection => {
                if self.selected.is_none() {
                    return self;
                }
                let mut new = (*self).clone();
                new.selected = None;
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use InteractionAction::*;

    fn two_elements() -> Rc<Dataset> {
        Rc::new(
            Dataset::from_records(vec![
                ElementRecord::stub(1, "H", Category::Nonmetal, 1, 1),
                ElementRecord::stub(2, "He", Category::NobleGas, 18, 1),
            ])
            .unwrap(),
        )
    }

    fn fresh() -> Rc<InteractionState> {
        Rc::new(InteractionState::new(two_elements()))
    }

    fn apply(state: Rc<InteractionState>, actions: &[InteractionAction]) -> Rc<InteractionState> {
        actions.iter().cloned().fold(state, |s, a| s.reduce(a))
    }

    #[test]
    fn starts_empty() {
        let s = fresh();
        assert_eq!((s.hovered, s.selected, s.active_filter), (None, None, None));
        assert!(!s.tooltip_visible());
    }

    #[test]
    fn hover_is_idempotent() {
        let once = fresh().reduce(PointerEnter(1));
        let twice = once.clone().reduce(PointerEnter(1));
        assert!(Rc::ptr_eq(&once, &twice));
        assert_eq!(*once, *twice);
        assert!(twice.is_hovered(1));
    }

    #[test]
    fn leave_clears_hover_even_after_entering_another() {
        let s = apply(fresh(), &[PointerEnter(1), PointerEnter(2), PointerLeave]);
        assert_eq!(s.hovered, None);
    }

    #[test]
    fn two_clicks_restore_selection() {
        let s = apply(fresh(), &[ElementClick(1), ElementClick(1)]);
        assert_eq!(s.selected, None);
        let base = fresh().reduce(ElementClick(2));
        let s = apply(base.clone(), &[ElementClick(2), ElementClick(2)]);
        assert_eq!(s.selected, base.selected);
    }

    #[test]
    fn selection_replaces_and_never_accumulates() {
        let s = apply(fresh(), &[ElementClick(1), ElementClick(2)]);
        assert_eq!(s.selected, Some(2));
        assert!(s.is_selected(2));
        assert!(!s.is_selected(1));
    }

    #[test]
    fn filter_toggle_is_symmetric() {
        let s = apply(fresh(), &[CategoryToggle(Category::Halogen), CategoryToggle(Category::Halogen)]);
        assert_eq!(s.active_filter, None);
        let base = fresh().reduce(CategoryToggle(Category::Nonmetal));
        let s = apply(base.clone(), &[CategoryToggle(Category::Nonmetal), CategoryToggle(Category::Nonmetal)]);
        assert_eq!(s.active_filter, base.active_filter);
    }

    #[test]
    fn toggling_another_category_switches_filter() {
        let s = apply(fresh(), &[CategoryToggle(Category::Nonmetal), CategoryToggle(Category::Halogen)]);
        assert_eq!(s.active_filter, Some(Category::Halogen));
    }

    #[test]
    fn filter_survives_hover_and_selection_changes() {
        let s = apply(
            fresh(),
            &[CategoryToggle(Category::NobleGas), PointerEnter(1), ElementClick(1), PointerLeave, ElementClick(1)],
        );
        assert_eq!(s.active_filter, Some(Category::NobleGas));
    }

    #[test]
    fn fade_matches_active_category_over_full_dataset() {
        let ds = Rc::new(Dataset::load().unwrap());
        for c in Category::ALL {
            let on = Rc::new(InteractionState::new(ds.clone())).reduce(CategoryToggle(c));
            for e in ds.all() {
                assert_eq!(on.is_faded(e.atomic_number), e.category != c);
            }
            let off = on.reduce(CategoryToggle(c));
            assert!(ds.all().iter().all(|e| !off.is_faded(e.atomic_number)));
        }
    }

    #[test]
    fn hydrogen_and_helium_fade_under_nonmetal_filter() {
        let s = fresh().reduce(CategoryToggle(Category::Nonmetal));
        assert!(!s.is_faded(1));
        assert!(s.is_faded(2));
    }

    #[test]
    fn clicking_hydrogen_twice_deselects() {
        let s = fresh().reduce(ElementClick(1));
        assert!(s.is_selected(1));
        assert_eq!(s.selected_element().map(|e| e.symbol.as_str()), Some("H"));
        let s = s.reduce(ElementClick(1));
        assert!(!s.is_selected(1));
        assert_eq!(s.selected, None);
        assert!(s.selected_element().is_none());
    }

    #[test]
    fn selection_suppresses_tooltip() {
        let s = fresh().reduce(PointerEnter(1));
        assert!(s.tooltip_visible());
        let s = s.reduce(ElementClick(1));
        assert_eq!(s.hovered, Some(1));
        assert!(!s.tooltip_visible());
        for id in [1, 2] {
            let s = apply(fresh(), &[ElementClick(2), PointerEnter(id)]);
            assert!(!s.tooltip_visible());
        }
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let base = apply(fresh(), &[PointerEnter(1), ElementClick(2)]);
        let after = apply(base.clone(), &[PointerEnter(99), ElementClick(99)]);
        assert!(Rc::ptr_eq(&base, &after));
        let filtered = base.reduce(CategoryToggle(Category::Nonmetal));
        assert!(!filtered.is_faded(99));
    }

    #[test]
    fn clear_selection_keeps_hover_and_filter() {
        let s = apply(fresh(), &[CategoryToggle(Category::Nonmetal), PointerEnter(2), ElementClick(2), ClearSelection]);
        assert_eq!(s.selected, None);
        assert_eq!(s.hovered, Some(2));
        assert_eq!(s.active_filter, Some(Category::Nonmetal));
        assert!(s.tooltip_visible());
        let again = s.clone().reduce(ClearSelection);
        assert!(Rc::ptr_eq(&s, &again));
    }
}
