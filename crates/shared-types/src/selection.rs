use crate::Resource;

/// Which feature tab is active. Exactly one tab is active while the list
/// is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureTabs {
    active: usize,
    len: usize,
}

impl FeatureTabs {
    /// Tabs for `len` features, with the first one active.
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.active == index
    }

    /// Activate `index`. Returns `false` and leaves the state untouched
    /// when the index is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        true
    }
}

/// The resource detail modal.
///
/// Opening while already open replaces the shown resource; there is never
/// more than one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResourcePreview<'a> {
    #[default]
    Closed,
    Open(&'a Resource),
}

impl<'a> ResourcePreview<'a> {
    pub fn open(&mut self, resource: &'a Resource) {
        *self = ResourcePreview::Open(resource);
    }

    pub fn close(&mut self) {
        *self = ResourcePreview::Closed;
    }

    /// Apply a selection callback value: `Some` opens, `None` closes.
    pub fn set(&mut self, selection: Option<&'a Resource>) {
        match selection {
            Some(resource) => self.open(resource),
            None => self.close(),
        }
    }

    pub fn current(&self) -> Option<&'a Resource> {
        match self {
            ResourcePreview::Open(resource) => Some(resource),
            ResourcePreview::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ResourcePreview::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find_resource, RESOURCES};

    #[test]
    fn first_tab_starts_active() {
        let tabs = FeatureTabs::new(6);
        assert_eq!(tabs.active(), 0);
        assert!(tabs.is_active(0));
    }

    #[test]
    fn select_moves_the_single_active_tab() {
        let mut tabs = FeatureTabs::new(6);
        for index in [3, 1, 5, 5, 0, 2] {
            assert!(tabs.select(index));
            assert_eq!(tabs.active(), index);
            let active = (0..tabs.len()).filter(|i| tabs.is_active(*i)).count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut tabs = FeatureTabs::new(3);
        tabs.select(2);
        assert!(!tabs.select(3));
        assert_eq!(tabs.active(), 2);
    }

    #[test]
    fn empty_tabs_have_nothing_active() {
        let mut tabs = FeatureTabs::new(0);
        assert!(tabs.is_empty());
        assert!(!tabs.is_active(0));
        assert!(!tabs.select(0));
    }

    #[test]
    fn preview_starts_closed() {
        let preview = ResourcePreview::default();
        assert!(!preview.is_open());
        assert_eq!(preview.current(), None);
    }

    #[test]
    fn opening_b_over_a_replaces_it() {
        let a = find_resource(RESOURCES, 1).unwrap();
        let b = find_resource(RESOURCES, 6).unwrap();
        let mut preview = ResourcePreview::default();
        preview.open(a);
        preview.open(b);
        assert_eq!(preview, ResourcePreview::Open(b));
        assert_eq!(preview.current().map(|r| r.id), Some(6));
    }

    #[test]
    fn close_always_returns_to_closed() {
        let mut preview = ResourcePreview::default();
        preview.close();
        assert_eq!(preview, ResourcePreview::Closed);

        for resource in RESOURCES {
            preview.open(resource);
            preview.close();
            assert_eq!(preview, ResourcePreview::Closed);
        }
    }

    #[test]
    fn set_none_closes_and_some_opens() {
        let r = find_resource(RESOURCES, 3).unwrap();
        let mut preview = ResourcePreview::default();
        preview.set(Some(r));
        assert!(preview.is_open());
        preview.set(None);
        assert!(!preview.is_open());
    }
}
