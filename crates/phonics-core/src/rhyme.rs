use crate::content::RhymeGroup;

/// The group the cursor is walking, and where in it we are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRhyme {
    pub group: usize,
    pub cursor: usize,
}

/// Rhyme-aware cycling over the groups of one `(language, item length)` pair.
///
/// Holds the groups for the active pair plus a transient cursor. The
/// navigator resets it whenever the pair changes.
#[derive(Debug, Clone, Default)]
pub struct RhymeIndex {
    groups: Vec<RhymeGroup>,
    active: Option<ActiveRhyme>,
}

impl RhymeIndex {
    pub fn new(groups: Vec<RhymeGroup>) -> Self {
        Self {
            groups,
            active: None,
        }
    }

    /// Install the groups for a new pair and drop the cursor.
    pub fn reset(&mut self, groups: Vec<RhymeGroup>) {
        self.groups = groups;
        self.active = None;
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn groups(&self) -> &[RhymeGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Which group holds `entry`. First match wins.
    pub fn group_of(&self, entry: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(entry))
    }

    /// Look up `entry` and make its group the active one.
    /// A miss clears the cursor; it is not an error.
    pub fn find_group(&mut self, entry: &str) -> Option<ActiveRhyme> {
        self.active = self.groups.iter().enumerate().find_map(|(group, g)| {
            g.position(entry).map(|cursor| ActiveRhyme { group, cursor })
        });
        self.active
    }

    /// Step the cursor forward, wrapping within the group.
    pub fn next_in_group(&mut self) -> Option<&str> {
        let active = self.active.as_mut()?;
        let group = &self.groups[active.group];
        active.cursor = (active.cursor + 1) % group.len();
        Some(group.words[active.cursor].as_str())
    }

    pub fn active(&self) -> Option<ActiveRhyme> {
        self.active
    }

    pub fn active_group(&self) -> Option<&RhymeGroup> {
        self.active.map(|a| &self.groups[a.group])
    }

    /// Whether the active cursor currently points at `entry`.
    pub fn is_on(&self, entry: &str) -> bool {
        self.active
            .map(|a| self.groups[a.group].words[a.cursor] == entry)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> RhymeIndex {
        RhymeIndex::new(vec![
            RhymeGroup::new("at", &["cat", "bat", "hat"]),
            RhymeGroup::new("og", &["dog", "log"]),
        ])
    }

    #[test]
    fn find_group_sets_cursor() {
        let mut idx = index();
        let found = idx.find_group("BAT").unwrap();
        assert_eq!(found, ActiveRhyme { group: 0, cursor: 1 });
        assert_eq!(idx.active_group().unwrap().key, "at");
    }

    #[test]
    fn miss_clears_cursor() {
        let mut idx = index();
        idx.find_group("CAT");
        assert!(idx.find_group("SUN").is_none());
        assert!(idx.active().is_none());
    }

    #[test]
    fn next_wraps_within_group() {
        let mut idx = index();
        idx.find_group("CAT");
        assert_eq!(idx.next_in_group(), Some("BAT"));
        assert_eq!(idx.next_in_group(), Some("HAT"));
        assert_eq!(idx.next_in_group(), Some("CAT"));
    }

    #[test]
    fn next_without_group_is_none() {
        let mut idx = index();
        assert_eq!(idx.next_in_group(), None);
    }

    #[test]
    fn reset_drops_cursor() {
        let mut idx = index();
        idx.find_group("DOG");
        idx.reset(Vec::new());
        assert!(idx.active().is_none());
        assert!(idx.is_empty());
        assert_eq!(idx.group_of("DOG"), None);
    }

    #[test]
    fn is_on_tracks_cursor() {
        let mut idx = index();
        idx.find_group("DOG");
        assert!(idx.is_on("DOG"));
        idx.next_in_group();
        assert!(idx.is_on("LOG"));
        assert!(!idx.is_on("DOG"));
    }
}
