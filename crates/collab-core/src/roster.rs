//! Ordered role-name → collaborator mapping handed to a coordinator.

use std::fmt;

use tracing::debug;

use crate::capability::Capability;
use crate::role::RoleName;

/// A boxed collaborator producing `O`.
pub type Collaborator<O> = Box<dyn Capability<Output = O>>;

/// The already-assembled set of collaborators a [`crate::Coordinator`] is
/// constructed with.
///
/// Insertion order is delegation order. Inserting a role that is already
/// present replaces its collaborator in place, keeping the original position.
pub struct Roster<O> {
    entries: Vec<(RoleName, Collaborator<O>)>,
}

impl<O> Default for Roster<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Roster<O> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder form of [`Roster::insert`].
    pub fn with<C>(mut self, role: RoleName, collaborator: C) -> Self
    where
        C: Capability<Output = O> + 'static,
    {
        self.insert(role, collaborator);
        self
    }

    /// Add a collaborator under `role`, returning the one it replaced, if any.
    pub fn insert<C>(&mut self, role: RoleName, collaborator: C) -> Option<Collaborator<O>>
    where
        C: Capability<Output = O> + 'static,
    {
        self.insert_boxed(role, Box::new(collaborator))
    }

    /// Add an already-boxed collaborator under `role`.
    pub fn insert_boxed(
        &mut self,
        role: RoleName,
        collaborator: Collaborator<O>,
    ) -> Option<Collaborator<O>> {
        if let Some(slot) = self.entries.iter_mut().find(|(r, _)| *r == role) {
            debug!(role = %role, "replacing collaborator in roster");
            return Some(std::mem::replace(&mut slot.1, collaborator));
        }
        self.entries.push((role, collaborator));
        None
    }

    pub fn get(&self, role: &str) -> Option<&Collaborator<O>> {
        self.entries
            .iter()
            .find(|(r, _)| r.as_str() == role)
            .map(|(_, c)| c)
    }

    pub fn contains(&self, role: &str) -> bool {
        self.get(role).is_some()
    }

    /// Role names in delegation order.
    pub fn roles(&self) -> impl Iterator<Item = &RoleName> {
        self.entries.iter().map(|(r, _)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RoleName, &Collaborator<O>)> {
        self.entries.iter().map(|(r, c)| (r, c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<O> fmt::Debug for Roster<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.roles()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CapabilityResult;

    struct Says(&'static str);

    impl Capability for Says {
        type Output = &'static str;

        fn perform(&self) -> CapabilityResult<&'static str> {
            Ok(self.0)
        }
    }

    fn role(name: &str) -> RoleName {
        RoleName::new(name).unwrap()
    }

    #[test]
    fn test_roles_follow_insertion_order() {
        let roster = Roster::new()
            .with(role("c"), Says("c"))
            .with(role("a"), Says("a"))
            .with(role("b"), Says("b"));

        let names: Vec<&str> = roster.roles().map(RoleName::as_str).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_insert_existing_role_replaces_in_place() {
        let mut roster = Roster::new()
            .with(role("first"), Says("old"))
            .with(role("second"), Says("second"));

        let replaced = roster.insert(role("first"), Says("new"));
        assert_eq!(replaced.unwrap().perform(), Ok("old"));

        let names: Vec<&str> = roster.roles().map(RoleName::as_str).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(roster.get("first").unwrap().perform(), Ok("new"));
    }

    #[test]
    fn test_empty_roster() {
        let roster: Roster<()> = Roster::default();
        assert!(roster.is_empty());
        assert!(!roster.contains("anything"));
        assert_eq!(format!("{roster:?}"), "[]");
    }
}
