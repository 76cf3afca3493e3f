//! Role flags attached to collection elements
//!
//! Roles are descriptive: an element may carry several at once. Renderers
//! resolve them with [`RoleSet::dominant`], which applies the fixed precedence
//! pivot > comparing > swapping > current > found > visited.

use serde::ser::{Serialize, Serializer};

/// A highlight role for one element of the primary collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Pivot,
    Comparing,
    Swapping,
    Current,
    Found,
    Visited,
}

impl Role {
    /// All roles, highest precedence first
    pub const PRECEDENCE: [Role; 6] = [
        Role::Pivot,
        Role::Comparing,
        Role::Swapping,
        Role::Current,
        Role::Found,
        Role::Visited,
    ];

    fn bit(self) -> u8 {
        match self {
            Role::Pivot => 1 << 0,
            Role::Comparing => 1 << 1,
            Role::Swapping => 1 << 2,
            Role::Current => 1 << 3,
            Role::Found => 1 << 4,
            Role::Visited => 1 << 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Pivot => "pivot",
            Role::Comparing => "comparing",
            Role::Swapping => "swapping",
            Role::Current => "current",
            Role::Found => "found",
            Role::Visited => "visited",
        }
    }
}

/// Set of roles carried by one element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const fn empty() -> Self {
        RoleSet(0)
    }

    pub fn of(role: Role) -> Self {
        RoleSet(role.bit())
    }

    /// Builder-style insert
    pub fn with(mut self, role: Role) -> Self {
        self.insert(role);
        self
    }

    pub fn insert(&mut self, role: Role) {
        self.0 |= role.bit();
    }

    pub fn remove(&mut self, role: Role) {
        self.0 &= !role.bit();
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Roles in precedence order
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::PRECEDENCE
            .into_iter()
            .filter(move |role| self.contains(*role))
    }

    /// The role a renderer should display, or `None` for the default style
    pub fn dominant(&self) -> Option<Role> {
        self.iter().next()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(RoleSet::empty(), RoleSet::with)
    }
}

impl Serialize for RoleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_follows_precedence() {
        let set = RoleSet::of(Role::Visited)
            .with(Role::Current)
            .with(Role::Comparing);
        assert_eq!(set.dominant(), Some(Role::Comparing));

        let set = RoleSet::of(Role::Found).with(Role::Pivot);
        assert_eq!(set.dominant(), Some(Role::Pivot));

        assert_eq!(RoleSet::empty().dominant(), None);
    }

    #[test]
    fn test_insert_remove() {
        let mut set = RoleSet::empty();
        set.insert(Role::Swapping);
        assert!(set.contains(Role::Swapping));
        assert!(!set.contains(Role::Found));
        set.remove(Role::Swapping);
        assert!(set.is_empty());
    }

    #[test]
    fn test_serializes_as_role_names() {
        let set: RoleSet = [Role::Found, Role::Current].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["current","found"]"#);
    }
}
