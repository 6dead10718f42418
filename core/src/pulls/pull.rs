use std::fmt;

/// One contiguous engagement.
///
/// Members form a set: inserting an existing member is a no-op. Iteration
/// yields members in first-detection order so output stays reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pull<T> {
    members: Vec<T>,
}

impl<T: PartialEq> Pull<T> {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Returns false if the member was already present
    pub fn insert(&mut self, member: T) -> bool {
        if self.members.contains(&member) {
            return false;
        }
        self.members.push(member);
        true
    }
}

impl<T> Pull<T> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    pub fn members(&self) -> &[T] {
        &self.members
    }
}

impl<T: PartialEq> Default for Pull<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> FromIterator<T> for Pull<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut pull = Self::new();
        for member in iter {
            pull.insert(member);
        }
        pull
    }
}

impl<'a, T> IntoIterator for &'a Pull<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<T> IntoIterator for Pull<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Pull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{member}")?;
        }
        write!(f, "}}")
    }
}
