use crate::domain::ports::Element;
use serde::{Deserialize, Serialize};
use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt;

/// An unordered collection of unique values.
///
/// Backed by a [`HashSet`], so `contains` and insertion are O(1) on average.
/// Iteration order is unspecified and may differ between two calls on the same
/// set; this shows through [`Set::to_vec`], the `Display` output and every
/// serialized form.
///
/// A `Set` carries no locking. Sharing one between threads that mutate it needs
/// external synchronization (for example `Mutex<Set<T>>`) or separate clones.
///
/// Serializes as a sequence of its elements. Deserializing accepts any sequence,
/// duplicates included, and collapses them.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T: Element + Serialize",
    deserialize = "T: Element + Deserialize<'de>"
))]
pub struct Set<T> {
    elements: HashSet<T>,
}

impl<T: Element> Set<T> {
    pub fn new() -> Self {
        Self {
            elements: HashSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: HashSet::with_capacity(capacity),
        }
    }

    /// Builds a set from a slice; duplicates collapse to a single entry.
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        let mut set = Self::with_capacity(slice.len());
        set.add_slice(slice);
        set
    }

    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Inserts a single value, returning whether it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.elements.insert(value)
    }

    /// Inserts every given value. Values already present are ignored.
    ///
    /// ```
    /// use unit_set::Set;
    ///
    /// let mut set = Set::from([1, 2]);
    /// set.add([2, 3, 4]);
    /// assert_eq!(set.len(), 4);
    /// ```
    pub fn add<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(values);
    }

    pub fn add_slice(&mut self, slice: &[T])
    where
        T: Clone,
    {
        self.elements.extend(slice.iter().cloned());
    }

    /// In-place union: every element of `other` is inserted into `self`.
    pub fn add_set(&mut self, other: &Set<T>)
    where
        T: Clone,
    {
        self.elements.extend(other.iter().cloned());
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Copies the elements into a fresh `Vec`, in unspecified order.
    ///
    /// The result owns its elements, so growing it leaves the set untouched.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.iter().cloned().collect()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_iter().collect()
    }

    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.elements.is_subset(&other.elements)
    }

    pub fn is_superset(&self, other: &Set<T>) -> bool {
        self.elements.is_superset(&other.elements)
    }

    pub(crate) fn inner(&self) -> &HashSet<T> {
        &self.elements
    }
}

impl<T: Element> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Element> Eq for Set<T> {}

/// Renders as `[e1 e2 e3]`, each element through its own `Display`.
impl<T: Element + fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: Element> From<Vec<T>> for Set<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Element> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Element> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a, T: Element + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_empty_slice_is_empty_set() {
        let set = Set::<i32>::from_slice(&[]);
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set, Set::new());
    }

    #[test]
    fn test_add_grows_and_contains() {
        let mut set = Set::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(set.len(), 10);

        set.add([11, 12]);
        assert!(set.contains(&11));
        assert!(set.contains(&12));
        assert_eq!(set.len(), 12);
    }

    #[test]
    fn test_add_nothing_is_noop() {
        let mut set = Set::from([1, 2]);
        set.add(std::iter::empty());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut set = Set::from_slice(&[1, 1, 2, 2, 2]);
        assert_eq!(set.len(), 2);

        assert!(!set.insert(1));
        assert!(set.insert(3));
        set.add_slice(&[3, 3]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_add_set_keeps_old_and_new() {
        let mut a = Set::from_slice(&[1, 2, 3]);
        a.add_slice(&[11, 12]);
        let b = Set::from([20, 30, 40]);
        a.add_set(&b);

        assert!(a.contains(&1));
        assert!(a.contains(&12));
        assert!(a.contains(&40));
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_custom_element_type() {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        struct Custom {
            name: String,
            other: i32,
        }

        let mut set = Set::new();
        set.add([
            Custom {
                name: "test1".to_string(),
                other: 1,
            },
            Custom {
                name: "test2".to_string(),
                other: 2,
            },
        ]);
        assert_eq!(set.len(), 2);

        set.add([Custom {
            name: "test1".to_string(),
            other: 1,
        }]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_strings() {
        let mut set = Set::new();
        set.add(["test".to_string()]);
        assert!(set.contains(&"test".to_string()));
    }

    #[test]
    fn test_to_vec_is_independent_and_growable() {
        let original = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let set = Set::from_slice(&original);

        let mut values = set.to_vec();
        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|v| original.contains(v)));

        values.extend([98, 99, 100]);
        assert_eq!(values.len(), 13);
        assert_eq!(set.len(), 10);
        assert!(!set.contains(&98));
    }

    #[test]
    fn test_display_format() {
        let set = Set::from([123, 456]);
        let rendered = set.to_string();
        assert!(rendered == "[123 456]" || rendered == "[456 123]", "{}", rendered);

        assert_eq!(Set::<i32>::new().to_string(), "[]");
        assert_eq!(Set::from(["one"]).to_string(), "[one]");
    }

    #[test]
    fn test_extend_by_reference() {
        let mut set: Set<i32> = Set::new();
        set.extend(&[1, 2, 2, 3]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = Set::from([1, 2, 3]);
        let b = Set::from(vec![3, 1, 2, 1]);
        assert_eq!(a, b);
        assert!(a.is_subset(&b) && a.is_superset(&b));
    }
}
