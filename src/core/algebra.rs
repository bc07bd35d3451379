use crate::core::set::Set;
use crate::domain::ports::Element;
use std::ops::{BitAnd, BitOr, Sub};

impl<T: Element + Clone> Set<T> {
    /// Union of `self` and `other`.
    ///
    /// This consumes and extends the receiver instead of allocating a new set,
    /// so it behaves exactly like [`Set::add_set`] followed by returning `self`.
    /// Clone first if the original set is still needed.
    ///
    /// ```
    /// use unit_set::Set;
    ///
    /// let a = Set::from([1, 2]);
    /// let b = Set::from([2, 3]);
    /// let u = a.clone().union(&b);
    /// assert_eq!(u.len(), 3);
    /// assert_eq!(a.len(), 2);
    /// ```
    pub fn union(mut self, other: &Set<T>) -> Set<T> {
        self.add_set(other);
        self
    }

    /// Elements present in both sets. Neither operand is modified.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        self.inner().intersection(other.inner()).cloned().collect()
    }

    /// Elements of `self` that are absent from `other`. Neither operand is modified.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        self.inner().difference(other.inner()).cloned().collect()
    }
}

/// `a | &b` is [`Set::union`]: `a` is moved in and comes back extended.
impl<T: Element + Clone> BitOr<&Set<T>> for Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: &Set<T>) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: Element + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: &Set<T>) -> Set<T> {
        self.intersection(rhs)
    }
}

impl<T: Element + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: &Set<T>) -> Set<T> {
        self.difference(rhs)
    }
}
