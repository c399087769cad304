//! Persistent singly-linked lists.
//!
//! [`List`] is the ordered-sequence type the combinators produce: repetition
//! collects into a list, [`sequence_of`](crate::sequence_of) and
//! [`choice`](crate::choice) consume one. Lists are immutable; every operation
//! returns a new list and tails are shared through [`Arc`], so cloning a list
//! or dropping a prefix is O(1) in memory.
use alloc::{sync::Arc, vec::Vec};
use core::{borrow::Borrow, fmt, iter::FusedIterator};

/// An immutable list with shared tails.
///
/// # Examples
///
/// ```
/// use jsoncomb::List;
///
/// let xs: List<i32> = [1, 2, 3].into_iter().collect();
/// let ys = List::cons(0, xs.clone());
/// assert_eq!(ys.to_vec(), vec![0, 1, 2, 3]);
/// assert_eq!(ys.drop(1), xs);
/// assert_eq!(xs.reverse().to_vec(), vec![3, 2, 1]);
/// ```
pub struct List<A> {
    head: Option<Arc<Node<A>>>,
}

struct Node<A> {
    value: A,
    next: List<A>,
}

impl<A> List<A> {
    /// The empty list.
    #[must_use]
    pub const fn nil() -> Self {
        Self { head: None }
    }

    /// Prepends `value` to `tail`.
    #[must_use]
    pub fn cons(value: A, tail: Self) -> Self {
        Self {
            head: Some(Arc::new(Node { value, next: tail })),
        }
    }

    /// A one-element list.
    #[must_use]
    pub fn singleton(value: A) -> Self {
        Self::cons(value, Self::nil())
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of elements. O(n).
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The first element, if any.
    #[must_use]
    pub fn head(&self) -> Option<&A> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Everything but the first element. The tail of the empty list is empty.
    #[must_use]
    pub fn tail(&self) -> Self {
        self.drop(1)
    }

    /// Splits into head and tail, the elimination form of the list.
    #[must_use]
    pub fn uncons(&self) -> Option<(&A, &Self)> {
        self.head.as_deref().map(|node| (&node.value, &node.next))
    }

    /// All but the first `n` elements. Shares the suffix with `self`.
    #[must_use]
    pub fn drop(&self, n: usize) -> Self {
        let mut rest = self;
        for _ in 0..n {
            match rest.uncons() {
                Some((_, next)) => rest = next,
                None => break,
            }
        }
        rest.clone()
    }

    /// Borrowing iterator from front to back.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Applies `f` to every element.
    #[must_use]
    pub fn map<B>(&self, f: impl FnMut(&A) -> B) -> List<B> {
        self.iter().map(f).collect()
    }
}

impl<A: Clone> List<A> {
    /// `n` copies of `value`.
    #[must_use]
    pub fn replicate(n: usize, value: A) -> Self {
        let mut out = Self::nil();
        for _ in 0..n {
            out = Self::cons(value.clone(), out);
        }
        out
    }

    /// Concatenation. Copies the spine of `self` and shares `other`.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        prepend_all(self.iter().collect(), other.clone())
    }

    /// The elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::nil(), |acc, value| Self::cons(value.clone(), acc))
    }

    /// The first `n` elements, or the whole list if shorter.
    #[must_use]
    pub fn take(&self, n: usize) -> Self {
        prepend_all(self.iter().take(n).collect(), Self::nil())
    }

    /// Pairs elements positionally, stopping at the shorter list.
    #[must_use]
    pub fn zip<B: Clone>(&self, other: &List<B>) -> List<(A, B)> {
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect()
    }

    /// Copies the elements into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<A> {
        self.iter().cloned().collect()
    }
}

impl<K, V> List<(K, V)> {
    /// Value of the first pair whose key equals `key`.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.iter()
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }
}

impl List<char> {
    /// The characters of `text`, in order.
    #[must_use]
    pub fn chars(text: &str) -> Self {
        text.chars().collect()
    }
}

fn prepend_all<A: Clone>(front: Vec<&A>, tail: List<A>) -> List<A> {
    front
        .into_iter()
        .rev()
        .fold(tail, |acc, value| List::cons(value.clone(), acc))
}

impl<A> Clone for List<A> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<A> Default for List<A> {
    fn default() -> Self {
        Self::nil()
    }
}

// Unlink iteratively so long uniquely-owned lists don't recurse on drop.
impl<A> Drop for List<A> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.next.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl<A: PartialEq> PartialEq for List<A> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for List<A> {}

impl<A: fmt::Debug> fmt::Debug for List<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for List<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let items: Vec<A> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Self::nil(), |acc, value| Self::cons(value, acc))
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: Clone> IntoIterator for List<A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Owning iterator over a [`List`].
///
/// Nodes this list owns alone are moved out; nodes shared with another list
/// are cloned.
#[derive(Debug)]
pub struct IntoIter<A> {
    list: List<A>,
}

impl<A: Clone> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.head.take()?;
        match Arc::try_unwrap(node) {
            Ok(Node { value, next }) => {
                self.list = next;
                Some(value)
            }
            Err(shared) => {
                self.list = shared.next.clone();
                Some(shared.value.clone())
            }
        }
    }
}

impl<A: Clone> FusedIterator for IntoIter<A> {}

/// Iterator over the elements of a [`List`].
#[derive(Debug)]
pub struct Iter<'a, A> {
    next: Option<&'a Node<A>>,
}

impl<A> fmt::Debug for Node<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Node")
    }
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.head.as_deref();
        Some(&node.value)
    }
}

impl<A> FusedIterator for Iter<'_, A> {}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec, vec::Vec};

    use super::List;

    fn list(xs: &[i32]) -> List<i32> {
        xs.iter().copied().collect()
    }

    #[test]
    fn cons_and_nil() {
        let xs = List::cons(1, List::cons(2, List::nil()));
        assert_eq!(xs.len(), 2);
        assert_eq!(xs.head(), Some(&1));
        assert_eq!(xs.tail(), List::singleton(2));
        assert!(List::<i32>::nil().is_empty());
        assert_eq!(List::<i32>::nil().head(), None);
        assert!(List::<i32>::nil().tail().is_empty());
    }

    #[test]
    fn append_shares_right_operand() {
        let xs = list(&[1, 2]);
        let ys = list(&[3, 4]);
        let zs = xs.append(&ys);
        assert_eq!(zs.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(zs.drop(2), ys);
        assert_eq!(List::nil().append(&ys), ys);
        assert_eq!(xs.append(&List::nil()), xs);
    }

    #[test]
    fn reverse() {
        assert_eq!(list(&[1, 2, 3]).reverse(), list(&[3, 2, 1]));
        assert!(List::<i32>::nil().reverse().is_empty());
    }

    #[test]
    fn take_and_drop_clamp() {
        let xs = list(&[1, 2, 3]);
        assert!(xs.take(0).is_empty());
        assert_eq!(xs.take(2), list(&[1, 2]));
        assert_eq!(xs.take(10), xs);
        assert_eq!(xs.drop(0), xs);
        assert_eq!(xs.drop(1), list(&[2, 3]));
        assert!(xs.drop(10).is_empty());
    }

    #[test]
    fn map_zip_replicate() {
        let xs = list(&[1, 2, 3]);
        assert_eq!(xs.map(|x| x * 10), list(&[10, 20, 30]));

        let names: List<char> = List::chars("ab");
        let zipped = xs.zip(&names);
        assert_eq!(zipped.to_vec(), vec![(1, 'a'), (2, 'b')]);

        assert_eq!(List::replicate(3, 'x').to_string(), "xxx");
        assert!(List::replicate(0, 'x').is_empty());
    }

    #[test]
    fn lookup_finds_first_match() {
        let pairs: List<(&str, i32)> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(pairs.lookup("a"), Some(&1));
        assert_eq!(pairs.lookup("b"), Some(&2));
        assert_eq!(pairs.lookup("c"), None);
    }

    #[test]
    fn chars_roundtrip() {
        let text = "héllo";
        assert_eq!(List::chars(text).to_string(), text);
        assert_eq!(List::chars(text).len(), 5);
    }

    #[test]
    fn into_iter_moves_or_clones() {
        let xs = list(&[1, 2, 3]);
        let shared = xs.drop(1);
        let owned: Vec<i32> = xs.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
        assert_eq!(shared.to_vec(), vec![2, 3]);
    }

    #[test]
    fn long_list_drops_without_overflow() {
        let xs: List<usize> = (0..1_000_000).collect();
        let shared = xs.drop(10);
        drop(xs);
        assert_eq!(shared.head(), Some(&10));
        let collected: Vec<usize> = shared.iter().take(3).copied().collect();
        assert_eq!(collected, vec![10, 11, 12]);
    }
}
