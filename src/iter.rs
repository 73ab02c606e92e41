use crate::header::{Group, Header};
use crate::name::HeaderName;
use crate::value::{HeaderValue, Slot};

impl<'a> IntoIterator for &'a Header {
    type Item = <Values<'a> as Iterator>::Item;

    type IntoIter = Values<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over non-null header values in insertion order.
///
/// Returned from [`Header::iter`].
#[derive(Clone)]
pub struct Values<'a> {
    iter: std::slice::Iter<'a, Group>,
    current: std::slice::Iter<'a, Slot>,
}

impl<'a> Values<'a> {
    pub(crate) fn new(groups: &'a [Group]) -> Self {
        let mut iter = groups.iter();
        Self {
            current: iter
                .next()
                .map(|group| group.slots.iter())
                .unwrap_or_default(),
            iter,
        }
    }
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a HeaderValue;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for slot in self.current.by_ref() {
                if let Some(value) = slot.value() {
                    return Some(value);
                }
            }
            self.current = self.iter.next()?.slots.iter();
        }
    }
}

impl std::fmt::Debug for Values<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

// ===== Raw =====

/// Iterator over raw case-variant groups, returned from [`Header::raw`].
#[derive(Clone)]
pub struct Raw<'a> {
    iter: std::slice::Iter<'a, Group>,
}

impl<'a> Raw<'a> {
    pub(crate) fn new(groups: &'a [Group]) -> Self {
        Self {
            iter: groups.iter(),
        }
    }
}

impl<'a> Iterator for Raw<'a> {
    type Item = (&'a HeaderName, &'a [Slot]);

    fn next(&mut self) -> Option<Self::Item> {
        let group = self.iter.next()?;
        Some((&group.key, group.slots.as_slice()))
    }
}

impl std::fmt::Debug for Raw<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.clone().map(|(key, slots)| (key.as_str(), slots)))
            .finish()
    }
}
