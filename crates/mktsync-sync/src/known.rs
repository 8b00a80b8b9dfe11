use std::collections::HashSet;

/// Offer identifiers a campaign currently has mapped on the marketplace.
///
/// Keeps the order the catalog listed them in and drops repeats, so every
/// identifier is represented once in reconciliation output.
#[derive(Debug, Clone, Default)]
pub struct KnownOffers {
    order: Vec<String>,
    index: HashSet<String>,
}

impl KnownOffers {
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl FromIterator<String> for KnownOffers {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut known = KnownOffers::default();
        for id in iter {
            if known.index.insert(id.clone()) {
                known.order.push(id);
            }
        }
        known
    }
}

impl<'a> FromIterator<&'a str> for KnownOffers {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}
