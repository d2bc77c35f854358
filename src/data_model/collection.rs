use crate::data_model::DataSet;

/// The ordered list of domains owned by the current rank.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    domains: Vec<DataSet>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a domain at the end of this collection.
    pub fn add_domain(&mut self, domain: DataSet) {
        self.domains.push(domain);
    }

    /// The number of domains local to this rank.
    #[inline]
    pub fn local_size(&self) -> usize {
        self.domains.len()
    }

    /// Is this collection empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// The `i`-th local domain.
    #[inline]
    pub fn domain(&self, i: usize) -> Option<&DataSet> {
        self.domains.get(i)
    }

    /// All the local domains, in order.
    #[inline]
    pub fn domains(&self) -> &[DataSet] {
        &self.domains
    }

    /// Iterates through the local domains, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DataSet> {
        self.domains.iter()
    }
}

impl FromIterator<DataSet> for Collection {
    fn from_iter<I: IntoIterator<Item = DataSet>>(iter: I) -> Self {
        Self {
            domains: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Collection {
    type Item = DataSet;
    type IntoIter = std::vec::IntoIter<DataSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.domains.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a DataSet;
    type IntoIter = std::slice::Iter<'a, DataSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.domains.iter()
    }
}
