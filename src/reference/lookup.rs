/// Ordered ID -> label mapping used to drive selection prompts.
///
/// Entries keep the order they were inserted in. Re-inserting an existing ID
/// replaces its label without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup {
    entries: Vec<(String, String)>,
}

impl Lookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        let id = id.into();
        let label = label.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = label,
            None => self.entries.push((id, label)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, label)| label.as_str())
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, label)| (id.as_str(), label.as_str()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, label)| label.as_str())
    }

    /// Type-ahead suggestions: nothing for an empty query, otherwise every
    /// entry whose label contains `query` ignoring case, in lookup order.
    pub fn search(&self, query: &str) -> Lookup {
        if query.is_empty() {
            return Lookup::new();
        }
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, label)| label.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

impl FromIterator<(String, String)> for Lookup {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut lookup = Lookup::new();
        for (id, label) in iter {
            lookup.insert(id, label);
        }
        lookup
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Lookup {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(id, label)| (id.to_string(), label.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payees() -> Lookup {
        [
            ("p1", "Grocery Outlet"),
            ("p2", "Gas Station"),
            ("p3", "Fancy GROCER"),
            ("p4", "Landlord"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_query_yields_no_suggestions() {
        assert!(payees().search("").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_and_keeps_order() {
        let found = payees().search("grocer");
        let labels: Vec<&str> = found.labels().collect();
        assert_eq!(labels, vec!["Grocery Outlet", "Fancy GROCER"]);
        assert_eq!(found.ids().collect::<Vec<_>>(), vec!["p1", "p3"]);
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(payees().search("zzz").is_empty());
    }

    #[test]
    fn duplicate_insert_replaces_label_in_place() {
        let mut lookup = payees();
        lookup.insert("p2", "Gas & Go");

        assert_eq!(lookup.len(), 4);
        assert_eq!(lookup.get("p2"), Some("Gas & Go"));
        assert_eq!(lookup.ids().nth(1), Some("p2"));
    }
}
