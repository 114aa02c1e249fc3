use crate::cruise::Cruise;

/// Default number of sailings that can be compared side by side.
pub const MAX_COMPARISON: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    /// Not added: the comparison already holds `max` sailings.
    Full,
}

/// Selected sailing ids, in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    ids: Vec<String>,
    max: usize,
}

impl Default for Comparison {
    fn default() -> Self {
        Self::new(MAX_COMPARISON)
    }
}

impl Comparison {
    pub fn new(max: usize) -> Self {
        Self {
            ids: Vec::new(),
            max,
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.max
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Removes `id` if selected, otherwise adds it when there is room.
    pub fn toggle(&mut self, id: &str) -> Toggle {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
            return Toggle::Removed;
        }
        if self.is_full() {
            return Toggle::Full;
        }
        self.ids.push(id.to_string());
        Toggle::Added
    }

    /// Selected sailings from `catalog`, by departure date then lowest price.
    /// Undated sailings go after dated ones; unpriced after priced.
    pub fn sorted<'a>(&self, catalog: &'a [Cruise]) -> Vec<&'a Cruise> {
        let mut out: Vec<&Cruise> = catalog
            .iter()
            .filter(|c| self.contains(c.sailing_id()))
            .collect();
        out.sort_by(|a, b| {
            (a.departure.is_none(), a.departure)
                .cmp(&(b.departure.is_none(), b.departure))
                .then_with(|| a.cmp_price(b))
        });
        out
    }
}
