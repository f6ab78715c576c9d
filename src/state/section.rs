// Active section - which navigation destination is selected
use crate::model::NavigationItem;

pub struct ActiveSection {
    index: usize,
}

impl ActiveSection {
    /// First destination is the primary one
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Select `destination_id`; ids that are not in `items` leave the section unchanged
    pub fn select(&mut self, items: &[NavigationItem], destination_id: &str) -> bool {
        match items
            .iter()
            .position(|item| item.destination_id == destination_id)
        {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    pub fn current<'a>(&self, items: &'a [NavigationItem]) -> Option<&'a NavigationItem> {
        items.get(self.index)
    }
}
