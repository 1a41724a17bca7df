use crate::entities::Item;
use crate::util::assertions;

/// Static set of items to be nested, indexed by item id.
#[derive(Clone, Debug, Default)]
pub struct Instance {
    items: Vec<Item>,
}

impl Instance {
    pub fn new(items: Vec<Item>) -> Self {
        assert!(
            assertions::instance_item_ids_correct(&items),
            "item ids must match their index"
        );
        Instance { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
