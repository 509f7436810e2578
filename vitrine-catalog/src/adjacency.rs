use vitrine_manifest::{Collection, Item};

/// The items on either side of one item, for previous/next navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Neighbors<'a> {
    pub previous: Option<&'a Item>,
    pub next: Option<&'a Item>,
}

/// Finds the items adjacent to `item_id` in display order.
///
/// Position is the first occurrence of the id. An absent id yields empty
/// neighbors rather than an error; previous/next arrows are a display
/// affordance, not a lookup.
#[must_use]
pub fn neighbors<'a>(collection: &'a Collection, item_id: &str) -> Neighbors<'a> {
    let Some(position) = collection.items.iter().position(|item| item.id == item_id) else {
        return Neighbors::default();
    };
    Neighbors {
        previous: position.checked_sub(1).map(|previous| &collection.items[previous]),
        next: collection.items.get(position + 1),
    }
}
