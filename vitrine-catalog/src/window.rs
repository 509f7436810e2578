use vitrine_manifest::Item;

/// Selects the sub-list of items a page should display.
///
/// Windows are fixed-size, non-overlapping pages aligned to multiples of
/// `limit`; the page chosen is the one containing `highlighted`. With
/// `limit` 5, a highlight at index 4 selects `[0, 5)` and a highlight at
/// index 5 selects `[5, 10)`. The final page is clipped to the list length.
///
/// - no `limit`: the whole list
/// - `limit` without `highlighted` (or an id that matches nothing): the
///   first `limit` items
#[must_use]
pub fn select_window<'a>(
    items: &'a [Item],
    highlighted: Option<&str>,
    limit: Option<usize>,
) -> &'a [Item] {
    let Some(limit) = limit else {
        return items;
    };
    if limit == 0 {
        return &items[..0];
    }
    let start = highlighted
        .and_then(|id| items.iter().position(|item| item.id == id))
        .map_or(0, |index| (index / limit) * limit);
    let end = (start + limit).min(items.len());
    &items[start..end]
}

/// Whether a "see more" affordance is warranted.
///
/// Depends only on the list length and the limit, never on which window was
/// selected.
#[must_use]
pub fn has_more(items: &[Item], limit: Option<usize>) -> bool {
    limit.is_some_and(|limit| items.len() > limit)
}
