//! Category Buckets
//!
//! Five ordered buckets, one per category, presented as their concatenation.
//! Inserting into a bucket places the item at the end of its category block
//! in the presented list, so the list stays grouped and ascending.

use crate::model::{ItemCategory, ObjectiveItem};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBuckets {
    buckets: [Vec<ObjectiveItem>; 5],
}

impl CategoryBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group items by category, keeping their relative order within a category.
    /// Items with an empty id get a fresh one.
    pub fn from_items(items: impl IntoIterator<Item = ObjectiveItem>) -> Self {
        let mut buckets = Self::new();
        let mut moved = 0;
        for (position, mut item) in items.into_iter().enumerate() {
            if item.id.is_empty() {
                item.id = Uuid::new_v4().to_string();
            }
            if buckets.push(item) != position {
                moved += 1;
            }
        }
        if moved > 0 {
            log::debug!("regrouped initial items by category ({} out of place)", moved);
        }
        buckets
    }

    pub fn counts(&self) -> [usize; 5] {
        let mut counts = [0; 5];
        for (count, bucket) in counts.iter_mut().zip(&self.buckets) {
            *count = bucket.len();
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Presented index at which a new item of `category` lands:
    /// the running sum of counts up to and including its own bucket.
    pub fn insertion_index(&self, category: ItemCategory) -> usize {
        self.buckets[..=category.index()].iter().map(Vec::len).sum()
    }

    /// Append a blank item to its category block, returning its presented index
    pub fn add(&mut self, category: ItemCategory) -> usize {
        self.push(ObjectiveItem::blank(category))
    }

    /// Append `item` to its category block, returning its presented index
    pub fn push(&mut self, item: ObjectiveItem) -> usize {
        let index = self.insertion_index(item.items_type);
        self.buckets[item.items_type.index()].push(item);
        index
    }

    /// Map a presented index to (category, offset within the bucket)
    pub fn locate(&self, index: usize) -> Option<(ItemCategory, usize)> {
        let mut start = 0;
        for category in ItemCategory::ALL {
            let len = self.buckets[category.index()].len();
            if index < start + len {
                return Some((category, index - start));
            }
            start += len;
        }
        None
    }

    pub fn get(&self, index: usize) -> Option<&ObjectiveItem> {
        let (category, offset) = self.locate(index)?;
        self.buckets[category.index()].get(offset)
    }

    /// Remove the item at presented `index` if it belongs to `category`
    pub fn remove(&mut self, index: usize, category: ItemCategory) -> Option<ObjectiveItem> {
        match self.locate(index) {
            Some((found, offset)) if found == category => {
                Some(self.buckets[category.index()].remove(offset))
            }
            Some((found, _)) => {
                log::warn!(
                    "refusing to remove item {}: expected category {}, found {}",
                    index,
                    category.items_type(),
                    found.items_type()
                );
                None
            }
            None => None,
        }
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.iter().position(|item| item.id == id)
    }

    pub fn remove_by_id(&mut self, id: &str) -> Option<ObjectiveItem> {
        let index = self.position_of(id)?;
        let category = self.get(index)?.items_type;
        self.remove(index, category)
    }

    /// Returns false when no item has that id
    pub fn set_title(&mut self, id: &str, title: String) -> bool {
        match self.buckets.iter_mut().flatten().find(|item| item.id == id) {
            Some(item) => {
                item.title = title;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectiveItem> + '_ {
        self.buckets.iter().flatten()
    }

    pub fn to_vec(&self) -> Vec<ObjectiveItem> {
        self.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemCategory::*;

    fn categories(buckets: &CategoryBuckets) -> Vec<ItemCategory> {
        buckets.iter().map(|item| item.items_type).collect()
    }

    #[test]
    fn test_period_inserted_before_purpose() {
        let mut buckets = CategoryBuckets::new();
        let first = buckets.add(Period);
        let purpose = buckets.add(Purpose);
        let second = buckets.add(Period);

        assert_eq!((first, purpose, second), (0, 1, 1));
        assert_eq!(categories(&buckets), vec![Period, Period, Purpose]);

        let ids: Vec<_> = buckets.iter().map(|item| item.id.clone()).collect();
        assert_eq!(buckets.position_of(&ids[0]), Some(0));
        assert_eq!(buckets.get(2).map(|item| item.items_type), Some(Purpose));
    }

    #[test]
    fn test_insertion_index_is_running_sum() {
        let mut buckets = CategoryBuckets::new();
        buckets.add(Metric);
        buckets.add(Degree);
        buckets.add(Degree);
        buckets.add(Action);

        assert_eq!(buckets.counts(), [0, 2, 0, 1, 1]);
        assert_eq!(buckets.insertion_index(Period), 0);
        assert_eq!(buckets.insertion_index(Degree), 2);
        assert_eq!(buckets.insertion_index(Purpose), 2);
        assert_eq!(buckets.insertion_index(Action), 3);
        assert_eq!(buckets.insertion_index(Metric), 4);
    }

    #[test]
    fn test_remove_only_touches_its_category() {
        let mut buckets = CategoryBuckets::new();
        buckets.add(Period);
        buckets.add(Action);
        buckets.add(Action);
        buckets.add(Metric);
        let before: Vec<_> = buckets.to_vec();

        let removed = buckets.remove(1, Action).expect("item at 1 is an action");
        assert_eq!(removed, before[1]);
        assert_eq!(buckets.counts(), [1, 0, 0, 1, 1]);
        assert_eq!(buckets.to_vec(), vec![before[0].clone(), before[2].clone(), before[3].clone()]);
    }

    #[test]
    fn test_remove_rejects_mismatched_category() {
        let mut buckets = CategoryBuckets::new();
        buckets.add(Period);
        buckets.add(Purpose);

        assert!(buckets.remove(1, Period).is_none());
        assert!(buckets.remove(7, Period).is_none());
        assert_eq!(buckets.len(), 2);
    }

    #[test]
    fn test_from_items_groups_and_fills_ids() {
        let item = |id: &str, category| ObjectiveItem {
            id: id.to_string(),
            title: id.to_string(),
            items_type: category,
        };
        let buckets = CategoryBuckets::from_items(vec![
            item("m", Metric),
            item("p1", Period),
            item("", Action),
            item("p2", Period),
        ]);

        let titles: Vec<_> = buckets.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, vec!["p1", "p2", "", "m"]);
        assert!(buckets.iter().all(|item| !item.id.is_empty()));
    }

    #[test]
    fn test_from_items_keeps_grouped_input_as_given() {
        let items = vec![
            ObjectiveItem::blank(Period),
            ObjectiveItem::blank(Degree),
            ObjectiveItem::blank(Degree),
            ObjectiveItem::blank(Metric),
        ];
        let buckets = CategoryBuckets::from_items(items.clone());
        assert_eq!(buckets.to_vec(), items);
    }

    #[test]
    fn test_set_title_and_remove_by_id() {
        let mut buckets = CategoryBuckets::new();
        buckets.add(Degree);
        let id = buckets.get(0).unwrap().id.clone();

        assert!(buckets.set_title(&id, "twice a week".to_string()));
        assert!(!buckets.set_title("missing", "x".to_string()));
        assert_eq!(buckets.get(0).unwrap().title, "twice a week");

        assert!(buckets.remove_by_id(&id).is_some());
        assert!(buckets.is_empty());
    }
}
