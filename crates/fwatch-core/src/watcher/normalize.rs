//! Event normalizer: keep creates and writes, drop the rest

use super::event::{ChangeEvent, ChangeKind};
use crate::pipeline::WorkItem;

/// Reduce a change to a work item, or `None` if it is not of interest
pub fn normalize(event: ChangeEvent) -> Option<WorkItem> {
    match event.kind {
        ChangeKind::Created | ChangeKind::Modified => Some(WorkItem::new(event.path)),
        ChangeKind::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_created_is_forwarded() {
        let item = normalize(ChangeEvent::new("/d/a.txt", ChangeKind::Created));
        assert_eq!(item.map(WorkItem::into_path), Some(PathBuf::from("/d/a.txt")));
    }

    #[test]
    fn test_other_is_dropped() {
        assert!(normalize(ChangeEvent::new("/d/a.txt", ChangeKind::Other)).is_none());
    }

    fn any_kind() -> impl Strategy<Value = ChangeKind> {
        prop_oneof![
            Just(ChangeKind::Created),
            Just(ChangeKind::Modified),
            Just(ChangeKind::Other),
        ]
    }

    proptest! {
        #[test]
        fn prop_forwarded_iff_create_or_write(name in "[a-z0-9_]{1,16}", kind in any_kind()) {
            let path = PathBuf::from("/watched").join(&name);
            let result = normalize(ChangeEvent::new(path.clone(), kind));

            match kind {
                ChangeKind::Created | ChangeKind::Modified => {
                    prop_assert_eq!(result.map(WorkItem::into_path), Some(path));
                }
                ChangeKind::Other => prop_assert!(result.is_none()),
            }
        }
    }
}
