use std::collections::BTreeMap;

use yard_core::ContainerKind;
use yard_domain::{ContainerStore, Storage};

/// 按货物类型分组的仓库，组内保持登记顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageRegistry {
    by_kind: BTreeMap<ContainerKind, Vec<Storage>>,
}

impl StorageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, storage: Storage) {
        self.by_kind
            .entry(storage.content_kind())
            .or_default()
            .push(storage);
    }

    pub fn storages_of(&self, kind: ContainerKind) -> &[Storage] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Storage> + Clone {
        self.by_kind.values().flat_map(|storages| storages.iter())
    }

    /// 第一个有剩余容量的同类型仓库
    pub fn find_available(&self, kind: ContainerKind) -> Option<&Storage> {
        self.storages_of(kind)
            .iter()
            .find(|storage| storage.capacity_remaining() > 0)
    }

    pub fn find_available_mut(&mut self, kind: ContainerKind) -> Option<&mut Storage> {
        self.by_kind
            .get_mut(&kind)?
            .iter_mut()
            .find(|storage| storage.capacity_remaining() > 0)
    }

    pub fn len(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Storage> for StorageRegistry {
    fn from_iter<I: IntoIterator<Item = Storage>>(iter: I) -> Self {
        let mut registry = StorageRegistry::new();
        for storage in iter {
            registry.register(storage);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yard_domain::Container;

    fn registry() -> StorageRegistry {
        vec![
            Storage::new("203 Cars Street, UK", ContainerKind::Car, 5).unwrap(),
            Storage::new("101 Liquids Street, UK", ContainerKind::Liquid, 1).unwrap(),
            Storage::new("201 Cars Street, UK", ContainerKind::Car, 1).unwrap(),
            Storage::new("102 Liquids Street, UK", ContainerKind::Liquid, 3).unwrap(),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_grouped_in_registration_order() {
        let registry = registry();
        let cars: Vec<&str> = registry
            .storages_of(ContainerKind::Car)
            .iter()
            .map(|s| s.location())
            .collect();
        assert_eq!(cars, vec!["203 Cars Street, UK", "201 Cars Street, UK"]);
        assert!(registry.storages_of(ContainerKind::SpareParts).is_empty());
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_first_available_skips_full_storage() {
        let mut registry = registry();
        let first = registry.find_available_mut(ContainerKind::Liquid).unwrap();
        assert_eq!(first.location(), "101 Liquids Street, UK");
        first.add(Container::liquid("4", 10, "Oil")).unwrap();

        let next = registry.find_available(ContainerKind::Liquid).unwrap();
        assert_eq!(next.location(), "102 Liquids Street, UK");
    }

    #[test]
    fn test_no_storage_of_kind() {
        let mut registry = registry();
        assert!(registry.find_available(ContainerKind::SpareParts).is_none());
        assert!(registry.find_available_mut(ContainerKind::SpareParts).is_none());
        assert!(StorageRegistry::new().is_empty());
    }
}
