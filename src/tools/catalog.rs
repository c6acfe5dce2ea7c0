//! 專輯目錄：兩個根目錄合併後、依演出者排序的專輯清單

use super::album::{Album, Location};

/// 清單篩選條件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Active,
    Archived,
}

impl ListFilter {
    #[must_use]
    pub const fn accepts(self, location: Location) -> bool {
        match self {
            Self::All => true,
            Self::Active => matches!(location, Location::Active),
            Self::Archived => matches!(location, Location::Archive),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    /// 串接使用中與封存清單後，以演出者名稱（不分大小寫）穩定排序
    #[must_use]
    pub fn from_parts(active: Vec<Album>, archived: Vec<Album>) -> Self {
        let mut albums = active;
        albums.extend(archived);
        albums.sort_by_cached_key(|album| album.artist.to_lowercase());
        Self { albums }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Album> {
        self.albums.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Album> {
        self.albums.iter()
    }

    #[must_use]
    pub fn count(&self, location: Location) -> usize {
        self.albums.iter().filter(|a| a.location == location).count()
    }

    /// 依條件篩選，保留原本的索引
    pub fn filtered(&self, filter: ListFilter) -> impl Iterator<Item = (usize, &Album)> {
        self.albums
            .iter()
            .enumerate()
            .filter(move |(_, album)| filter.accepts(album.location))
    }

    /// 移動成功後切換位置；索引不存在時回傳 None
    pub fn toggle_location(&mut self, index: usize) -> Option<Location> {
        let album = self.albums.get_mut(index)?;
        album.location = album.location.opposite();
        Some(album.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::from_parts(
            vec![
                Album::new("radiohead", "OK Computer", Location::Active),
                Album::new("Beatles", "Abbey Road", Location::Active),
            ],
            vec![
                Album::new("Radiohead", "Kid A", Location::Archive),
                Album::new("ABBA", "Arrival", Location::Archive),
            ],
        )
    }

    #[test]
    fn test_sorted_case_insensitive_and_stable() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog.iter().map(|a| a.name.as_str()).collect();
        // radiohead 與 Radiohead 排序鍵相同，維持原本順序（active 在前）
        assert_eq!(names, vec!["Arrival", "Abbey Road", "OK Computer", "Kid A"]);
    }

    #[test]
    fn test_counts_and_filter() {
        let catalog = sample_catalog();
        assert_eq!(catalog.count(Location::Active), 2);
        assert_eq!(catalog.count(Location::Archive), 2);

        let archived: Vec<usize> = catalog
            .filtered(ListFilter::Archived)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(archived, vec![0, 3]);
        assert_eq!(catalog.filtered(ListFilter::All).count(), 4);
    }

    #[test]
    fn test_toggle_location() {
        let mut catalog = sample_catalog();
        assert_eq!(catalog.toggle_location(1), Some(Location::Archive));
        assert_eq!(catalog.count(Location::Archive), 3);
        assert_eq!(catalog.toggle_location(99), None);
    }
}
