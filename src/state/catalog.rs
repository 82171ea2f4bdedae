use super::data::VideoEntry;

/// Base URL of the Cloudflare R2 bucket that serves the video files
pub const R2_BASE_URL: &str = "https://pub-7f4e732999f740a39783172c306c439c.r2.dev";

/// Entries per page: a 2x2 grid
pub const PAGE_SIZE: usize = 4;

/// Build one catalog entry. All videos live in the same bucket, so the
/// source is just a file name resolved against `R2_BASE_URL`.
fn entry(id: &str, title: &str, file: &str, thumbnail: &str) -> VideoEntry {
    VideoEntry {
        id: id.to_string(),
        title: title.to_string(),
        video_url: format!("{}/{}", R2_BASE_URL, file),
        thumbnail_path: thumbnail.to_string(),
        description: None,
    }
}

/// The static video catalog.
///
/// Defined once at startup as configuration data; entries are never
/// mutated or removed while the application runs.
pub fn entries() -> Vec<VideoEntry> {
    vec![
        entry("1", "Video 1", "IMG_0986.MOV", "/6.png"),
        entry("2", "Video 2", "IMG_0988.MOV", "/7.png"),
        entry("3", "Video 3", "IMG_0990.MOV", "/8.png"),
        entry("4", "Video 4", "IMG_0992.MOV", "/1.png"),
        entry("5", "Video 5", "IMG_0993.MP4", "/2.png"),
        entry("6", "Video 6", "IMG_0994.MP4", "/3.png"),
        entry("7", "Video 7", "IMG_0995.MP4", "/4.png"),
        entry("8", "Video 8", "IMG_0996.MP4", "/5.png"),
        entry(
            "9",
            "Ustoz AI Interview 1",
            "AQPYJZa6X1RxDwRQEyUziXiCUvAjUd9LcnKBQNdGBfc1Hb1VucwZIvqMQk1_aod.mp4",
            "/9.png",
        ),
        entry("10", "Ustoz AI Interview 2", "IMG_1250.MOV", "/11.png"),
        entry("11", "Ustoz AI Interview 3", "IMG_1251.MOV", "/12.png"),
        entry("12", "Ustoz AI Interview 4", "IMG_1252.MOV", "/10.png"),
        entry("13", "Ustoz AI Interview 5", "IMG_1253.MOV", "/13.png"),
        entry("14", "Ustoz AI Interview 6", "IMG_1253.MOV", "/14.png"),
        entry("15", "Ustoz AI Interview 7", "IMG_1255.MOV", "/15.png"),
    ]
}

/// Partition a catalog into consecutive pages of up to `page_size` entries.
///
/// Order is preserved, no entry is duplicated or dropped, and the last
/// page may be shorter than `page_size`. An empty input yields no pages.
/// `page_size` must be positive; zero panics per the `slice::chunks`
/// contract.
pub fn chunk_catalog<T: Clone>(entries: &[T], page_size: usize) -> Vec<Vec<T>> {
    entries
        .chunks(page_size)
        .map(|page| page.to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_page_count_is_ceil() {
        for (len, size, expected) in [(15, 4, 4), (16, 4, 4), (1, 4, 1), (4, 4, 1), (9, 2, 5)] {
            let items: Vec<usize> = (0..len).collect();
            assert_eq!(chunk_catalog(&items, size).len(), expected);
        }
    }

    #[test]
    fn test_chunk_preserves_order_and_content() {
        let items: Vec<usize> = (0..15).collect();
        let pages = chunk_catalog(&items, 4);

        let total: usize = pages.iter().map(|page| page.len()).sum();
        assert_eq!(total, items.len());

        let rejoined: Vec<usize> = pages.into_iter().flatten().collect();
        assert_eq!(rejoined, items);
    }

    #[test]
    fn test_chunk_fifteen_by_four() {
        let items: Vec<usize> = (0..15).collect();
        let lengths: Vec<usize> = chunk_catalog(&items, 4)
            .iter()
            .map(|page| page.len())
            .collect();
        assert_eq!(lengths, vec![4, 4, 4, 3]);
    }

    #[test]
    fn test_chunk_empty_catalog() {
        let items: Vec<usize> = Vec::new();
        assert!(chunk_catalog(&items, 4).is_empty());
    }

    #[test]
    fn test_chunk_divisible_length_fills_every_page() {
        let items: Vec<usize> = (0..12).collect();
        let pages = chunk_catalog(&items, 4);
        assert!(pages.iter().all(|page| page.len() == 4));
    }

    #[test]
    fn test_chunk_size_larger_than_catalog() {
        let items: Vec<usize> = (0..3).collect();
        let pages = chunk_catalog(&items, 10);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0], items);
    }

    #[test]
    fn test_catalog_entries_are_well_formed() {
        let catalog = entries();
        assert_eq!(catalog.len(), 15);

        let mut ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 15, "catalog IDs must be unique");

        for entry in &catalog {
            assert!(entry.video_url.starts_with(R2_BASE_URL));
            assert!(entry.thumbnail_path.starts_with('/'));
        }
    }
}
