/// Merges the lines touched by several regions.
use std::collections::BTreeSet;

use anyhow::Result;

use crate::buffer::TextBuffer;
use crate::region::Region;

/// Returns every line touched by any of `regions`, ascending and without
/// duplicates. No regions means no lines.
///
/// # Errors
///
/// Returns an error if any region reaches past the end of the buffer.
pub fn collect_lines(buffer: &TextBuffer, regions: &[Region]) -> Result<Vec<usize>> {
    let mut lines = BTreeSet::new();
    for region in regions {
        lines.extend(region.touched_lines(buffer)?);
    }
    Ok(lines.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "a\n b\n  c\n   d\n";

    #[test]
    fn test_no_regions() {
        let buf = TextBuffer::from(TEXT);
        assert!(collect_lines(&buf, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_disjoint_regions() {
        let buf = TextBuffer::from(TEXT);
        let regions = [Region::new(0, 1), Region::new(11, 12)];
        assert_eq!(collect_lines(&buf, &regions).unwrap(), vec![0, 3]);
    }

    #[test]
    fn test_regions_in_any_order_come_out_ascending() {
        let buf = TextBuffer::from(TEXT);
        let regions = [Region::new(12, 11), Region::new(6, 5), Region::cursor(0)];
        assert_eq!(collect_lines(&buf, &regions).unwrap(), vec![0, 2, 3]);
    }

    #[test]
    fn test_same_line_counted_once() {
        let buf = TextBuffer::from(TEXT);
        let regions = [Region::cursor(2), Region::new(3, 4)];
        assert_eq!(collect_lines(&buf, &regions).unwrap(), vec![1]);
    }

    #[test]
    fn test_overlapping_multi_line_regions() {
        let buf = TextBuffer::from(TEXT);
        let regions = [Region::new(0, 6), Region::new(4, 12)];
        assert_eq!(collect_lines(&buf, &regions).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_bad_region_fails_whole_collection() {
        let buf = TextBuffer::from(TEXT);
        let regions = [Region::new(0, 1), Region::cursor(99)];
        assert!(collect_lines(&buf, &regions).is_err());
    }
}
