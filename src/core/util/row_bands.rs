use std::num::NonZeroUsize;
use std::ops::Range;

/// Worker count used when the host does not configure one.
#[must_use]
pub fn available_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Splits `rows` into contiguous bands, one per worker.
///
/// Each band is `rows / workers` tall and the last band absorbs the remainder. Workers are
/// capped at `rows` so no band is ever empty; zero rows yield no bands.
#[must_use]
pub fn row_bands(rows: usize, workers: NonZeroUsize) -> Vec<Range<usize>> {
    let bands = workers.get().min(rows);
    if bands == 0 {
        return Vec::new();
    }

    let band_height = rows / bands;

    (0..bands)
        .map(|band| {
            let start = band * band_height;
            let end = if band == bands - 1 {
                rows
            } else {
                start + band_height
            };
            start..end
        })
        .collect()
}
