use crate::core::data::row_band::RowBand;
use std::num::NonZeroUsize;

/// Splits rows `[0, height)` into `workers` contiguous bands.
///
/// Every band but the last gets `height / workers` rows; the last band takes
/// whatever remains. With fewer rows than workers the leading bands are empty
/// and the last one holds the whole image.
#[must_use]
pub fn partition_rows(height: u32, workers: NonZeroUsize) -> Vec<RowBand> {
    let workers = u32::try_from(workers.get()).unwrap_or(u32::MAX);
    let band_height = height / workers;

    (0..workers)
        .map(|band_num| {
            let start = band_num * band_height;
            let end = if band_num == workers - 1 {
                height // Last band takes any remainder rows
            } else {
                start + band_height
            };

            RowBand { start, end }
        })
        .collect()
}
