//! Parallel cell traversal with one decoder per rayon worker.

use super::{DecodeConfig, IndexCellData};
use crate::cell::CellId;
use crate::index::{IndexCell, ShapeIndex};
use crate::timing::DecodeTimings;
use rayon::prelude::*;

/// Decode every `(id, contents)` pair of `cells` in parallel and call `f` on
/// each loaded decoder.
///
/// Each rayon fold group owns its own `IndexCellData`, so the decoders'
/// caches are never shared between threads. Returns the merged decode
/// counters of all groups.
pub fn for_each_cell_par<'a, I, F>(
    index: &'a I,
    cells: &'a [(CellId, IndexCell)],
    config: DecodeConfig,
    f: F,
) -> DecodeTimings
where
    I: ShapeIndex + Sync + ?Sized,
    F: Fn(&IndexCellData<'a, I>) + Sync + Send,
{
    cells
        .par_iter()
        .fold(
            || IndexCellData::with_config(config),
            |mut data, (id, cell)| {
                data.load_cell(index, *id, cell);
                f(&data);
                data
            },
        )
        .map(|data| *data.timings())
        .reduce(DecodeTimings::default, |mut a, b| {
            a.merge(&b);
            a
        })
}
