//! Integration tests for `IndexCellData` over multi-cell traversals.

mod support;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use s2_geocore::shape::{LaxPolygon, PointVector, Polyline};
use s2_geocore::{
    textformat, CellId, ClippedShape, DecodeConfig, Dimension, EdgeId, IndexCell, IndexCellData,
    ShapeIndex, VecShapeIndex,
};
use std::collections::{BTreeMap, BTreeSet};
use support::points::{cap_points, random_sphere_point, random_walk};

const LEVEL: u8 = 3;

/// Assign every edge to the cells containing either endpoint.
///
/// Not a real index: long edges miss the cells they only pass through, which
/// is fine for exercising the decoder.
fn clip_by_endpoints(index: &VecShapeIndex) -> Vec<(CellId, IndexCell)> {
    let mut cells: BTreeMap<CellId, BTreeMap<u32, BTreeSet<EdgeId>>> = BTreeMap::new();
    for shape_id in 0..index.num_shape_ids() as u32 {
        let Some(shape) = index.shape(shape_id) else {
            continue;
        };
        for e in 0..shape.num_edges() {
            let edge = shape.edge(e);
            for v in [edge.v0, edge.v1] {
                cells
                    .entry(CellId::from_point(v, LEVEL))
                    .or_default()
                    .entry(shape_id)
                    .or_default()
                    .insert(e as EdgeId);
            }
        }
    }
    cells
        .into_iter()
        .map(|(id, shapes)| {
            let clipped = shapes
                .into_iter()
                .map(|(shape_id, edges)| {
                    ClippedShape::new(shape_id, false, edges.into_iter().collect())
                })
                .collect();
            (id, IndexCell::new(clipped))
        })
        .collect()
}

fn random_index(seed: u64) -> VecShapeIndex {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut index = VecShapeIndex::new();
    for _ in 0..6 {
        let anchor = random_sphere_point(&mut rng);
        match rng.gen_range(0..3) {
            0 => {
                let n = rng.gen_range(1..20);
                index.add(Box::new(PointVector::new(cap_points(anchor, 0.3, n, &mut rng))));
            }
            1 => {
                let n = rng.gen_range(2..30);
                index.add(Box::new(Polyline::new(random_walk(anchor, n, 0.05, &mut rng))));
            }
            _ => {
                let loops = (0..rng.gen_range(1..4))
                    .map(|_| {
                        let n = rng.gen_range(3..12);
                        random_walk(anchor, n, 0.05, &mut rng)
                    })
                    .collect();
                index.add(Box::new(LaxPolygon::new(loops)));
            }
        }
    }
    index
}

#[test]
fn test_traversal_decodes_every_clipped_edge() {
    for seed in 0..5 {
        let index = random_index(seed);
        let cells = clip_by_endpoints(&index);
        let mut data = IndexCellData::new();

        let mut seen = BTreeSet::new();
        for (id, cell) in &cells {
            data.load_cell(&index, *id, cell);
            assert_eq!(data.cell_id(), *id);
            assert_eq!(data.edges().len(), cell.num_edges());

            for region in data.shape_regions() {
                let shape = index.shape(region.shape_id).unwrap();
                let clipped = cell.find_by_shape_id(region.shape_id).unwrap();
                let decoded = data.shape_edges(region.shape_id);
                assert_eq!(decoded.len(), clipped.num_edges());
                for (e, &edge_id) in decoded.iter().zip(clipped.edges()) {
                    assert_eq!(e.edge_id(), edge_id);
                    assert_eq!(e.edge(), shape.edge(edge_id as usize));
                    let chain = shape.chain(e.chain_id());
                    assert_eq!(chain.start + e.offset(), edge_id as usize);
                    seen.insert((region.shape_id, edge_id));
                }
            }

            // Dimension groups are contiguous, ascending, and hold only
            // shapes of their own dimension.
            let mut next = 0;
            for dim in Dimension::ALL {
                let region = data.dim_region(dim);
                assert_eq!(region.start, next);
                next += region.len;
            }
            for r in data.shape_regions() {
                let dim = index.shape(r.shape_id).unwrap().dimension();
                let dim_range = data.dim_region(dim).range();
                assert!(dim_range.start <= r.region.start);
                assert!(r.region.range().end <= dim_range.end);
            }
            assert_eq!(next, data.edges().len());
        }

        assert_eq!(seen.len(), index.num_edges(), "seed {}", seed);
    }
}

#[test]
fn test_center_lies_in_cell() {
    let index = random_index(99);
    let cells = clip_by_endpoints(&index);
    let mut data = IndexCellData::new();
    for (id, cell) in &cells {
        data.load_cell(&index, *id, cell);
        let c = data.cell();
        assert_eq!(c.id(), *id);
        assert!(c.contains_point(data.center()));
        assert_eq!(CellId::from_point(data.center(), LEVEL), *id);
    }
}

#[test]
fn test_filtered_decoder_matches_full_decoder() {
    let index = random_index(3);
    let cells = clip_by_endpoints(&index);
    let mut full = IndexCellData::new();
    let mut lines_only = IndexCellData::with_config(DecodeConfig::only(&[Dimension::Polyline]));

    for (id, cell) in &cells {
        full.load_cell(&index, *id, cell);
        lines_only.load_cell(&index, *id, cell);

        assert_eq!(
            lines_only.edges(),
            full.dim_edges(Dimension::Polyline),
            "cell {}",
            id
        );
        assert!(lines_only.dim_edges(Dimension::Point).is_empty());
        assert!(lines_only.dim_edges(Dimension::Polygon).is_empty());
    }
}

#[test]
fn test_range_edges_for_every_dimension_subset() {
    let index = random_index(11);
    let cells = clip_by_endpoints(&index);
    let mut full = IndexCellData::new();

    for mask in 0..8u8 {
        let config = DecodeConfig {
            dim_wanted: [mask & 1 != 0, mask & 2 != 0, mask & 4 != 0],
        };
        let mut filtered = IndexCellData::with_config(config);

        for (id, cell) in &cells {
            full.load_cell(&index, *id, cell);
            filtered.load_cell(&index, *id, cell);

            for lo in Dimension::ALL {
                for hi in Dimension::ALL {
                    let got = filtered.dim_range_edges(lo, hi);
                    if lo > hi {
                        assert!(got.is_empty());
                        continue;
                    }
                    let expected: Vec<_> = Dimension::ALL[lo.index()..=hi.index()]
                        .iter()
                        .filter(|d| config.dim_wanted[d.index()])
                        .flat_map(|&d| full.dim_edges(d).iter().copied())
                        .collect();
                    assert_eq!(got, expected.as_slice(), "mask {:03b} {:?}..={:?}", mask, lo, hi);
                    let got_ids: Vec<_> = got.iter().map(|e| e.edge_id()).collect();
                    let expected_ids: Vec<_> = expected.iter().map(|e| e.edge_id()).collect();
                    assert_eq!(got_ids, expected_ids);
                }
            }
        }
    }
}

#[test]
fn test_textformat_index_layout() {
    let index = textformat::make_index(
        "0:0 | 0:1 # 0:0, 0:1, 0:2 | 1:1, 1:2 # 0:0, 0:3, 3:0; 1:1, 1:2, 2:1",
    )
    .unwrap();
    let cell = index.whole_cell();
    let mut data = IndexCellData::new();
    data.load_cell(&index, CellId::from_face(0).unwrap(), &cell);

    assert_eq!(data.dim_region(Dimension::Point).len, 2);
    assert_eq!(data.dim_region(Dimension::Polyline).len, 3);
    assert_eq!(data.dim_region(Dimension::Polygon).len, 6);
    assert_eq!(
        data.dim_range_edges(Dimension::Polyline, Dimension::Polygon).len(),
        9
    );

    let polygon = data.shape_edges(3);
    assert_eq!(polygon[3].chain_id(), 1);
    assert_eq!(polygon[3].offset(), 0);
    // Closing edge of the first loop.
    assert_eq!(polygon[2].edge().v1, polygon[0].edge().v0);
}
