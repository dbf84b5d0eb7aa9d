#![no_main]

use libfuzzer_sys::fuzz_target;

use ordered_bins::{make_increasing, Edge, OrderedBins};

/// Interpret the input as little-endian f64s: a flags byte, two halos, one
/// query value, then boundaries.
fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let floats: Vec<f64> = rest
        .chunks_exact(8)
        .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
        .collect();
    if floats.len() < 3 {
        return;
    }
    let (halo_below, halo_above, x) = (floats[0], floats[1], floats[2]);
    let raw = &floats[3..];

    let edge = if flags & 1 == 0 { Edge::Right } else { Edge::Left };
    let built = OrderedBins::builder()
        .boundaries(raw)
        .edge(edge)
        .halo_below(halo_below)
        .halo_above(halo_above)
        .error_below(flags & 2 == 0)
        .error_above(flags & 4 == 0)
        .build();
    if let Ok(bins) = built {
        if let Ok(bin) = bins.classify(x) {
            assert!(bins.bin_range().contains(&bin));
        }
    }

    let mut sorted = raw.to_vec();
    sorted.sort_by(f64::total_cmp);
    let increasing = make_increasing(&sorted);
    if let Ok(bins) = OrderedBins::new(increasing) {
        let _ = bins.classify(x);
    }
});
