use crate::graph::Cost;
use csv::Writer;
use hashbrown::HashMap;
use ordered_float::OrderedFloat;
use std::fmt::Display;
use std::hash::Hash;
use std::io;

/// Writes `node_id,distance` rows sorted by distance, then by node.
///
/// Unreachable nodes are written as `inf` when `include_unreachable` is set and skipped otherwise.
/// Returns the number of rows written, header excluded.
pub fn write_distances<W: io::Write, N: Display + Ord + Eq + Hash>(
    wtr: &mut Writer<W>,
    distances: &HashMap<N, Cost>,
    include_unreachable: bool,
) -> csv::Result<usize> {
    wtr.write_record(["node_id", "distance"])?;
    let mut dist_with_id: Vec<(&N, &Cost)> = distances.iter().collect();
    dist_with_id.sort_by_key(|(node, d)| (OrderedFloat(**d), *node));

    let mut written = 0;
    for (node, d) in dist_with_id {
        if !d.is_finite() && !include_unreachable {
            continue;
        }
        let val = if d.is_finite() {
            format!("{:.6}", d)
        } else {
            String::from("inf")
        };
        wtr.write_record([node.to_string(), val])?;
        written += 1;
    }
    wtr.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_csv(distances: &HashMap<&str, Cost>, include_unreachable: bool) -> (usize, String) {
        let mut wtr = Writer::from_writer(Vec::new());
        let written = write_distances(&mut wtr, distances, include_unreachable).unwrap();
        let bytes = wtr.into_inner().unwrap();
        (written, String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn sorted_by_distance_then_node() {
        let mut distances = HashMap::new();
        distances.insert("C", 1.0);
        distances.insert("A", 0.0);
        distances.insert("E", f64::INFINITY);
        distances.insert("B", 1.0);
        distances.insert("D", f64::INFINITY);

        let (written, text) = to_csv(&distances, true);
        assert_eq!(written, 5);
        assert_eq!(
            text,
            "node_id,distance\nA,0.000000\nB,1.000000\nC,1.000000\nD,inf\nE,inf\n"
        );

        let (written, text) = to_csv(&distances, false);
        assert_eq!(written, 3);
        assert_eq!(text, "node_id,distance\nA,0.000000\nB,1.000000\nC,1.000000\n");
    }
}
