use ndarray::Array2;
use std::collections::HashMap;

/// An ordered run of contour vertices. Closed loops repeat their first vertex
/// at the end.
pub type ContourPath = Vec<[f64; 2]>;

/// The four edges of a marching-squares cell.
const BOTTOM: usize = 0;
const RIGHT: usize = 1;
const TOP: usize = 2;
const LEFT: usize = 3;

/// Extracts the iso-value polylines of `values` at `level` using marching
/// squares.
///
/// `values` is indexed `(y, x)` against the given axes. A grid sample exactly
/// equal to the level counts as below it, which keeps plateaus at the level
/// from spraying degenerate contours. Cell segments are stitched into
/// polylines; paths with fewer than two distinct vertices are dropped.
pub fn extract_isolines(
    x_axis: &[f64],
    y_axis: &[f64],
    values: &Array2<f64>,
    level: f64,
) -> Vec<ContourPath> {
    let nx = x_axis.len();
    let ny = y_axis.len();
    if nx < 2 || ny < 2 {
        return Vec::new();
    }

    let mut segments: Vec<([f64; 2], [f64; 2])> = Vec::new();

    for j in 0..ny - 1 {
        for i in 0..nx - 1 {
            // Corner values, counter-clockwise from the cell's lower-left.
            let bl = values[[j, i]];
            let br = values[[j, i + 1]];
            let tr = values[[j + 1, i + 1]];
            let tl = values[[j + 1, i]];

            let mask = (usize::from(bl > level))
                | (usize::from(br > level) << 1)
                | (usize::from(tr > level) << 2)
                | (usize::from(tl > level) << 3);
            if mask == 0 || mask == 15 {
                continue;
            }

            let crossing = |edge: usize| -> [f64; 2] {
                match edge {
                    BOTTOM => {
                        let t = (level - bl) / (br - bl);
                        [x_axis[i] + t * (x_axis[i + 1] - x_axis[i]), y_axis[j]]
                    }
                    RIGHT => {
                        let t = (level - br) / (tr - br);
                        [x_axis[i + 1], y_axis[j] + t * (y_axis[j + 1] - y_axis[j])]
                    }
                    TOP => {
                        let t = (level - tl) / (tr - tl);
                        [x_axis[i] + t * (x_axis[i + 1] - x_axis[i]), y_axis[j + 1]]
                    }
                    _ => {
                        let t = (level - bl) / (tl - bl);
                        [x_axis[i], y_axis[j] + t * (y_axis[j + 1] - y_axis[j])]
                    }
                }
            };

            let mut emit = |a: usize, b: usize| {
                segments.push((crossing(a), crossing(b)));
            };

            match mask {
                1 => emit(LEFT, BOTTOM),
                2 => emit(BOTTOM, RIGHT),
                4 => emit(RIGHT, TOP),
                8 => emit(TOP, LEFT),
                3 => emit(LEFT, RIGHT),
                6 => emit(BOTTOM, TOP),
                12 => emit(RIGHT, LEFT),
                9 => emit(TOP, BOTTOM),
                7 => emit(LEFT, TOP),
                11 => emit(TOP, RIGHT),
                13 => emit(RIGHT, BOTTOM),
                14 => emit(BOTTOM, LEFT),
                5 => {
                    // Saddle: the centre average decides whether the two
                    // inside corners connect through the cell.
                    if 0.25 * (bl + br + tr + tl) > level {
                        emit(BOTTOM, RIGHT);
                        emit(TOP, LEFT);
                    } else {
                        emit(LEFT, BOTTOM);
                        emit(RIGHT, TOP);
                    }
                }
                _ => {
                    // Mask 10, the opposite saddle.
                    if 0.25 * (bl + br + tr + tl) > level {
                        emit(LEFT, BOTTOM);
                        emit(RIGHT, TOP);
                    } else {
                        emit(BOTTOM, RIGHT);
                        emit(TOP, LEFT);
                    }
                }
            }
        }
    }

    stitch_segments(segments)
}

/// Joins loose cell segments end-to-end into polylines. Matching is exact:
/// adjacent cells derive a shared crossing from the same corner values, so
/// the coordinates agree bit for bit.
fn stitch_segments(segments: Vec<([f64; 2], [f64; 2])>) -> Vec<ContourPath> {
    let mut by_endpoint: HashMap<(u64, u64), Vec<usize>> = HashMap::new();
    for (idx, (a, b)) in segments.iter().enumerate() {
        by_endpoint.entry(point_key(a)).or_default().push(idx);
        by_endpoint.entry(point_key(b)).or_default().push(idx);
    }

    let mut used = vec![false; segments.len()];
    let mut paths = Vec::new();

    for start in 0..segments.len() {
        if used[start] {
            continue;
        }
        used[start] = true;

        let (a, b) = segments[start];
        let mut path: std::collections::VecDeque<[f64; 2]> = [a, b].into_iter().collect();

        // Grow forwards from the tail, then backwards from the head.
        loop {
            let tail = *path.back().unwrap();
            match next_unused(&by_endpoint, &used, &tail) {
                Some(idx) => {
                    used[idx] = true;
                    path.push_back(other_end(&segments[idx], &tail));
                }
                None => break,
            }
        }
        loop {
            let head = *path.front().unwrap();
            match next_unused(&by_endpoint, &used, &head) {
                Some(idx) => {
                    used[idx] = true;
                    path.push_front(other_end(&segments[idx], &head));
                }
                None => break,
            }
        }

        let path = dedup_consecutive(path.into_iter().collect());
        if path.len() >= 2 {
            paths.push(path);
        }
    }

    paths
}

fn point_key(point: &[f64; 2]) -> (u64, u64) {
    (point[0].to_bits(), point[1].to_bits())
}

fn next_unused(
    by_endpoint: &HashMap<(u64, u64), Vec<usize>>,
    used: &[bool],
    point: &[f64; 2],
) -> Option<usize> {
    by_endpoint
        .get(&point_key(point))?
        .iter()
        .copied()
        .find(|idx| !used[*idx])
}

fn other_end(segment: &([f64; 2], [f64; 2]), point: &[f64; 2]) -> [f64; 2] {
    if point_key(&segment.0) == point_key(point) {
        segment.1
    } else {
        segment.0
    }
}

fn dedup_consecutive(path: ContourPath) -> ContourPath {
    let mut out: ContourPath = Vec::with_capacity(path.len());
    for point in path {
        if out.last().map(point_key) != Some(point_key(&point)) {
            out.push(point);
        }
    }
    out
}
