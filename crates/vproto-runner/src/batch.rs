//! Batch planning.

/// Split items into contiguous fixed-size chunks.
///
/// `chunk_size == 0` disables partitioning and returns a single chunk
/// with every item. Otherwise every chunk except possibly the last has
/// exactly `chunk_size` items; order is preserved and nothing is
/// merged, dropped, or reordered.
pub fn chunk_objects<T>(items: Vec<T>, chunk_size: usize) -> Vec<Vec<T>> {
    if chunk_size == 0 {
        return vec![items];
    }

    let mut chunks = Vec::with_capacity(items.len().div_ceil(chunk_size));
    let mut current = Vec::with_capacity(chunk_size);
    for item in items {
        current.push(item);
        if current.len() == chunk_size {
            chunks.push(std::mem::replace(&mut current, Vec::with_capacity(chunk_size)));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
