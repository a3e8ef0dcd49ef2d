use itertools::Itertools;

use crate::{
    errors::{HeapError, as_io_error},
    heap::{Heap, Polarity},
};

/// A single mutation of a heap. This is the whole command vocabulary: there
/// is no bulk build and no arbitrary-position delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(i64),
    PopRoot,
}

/// Apply one action to the heap, yielding the popped root if there was one.
pub fn apply_action(heap: &mut Heap, action: Action) -> Result<Option<i64>, HeapError> {
    match action {
        Action::Insert(value) => {
            heap.insert(value);
            Ok(None)
        }
        Action::PopRoot => heap.pop_root().map(Some),
    }
}

/// Parse a script token: `pop`, or an integer literal meaning an insert.
pub fn parse_action(text: &str) -> Result<Action, HeapError> {
    if text == "pop" {
        return Ok(Action::PopRoot);
    }
    match text.parse::<i64>() {
        Ok(value) => Ok(Action::Insert(value)),
        Err(_) => Err(HeapError::BadAction(String::from(text))),
    }
}

/// Render the heap one row per tree level. Level `l` occupies indices
/// `2^l - 1 .. 2^(l+1) - 1` of the breadth-first sequence, truncated at the
/// last (possibly partial) level.
pub fn render_levels(heap: &Heap) -> Result<Vec<String>, HeapError> {
    let mut rows = Vec::new();
    if heap.is_empty() {
        return Ok(rows);
    }
    for level in 0..=heap.height() {
        let lo = (1 << level) - 1;
        let hi = std::cmp::min((1 << (level + 1)) - 1, heap.size());
        let mut row = Vec::new();
        for i in lo..hi {
            row.push(heap.at(i)?);
        }
        rows.push(row.iter().join(" "));
    }
    Ok(rows)
}

fn build(values: &[i64], polarity: Polarity) -> Heap {
    let mut heap = Heap::new(polarity);
    for value in values {
        heap.insert(*value);
    }
    heap
}

fn print_heap(heap: &Heap) -> std::io::Result<()> {
    for row in render_levels(heap).map_err(as_io_error)? {
        println!("{}", row);
    }
    Ok(())
}

pub fn show_heap(values: &[i64], polarity: Polarity) -> std::io::Result<()> {
    let heap = build(values, polarity);
    log::info!(
        "built {:?} heap with {} elements (height {})",
        heap.polarity(),
        heap.size(),
        heap.height()
    );
    print_heap(&heap)
}

pub fn drain_heap(values: &[i64], polarity: Polarity) -> std::io::Result<()> {
    let mut heap = build(values, polarity);
    log::info!("draining {} elements", heap.size());
    let mut drained = Vec::new();
    while !heap.is_empty() {
        drained.push(heap.pop_root().map_err(as_io_error)?);
    }
    println!("{}", drained.iter().join(" "));
    Ok(())
}

pub fn apply_script(actions: &[String], polarity: Polarity) -> std::io::Result<()> {
    let mut heap = Heap::new(polarity);
    for text in actions {
        let action = parse_action(text).map_err(as_io_error)?;
        if let Some(root) = apply_action(&mut heap, action).map_err(as_io_error)? {
            println!("popped {}", root);
        }
    }
    print_heap(&heap)
}
