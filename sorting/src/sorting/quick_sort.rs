use super::Tape;

pub fn quick_sort(tape: &mut Tape<'_>) {
    if tape.len() > 1 {
        let last = tape.len() - 1;
        quick_sort_range(tape, 0, last);
    }
}

/// Sorts the inclusive range `[low, high]`.
pub fn quick_sort_range(tape: &mut Tape<'_>, low: usize, high: usize) {
    if low >= high {
        return;
    }
    assert!(
        high < tape.len(),
        "quick sort range {low}..={high} out of bounds for length {}",
        tape.len()
    );
    let pi = partition(tape, low, high);
    if pi > low {
        quick_sort_range(tape, low, pi - 1);
    }
    quick_sort_range(tape, pi + 1, high);
}

/// Lomuto partition around the last element of the range. Every placement of
/// a strictly smaller element is a swap, and so is the final pivot move.
pub fn partition(tape: &mut Tape<'_>, low: usize, high: usize) -> usize {
    let pivot = tape.key(high);
    let mut store = low;
    for j in low..high {
        if tape.key(j) < pivot {
            tape.swap(store, j);
            store += 1;
        }
    }
    tape.swap(store, high);
    store
}
