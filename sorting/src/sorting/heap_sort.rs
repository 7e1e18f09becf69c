use super::Tape;

pub fn heap_sort(tape: &mut Tape<'_>) {
    let size = tape.len();
    if size <= 1 {
        return;
    }

    for i in (0..(size / 2)).rev() {
        heapify(tape, i, size);
    }

    for i in (1..size).rev() {
        tape.swap(0, i);
        heapify(tape, 0, i);
    }
}

/// Sift-down within the first `size` elements. Ties keep the current largest.
fn heapify(tape: &mut Tape<'_>, i: usize, size: usize) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < size && tape.key(left) > tape.key(largest) {
        largest = left;
    }

    if right < size && tape.key(right) > tape.key(largest) {
        largest = right;
    }

    if largest != i {
        tape.swap(i, largest);
        heapify(tape, largest, size);
    }
}
