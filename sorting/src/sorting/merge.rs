use super::Tape;

pub fn merge_sort(tape: &mut Tape<'_>) {
    if tape.len() > 1 {
        let last = tape.len() - 1;
        merge_sort_range(tape, 0, last);
    }
}

/// Sorts the inclusive range `[l, r]`. Every element written back during a
/// merge is its own step.
pub fn merge_sort_range(tape: &mut Tape<'_>, l: usize, r: usize) {
    if l >= r {
        return;
    }
    assert!(
        r < tape.len(),
        "merge sort range {l}..={r} out of bounds for length {}",
        tape.len()
    );
    let m = (l + r) / 2;
    merge_sort_range(tape, l, m);
    merge_sort_range(tape, m + 1, r);
    merge(tape, l, m, r);
}

fn merge(tape: &mut Tape<'_>, l: usize, m: usize, r: usize) {
    let left: Vec<_> = (l..=m).map(|i| tape.get(i)).collect();
    let right: Vec<_> = (m + 1..=r).map(|j| tape.get(j)).collect();

    let (mut i, mut j, mut k) = (0, 0, l);
    while i < left.len() && j < right.len() {
        // Ties go left, which keeps the sort stable.
        if left[i].sort_key() <= right[j].sort_key() {
            tape.overwrite(k, left[i]);
            i += 1;
        } else {
            tape.overwrite(k, right[j]);
            j += 1;
        }
        k += 1;
    }
    for &value in &left[i..] {
        tape.overwrite(k, value);
        k += 1;
    }
    for &value in &right[j..] {
        tape.overwrite(k, value);
        k += 1;
    }
}
