use super::Tape;

/// One swap per position, even when the minimum is already in place.
pub fn selection_sort(tape: &mut Tape<'_>) {
    let n = tape.len();
    if n < 2 {
        return;
    }
    for i in 0..(n - 1) {
        let mut min_index = i;
        for j in (i + 1)..n {
            if tape.key(j) < tape.key(min_index) {
                min_index = j;
            }
        }
        tape.swap(i, min_index);
    }
}
