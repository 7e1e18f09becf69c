use super::Tape;

/// Adjacent-pair passes, `n - 1` of them, each one shorter than the last.
///
/// There is no early exit: an already sorted row still gets every pass.
pub fn bubble_sort(tape: &mut Tape<'_>) {
    let n = tape.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        for j in 0..(n - 1 - i) {
            if tape.key(j) > tape.key(j + 1) {
                tape.swap(j, j + 1);
            }
        }
    }
}
