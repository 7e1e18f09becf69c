use super::Tape;

/// Shift-based insertion. All shifts for one key and its final placement are
/// staged together, so each insertion is a single step.
pub fn insertion_sort(tape: &mut Tape<'_>) {
    for i in 1..tape.len() {
        let key = tape.get(i);
        let mut j = i;
        while j > 0 && tape.key(j - 1) > key.sort_key() {
            let shifted = tape.get(j - 1);
            tape.stage_overwrite(j, shifted);
            j -= 1;
        }
        tape.stage_overwrite(j, key);
        tape.step();
    }
}

#[cfg(test)]
mod test {
    use crate::sorting::testing::*;
    use crate::sorting::{record, Algorithm, Mutation};

    #[test]
    fn empty_array() {
        let (keys, steps) = sorted(Algorithm::Insertion, &[]);
        assert!(keys.is_empty());
        assert!(steps.is_empty());
    }

    #[test]
    fn single_element() {
        let (keys, steps) = sorted(Algorithm::Insertion, &[8]);
        assert_eq!(keys, [8]);
        assert!(steps.is_empty());
    }

    #[test]
    fn reverse_sorted() {
        let (keys, _) = sorted(Algorithm::Insertion, &[5, 4, 3, 2, 1]);
        assert_eq!(keys, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn with_duplicates() {
        let (keys, _) = sorted(Algorithm::Insertion, &[3, 1, 2, 1, 3, 0]);
        assert_eq!(keys, [0, 1, 1, 2, 3, 3]);
    }

    #[test]
    fn one_step_per_insertion() {
        let (_, steps) = sorted(Algorithm::Insertion, &[6, 5, 4, 3, 2, 1]);
        assert_eq!(steps.len(), 5);
        // Inserting the last key shifts five elements, then places it.
        assert_eq!(steps[4].mutations.len(), 6);
    }

    #[test]
    fn shift_then_place() {
        let input = row(&[2, 3, 1]);
        let script = record(Algorithm::Insertion, &input, false);
        assert_eq!(
            script.steps[1].mutations,
            [
                Mutation::Overwrite { index: 2, value: input[1] },
                Mutation::Overwrite { index: 1, value: input[0] },
                Mutation::Overwrite { index: 0, value: input[2] },
            ]
        );
    }

    #[test]
    fn already_sorted_places_in_place() {
        let (keys, steps) = sorted(Algorithm::Insertion, &[1, 2, 3, 4]);
        assert_eq!(keys, [1, 2, 3, 4]);
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| !s.changed && s.mutations.len() == 1));
    }

    #[test]
    fn equal_keys_keep_their_order() {
        let input = row(&[2, 1, 2, 1, 2]);
        let script = record(Algorithm::Insertion, &input, false);
        let origins: Vec<i32> = script.sorted.iter().map(|e| e.x).collect();
        assert_eq!(origins, [1, 3, 0, 2, 4]);
    }
}
