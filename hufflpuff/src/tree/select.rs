use crate::tree::tree_node::ActiveNode;

/// Finds the two nodes with the smallest weights in `active`.
///
/// Returns their positions in `active`, the globally smallest first. On equal weights the
/// earlier position wins, also when three or more nodes share the minimum. The two positions
/// are always distinct. Returns `None` if there are fewer than two nodes.
pub fn select_two_minimum(active: &[ActiveNode]) -> Option<(usize, usize)> {
    if active.len() < 2 {
        return None;
    }
    let (mut min1, mut min2) = if active[1].weight < active[0].weight {
        (1, 0)
    } else {
        (0, 1)
    };
    for (pos, node) in active.iter().enumerate().skip(2) {
        // strict comparison keeps the earlier position on ties
        if node.weight < active[min1].weight {
            min2 = min1;
            min1 = pos;
        } else if node.weight < active[min2].weight {
            min2 = pos;
        }
    }
    Some((min1, min2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(weights: &[usize]) -> Vec<ActiveNode> {
        weights
            .iter()
            .enumerate()
            .map(|(node_pos, weight)| ActiveNode {
                node_pos,
                weight: *weight,
            })
            .collect()
    }

    #[test]
    fn test_minimum_not_at_front() {
        assert_eq!(select_two_minimum(&active(&[3, 2, 1])), Some((2, 1)));
        assert_eq!(select_two_minimum(&active(&[5, 9, 2, 7, 1])), Some((4, 2)));
    }

    #[test]
    fn test_first_two_are_minimum() {
        assert_eq!(select_two_minimum(&active(&[1, 2, 5, 9])), Some((0, 1)));
        assert_eq!(select_two_minimum(&active(&[2, 1, 5, 9])), Some((1, 0)));
    }

    #[test]
    fn test_ties_prefer_earlier_position() {
        assert_eq!(select_two_minimum(&active(&[3, 3])), Some((0, 1)));
        assert_eq!(select_two_minimum(&active(&[4, 4, 4, 4])), Some((0, 1)));
        assert_eq!(select_two_minimum(&active(&[9, 2, 5, 2, 2])), Some((1, 3)));
        // a single smallest node, followed by a tie for second place
        assert_eq!(select_two_minimum(&active(&[3, 5, 1, 3])), Some((2, 0)));
    }

    #[test]
    fn test_never_same_element_twice() {
        for weights in &[vec![1, 1], vec![7, 7, 7], vec![2, 1, 1, 2], vec![1, 9, 9, 9]] {
            let (first, second) = select_two_minimum(&active(weights)).unwrap();
            assert_ne!(first, second);
        }
    }

    #[test]
    fn test_too_few_nodes() {
        assert_eq!(select_two_minimum(&active(&[])), None);
        assert_eq!(select_two_minimum(&active(&[1])), None);
    }

    #[test]
    fn test_matches_sorted_selection() {
        let weights = [8, 3, 3, 12, 1, 3, 1, 20, 4];
        let mut sorted: Vec<(usize, usize)> = weights
            .iter()
            .enumerate()
            .map(|(pos, weight)| (*weight, pos))
            .collect();
        sorted.sort();
        assert_eq!(
            select_two_minimum(&active(&weights)),
            Some((sorted[0].1, sorted[1].1))
        );
    }
}
