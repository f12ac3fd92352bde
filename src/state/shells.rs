// Electron shell occupancy for the atomic structure diagram.
// Illustrative only: subshells are filled in Madelung order, ignoring the
// real-world exceptions (Cr, Cu, ...), then summed per principal shell.

/// (n, l) subshells in aufbau filling order, through 7p.
const FILL_ORDER: [(usize, u32); 19] = [
    (1, 0),
    (2, 0),
    (2, 1),
    (3, 0),
    (3, 1),
    (4, 0),
    (3, 2),
    (4, 1),
    (5, 0),
    (4, 2),
    (5, 1),
    (6, 0),
    (4, 3),
    (5, 2),
    (6, 1),
    (7, 0),
    (5, 3),
    (6, 2),
    (7, 1),
];

/// Electrons per principal shell (index 0 is n = 1) for a neutral atom.
/// Atomic numbers beyond the last subshell are capped at its capacity.
pub fn shell_occupancy(atomic_number: u32) -> Vec<u32> {
    let mut shells: Vec<u32> = Vec::new();
    let mut remaining = atomic_number;
    for (n, l) in FILL_ORDER {
        if remaining == 0 {
            break;
        }
        let capacity = 2 * (2 * l + 1);
        let placed = remaining.min(capacity);
        if shells.len() < n {
            shells.resize(n, 0);
        }
        shells[n - 1] += placed;
        remaining -= placed;
    }
    shells
}

/// Evenly spaced electron angles (degrees) around one orbit.
pub fn electron_angles(count: u32) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f64;
    (0..count).map(|k| k as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_elements() {
        assert_eq!(shell_occupancy(1), vec![1]);
        assert_eq!(shell_occupancy(2), vec![2]);
        assert_eq!(shell_occupancy(6), vec![2, 4]);
        assert_eq!(shell_occupancy(10), vec![2, 8]);
        assert_eq!(shell_occupancy(11), vec![2, 8, 1]);
    }

    #[test]
    fn fourth_period_fills_4s_before_3d() {
        assert_eq!(shell_occupancy(19), vec![2, 8, 8, 1]);
        assert_eq!(shell_occupancy(20), vec![2, 8, 8, 2]);
        assert_eq!(shell_occupancy(26), vec![2, 8, 14, 2]);
        assert_eq!(shell_occupancy(36), vec![2, 8, 18, 8]);
    }

    #[test]
    fn heaviest_element_uses_seven_shells() {
        let og = shell_occupancy(118);
        assert_eq!(og.len(), 7);
        assert_eq!(og.iter().sum::<u32>(), 118);
        assert_eq!(og, vec![2, 8, 18, 32, 32, 18, 8]);
    }

    #[test]
    fn totals_match_atomic_number() {
        for z in 1..=118 {
            assert_eq!(shell_occupancy(z).iter().sum::<u32>(), z);
        }
        assert_eq!(shell_occupancy(200).iter().sum::<u32>(), 118);
        assert!(shell_occupancy(0).is_empty());
    }

    #[test]
    fn angles_are_evenly_spaced() {
        assert!(electron_angles(0).is_empty());
        assert_eq!(electron_angles(1), vec![0.0]);
        assert_eq!(electron_angles(4), vec![0.0, 90.0, 180.0, 270.0]);
    }
}
