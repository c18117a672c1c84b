//! Vectorized kernels.
//!
//! Uses the `wide` crate for portable SIMD over four `f64` lanes at a time.

use wide::f64x4;

/// Split consecutive price changes into gains and losses.
///
/// For `data` of length n, returns two vectors of length n - 1 where entry
/// `k` describes the move from `data[k]` to `data[k + 1]`: the gain is
/// `max(delta, 0)` and the loss is `max(-delta, 0)`.
pub fn gains_losses(data: &[f64]) -> (Vec<f64>, Vec<f64>) {
    if data.len() < 2 {
        return (vec![], vec![]);
    }

    let moves = data.len() - 1;
    let mut gains = Vec::with_capacity(moves);
    let mut losses = Vec::with_capacity(moves);

    let chunks = moves / 4;
    let zero = f64x4::splat(0.0);

    for i in 0..chunks {
        let idx = i * 4;
        let prev = f64x4::new([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
        let curr = f64x4::new([
            data[idx + 1],
            data[idx + 2],
            data[idx + 3],
            data[idx + 4],
        ]);

        let diff = curr - prev;
        gains.extend(diff.max(zero).to_array());
        losses.extend((-diff).max(zero).to_array());
    }

    // Handle remaining elements
    for i in (chunks * 4)..moves {
        let change = data[i + 1] - data[i];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    (gains, losses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gains_losses() {
        let data = vec![1.0, 3.0, 2.0, 2.0, 5.0, 4.0, 4.5];
        let (gains, losses) = gains_losses(&data);

        assert_eq!(gains, vec![2.0, 0.0, 0.0, 3.0, 0.0, 0.5]);
        assert_eq!(losses, vec![0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_gains_losses_matches_scalar() {
        let data: Vec<f64> = (0..37).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let (gains, losses) = gains_losses(&data);

        assert_eq!(gains.len(), 36);
        for k in 0..36 {
            let change = data[k + 1] - data[k];
            assert_eq!(gains[k], change.max(0.0));
            assert_eq!(losses[k], (-change).max(0.0));
        }
    }

    #[test]
    fn test_short_input() {
        assert_eq!(gains_losses(&[]), (vec![], vec![]));
        assert_eq!(gains_losses(&[1.0]), (vec![], vec![]));
    }
}
