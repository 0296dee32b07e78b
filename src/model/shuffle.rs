//! Pin-and-fill shuffle
//!
//! Constrained Fisher-Yates: every element except an optional pinned one is
//! drawn uniformly at random from the not-yet-placed pool, while the pinned
//! element keeps its slot.

use rand::Rng;

/// Return a new random permutation of `tracks` with `tracks[pinned]` kept in place.
///
/// The input is never modified. `pinned` must be a valid index when present.
pub fn pin_and_fill<T, R>(tracks: &[T], pinned: Option<usize>, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    debug_assert!(pinned.map_or(true, |index| index < tracks.len()));

    let mut pool = tracks.to_vec();
    let mut pinned_track = pinned.map(|index| pool.remove(index));
    let mut shuffled = Vec::with_capacity(tracks.len());

    while shuffled.len() < tracks.len() {
        if pinned == Some(shuffled.len()) {
            if let Some(track) = pinned_track.take() {
                shuffled.push(track);
                continue;
            }
        }

        let pick = rng.random_range(0..pool.len());
        shuffled.push(pool.swap_remove(pick));
    }

    shuffled
}
