//! Strategies for turning per-trip candidates into one direction.

use std::ops::ControlFlow;

use crate::models::direction::CompassDirection;

/// How the resolver picks a direction when several trips serve a stop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirectionPolicy {
    /// The first trip (by trip id) that continues past the stop decides,
    /// even if its hop classifies as `Unknown`.
    #[default]
    FirstResolvable,
    /// Every continuing trip votes. `Unknown` votes are ignored and ties go to
    /// the direction seen first.
    Modal,
}

impl DirectionPolicy {
    pub(crate) fn tally(&self) -> Tally {
        match self {
            Self::FirstResolvable => Tally::First,
            Self::Modal => Tally::Modal(Vec::new()),
        }
    }
}

/// Accumulates candidates in trip order.
pub(crate) enum Tally {
    First,
    Modal(Vec<(CompassDirection, usize)>),
}

impl Tally {
    /// Record the next candidate. `Break` means the answer is settled and no
    /// further trips need to be loaded.
    pub(crate) fn offer(&mut self, candidate: CompassDirection) -> ControlFlow<CompassDirection> {
        match self {
            Self::First => ControlFlow::Break(candidate),
            Self::Modal(votes) => {
                if candidate.is_known() {
                    match votes.iter_mut().find(|(d, _)| *d == candidate) {
                        Some((_, count)) => *count += 1,
                        None => votes.push((candidate, 1)),
                    }
                }
                ControlFlow::Continue(())
            }
        }
    }

    pub(crate) fn finish(self) -> CompassDirection {
        match self {
            Self::First => CompassDirection::Unknown,
            Self::Modal(votes) => votes
                .into_iter()
                // `max_by_key` keeps the last maximum; reverse to keep the first.
                .rev()
                .max_by_key(|(_, count)| *count)
                .map(|(direction, _)| direction)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CompassDirection::*;

    fn run(policy: DirectionPolicy, candidates: &[CompassDirection]) -> CompassDirection {
        let mut tally = policy.tally();
        for &candidate in candidates {
            if let ControlFlow::Break(direction) = tally.offer(candidate) {
                return direction;
            }
        }
        tally.finish()
    }

    #[test]
    fn test_first_resolvable() {
        assert_eq!(run(DirectionPolicy::FirstResolvable, &[S, N, N]), S);
        assert_eq!(run(DirectionPolicy::FirstResolvable, &[Unknown, N]), Unknown);
        assert_eq!(run(DirectionPolicy::FirstResolvable, &[]), Unknown);
    }

    #[test]
    fn test_modal() {
        assert_eq!(run(DirectionPolicy::Modal, &[S, N, N]), N);
        assert_eq!(run(DirectionPolicy::Modal, &[Unknown, Unknown, E]), E);
        assert_eq!(run(DirectionPolicy::Modal, &[Unknown]), Unknown);
        assert_eq!(run(DirectionPolicy::Modal, &[]), Unknown);
    }

    #[test]
    fn test_modal_tie_goes_to_first_seen() {
        assert_eq!(run(DirectionPolicy::Modal, &[W, E, E, W]), W);
        assert_eq!(run(DirectionPolicy::Modal, &[SE, NW]), SE);
    }
}
