//! Interactive placement and solve tracking
//!
//! Models the observable contract of the puzzle UI without owning any
//! input, physics or audio: the host feeds press/release interactions and
//! contact events in, and dispatches the returned events (audio cues,
//! shard activations, the one-shot solve notification) to its own systems.
//!
//! A session has two regimes. During the initial placement phase the
//! shards are introduced one at a time: pressing the active shard drops it
//! in place and hands the next one to the cursor. Once every shard has
//! been placed, press picks a shard up and release drops it and evaluates
//! the solve condition: the puzzle is solved exactly when every shard is
//! simultaneously free of contacts and inside the frame.

/// Named audio cues for the host's playback system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// A shard was picked up
    ShardUp,
    /// A shard was placed or dropped
    ShardDown,
    /// The mirror was restored
    SolveMirror,
}

/// One side of the puzzle frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSide {
    Bottom,
    Top,
    Left,
    Right,
}

/// Something a shard can be overlapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Another shard, by index
    Shard(usize),
    /// A wall of the puzzle frame
    Border(BorderSide),
}

/// Events produced by session interactions, dispatched by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Play a cue at the given shard's position
    Audio { cue: AudioCue, shard: usize },
    /// Make the given shard visible and attach it to the cursor
    ShardActivated(usize),
    /// The solve condition was met; fired at most once per session
    Solved,
}

/// Per-shard bookkeeping of the physics collaborator's contact events
///
/// The host forwards overlap begin/end pairs; the shard counts as
/// colliding while any contact remains active.
#[derive(Debug, Clone, Default)]
pub struct ContactTracker {
    active: Vec<Contact>,
}

impl ContactTracker {
    /// Record an overlap beginning
    pub fn begin(&mut self, contact: Contact) {
        self.active.push(contact);
    }

    /// Record an overlap ending
    ///
    /// Unmatched ends are ignored.
    pub fn end(&mut self, contact: Contact) {
        if let Some(pos) = self.active.iter().position(|&c| c == contact) {
            self.active.remove(pos);
        }
    }

    /// Whether any contact is currently active
    #[inline]
    pub fn is_colliding(&self) -> bool {
        !self.active.is_empty()
    }
}

/// Placement and solve state for one puzzle instance
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    placed: Vec<bool>,
    in_bounds: Vec<bool>,
    contacts: Vec<ContactTracker>,
    held: Option<usize>,
    solved: bool,
}

impl PuzzleSession {
    /// Create a session for `shard_count` shards
    ///
    /// Shard 0 starts visible and unplaced; the rest appear one at a time
    /// as the placement phase progresses.
    pub fn new(shard_count: usize) -> Self {
        Self {
            placed: vec![false; shard_count],
            in_bounds: vec![true; shard_count],
            contacts: vec![ContactTracker::default(); shard_count],
            held: None,
            solved: false,
        }
    }

    /// Handle a press on a shard
    ///
    /// During the placement phase this places the pressed shard and
    /// activates the next unplaced one; afterwards it picks the shard up.
    pub fn press(&mut self, shard: usize) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if shard >= self.placed.len() {
            return events;
        }

        if self.placement_complete() {
            events.push(SessionEvent::Audio {
                cue: AudioCue::ShardUp,
                shard,
            });
            self.held = Some(shard);
        } else {
            events.push(SessionEvent::Audio {
                cue: AudioCue::ShardDown,
                shard,
            });
            self.placed[shard] = true;
            self.held = None;
            for i in 0..self.placed.len() {
                if !self.placed[i] {
                    self.held = Some(i);
                    events.push(SessionEvent::ShardActivated(i));
                    break;
                }
            }
        }
        events
    }

    /// Handle a release on a shard
    ///
    /// After the placement phase, releasing the held shard drops it and
    /// evaluates the solve condition. The solve notification fires at most
    /// once; later releases on a solved puzzle only drop the shard.
    pub fn release(&mut self, shard: usize) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if shard >= self.placed.len() {
            return events;
        }

        if self.placement_complete() && self.held.is_some() {
            events.push(SessionEvent::Audio {
                cue: AudioCue::ShardDown,
                shard,
            });
            self.held = None;

            if !self.solved && self.all_clear() {
                self.solved = true;
                events.push(SessionEvent::Audio {
                    cue: AudioCue::SolveMirror,
                    shard,
                });
                events.push(SessionEvent::Solved);
            }
        }
        events
    }

    /// Forward an overlap-begin event from the physics collaborator
    pub fn begin_contact(&mut self, shard: usize, contact: Contact) {
        if let Some(tracker) = self.contacts.get_mut(shard) {
            tracker.begin(contact);
        }
    }

    /// Forward an overlap-end event from the physics collaborator
    pub fn end_contact(&mut self, shard: usize, contact: Contact) {
        if let Some(tracker) = self.contacts.get_mut(shard) {
            tracker.end(contact);
        }
    }

    /// Update whether a shard currently sits inside the frame rectangle
    pub fn set_in_bounds(&mut self, shard: usize, in_bounds: bool) {
        if let Some(flag) = self.in_bounds.get_mut(shard) {
            *flag = in_bounds;
        }
    }

    /// Whether a shard is currently overlapping anything
    pub fn is_colliding(&self, shard: usize) -> bool {
        self.contacts
            .get(shard)
            .map(|t| t.is_colliding())
            .unwrap_or(false)
    }

    /// The shard currently attached to the cursor, if any
    #[inline]
    pub fn held(&self) -> Option<usize> {
        self.held
    }

    /// Whether the initial placement phase has finished
    pub fn placement_complete(&self) -> bool {
        self.placed.iter().all(|&p| p)
    }

    /// Whether the solve notification has fired
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    fn all_clear(&self) -> bool {
        (0..self.placed.len())
            .all(|i| !self.contacts[i].is_colliding() && self.in_bounds[i])
    }
}

/// Seconds each timed phase of the solve animation runs
const SOLVE_PHASE_SECONDS: f32 = 5.0;

/// Phases of the solve animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolvePhase {
    /// Light ramps up to full over five seconds
    Brightening,
    /// Full brightness; the host swaps the shattered visuals for the
    /// restored mirror during this phase
    SwappingVisuals,
    /// Light ramps back down over five seconds
    Dimming,
    /// Animation finished
    Done,
}

/// The timed light/visibility sequence played after solving
///
/// Driven by a per-tick elapsed-time accumulator; resumable across ticks
/// and not cancellable once started.
#[derive(Debug, Clone)]
pub struct SolveAnimation {
    phase: SolvePhase,
    elapsed: f32,
}

impl SolveAnimation {
    /// Start the animation in the brightening phase
    pub fn new() -> Self {
        Self {
            phase: SolvePhase::Brightening,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds
    ///
    /// Returns the phase entered this tick, if the phase changed. The
    /// `SwappingVisuals` phase lasts a single tick: the host swaps
    /// materials when it sees the transition into it.
    pub fn tick(&mut self, dt: f32) -> Option<SolvePhase> {
        match self.phase {
            SolvePhase::Brightening => {
                self.elapsed += dt;
                if self.elapsed >= SOLVE_PHASE_SECONDS {
                    self.phase = SolvePhase::SwappingVisuals;
                    return Some(SolvePhase::SwappingVisuals);
                }
            }
            SolvePhase::SwappingVisuals => {
                self.phase = SolvePhase::Dimming;
                self.elapsed = 0.0;
                return Some(SolvePhase::Dimming);
            }
            SolvePhase::Dimming => {
                self.elapsed += dt;
                if self.elapsed >= SOLVE_PHASE_SECONDS {
                    self.phase = SolvePhase::Done;
                    return Some(SolvePhase::Done);
                }
            }
            SolvePhase::Done => {}
        }
        None
    }

    /// Current phase
    #[inline]
    pub fn phase(&self) -> SolvePhase {
        self.phase
    }

    /// Light intensity in 0..=1 for the host's solve light
    pub fn intensity(&self) -> f32 {
        match self.phase {
            SolvePhase::Brightening => (self.elapsed / SOLVE_PHASE_SECONDS).min(1.0),
            SolvePhase::SwappingVisuals => 1.0,
            SolvePhase::Dimming => 1.0 - (self.elapsed / SOLVE_PHASE_SECONDS).min(1.0),
            SolvePhase::Done => 0.0,
        }
    }

    /// Whether the sequence has finished
    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == SolvePhase::Done
    }
}

impl Default for SolveAnimation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run the placement phase to completion for `n` shards
    fn place_all(session: &mut PuzzleSession, n: usize) {
        for i in 0..n {
            let events = session.press(i);
            assert!(matches!(
                events[0],
                SessionEvent::Audio {
                    cue: AudioCue::ShardDown,
                    ..
                }
            ));
        }
        assert!(session.placement_complete());
        assert_eq!(session.held(), None);
    }

    #[test]
    fn test_placement_phase_activates_shards_in_order() {
        let mut session = PuzzleSession::new(3);
        assert!(!session.placement_complete());

        let events = session.press(0);
        assert!(events.contains(&SessionEvent::ShardActivated(1)));
        assert_eq!(session.held(), Some(1));

        let events = session.press(1);
        assert!(events.contains(&SessionEvent::ShardActivated(2)));
        assert_eq!(session.held(), Some(2));

        let events = session.press(2);
        assert!(!events
            .iter()
            .any(|e| matches!(e, SessionEvent::ShardActivated(_))));
        assert!(session.placement_complete());
        assert_eq!(session.held(), None);
    }

    #[test]
    fn test_release_during_placement_does_nothing() {
        let mut session = PuzzleSession::new(3);
        session.press(0);
        assert!(session.release(0).is_empty());
        assert!(!session.is_solved());
    }

    #[test]
    fn test_solve_fires_exactly_once_when_all_clear() {
        let mut session = PuzzleSession::new(3);
        place_all(&mut session, 3);

        // pick up and drop a shard with everything clear and in bounds
        let events = session.press(0);
        assert_eq!(
            events,
            vec![SessionEvent::Audio {
                cue: AudioCue::ShardUp,
                shard: 0
            }]
        );
        let events = session.release(0);
        assert!(events.contains(&SessionEvent::Solved));
        assert!(events.contains(&SessionEvent::Audio {
            cue: AudioCue::SolveMirror,
            shard: 0
        }));
        assert!(session.is_solved());

        // a second drop never re-fires the notification
        session.press(1);
        let events = session.release(1);
        assert!(!events.contains(&SessionEvent::Solved));
    }

    #[test]
    fn test_colliding_shard_blocks_solve_until_cleared() {
        let mut session = PuzzleSession::new(3);
        place_all(&mut session, 3);

        session.begin_contact(1, Contact::Shard(2));
        assert!(session.is_colliding(1));

        session.press(0);
        let events = session.release(0);
        assert!(!events.contains(&SessionEvent::Solved));
        assert!(!session.is_solved());

        // clearing the overlap solves on the next release-check
        session.end_contact(1, Contact::Shard(2));
        assert!(!session.is_colliding(1));
        session.press(0);
        let events = session.release(0);
        assert!(events.contains(&SessionEvent::Solved));
    }

    #[test]
    fn test_out_of_bounds_shard_blocks_solve() {
        let mut session = PuzzleSession::new(2);
        place_all(&mut session, 2);

        session.set_in_bounds(1, false);
        session.press(0);
        assert!(!session.release(0).contains(&SessionEvent::Solved));

        session.set_in_bounds(1, true);
        session.press(0);
        assert!(session.release(0).contains(&SessionEvent::Solved));
    }

    #[test]
    fn test_border_contact_counts_as_colliding() {
        let mut session = PuzzleSession::new(2);
        place_all(&mut session, 2);

        session.begin_contact(0, Contact::Border(BorderSide::Left));
        session.press(1);
        assert!(!session.release(1).contains(&SessionEvent::Solved));

        session.end_contact(0, Contact::Border(BorderSide::Left));
        session.press(1);
        assert!(session.release(1).contains(&SessionEvent::Solved));
    }

    #[test]
    fn test_contact_tracker_stacks_overlaps() {
        let mut tracker = ContactTracker::default();
        tracker.begin(Contact::Shard(1));
        tracker.begin(Contact::Border(BorderSide::Top));
        assert!(tracker.is_colliding());

        tracker.end(Contact::Shard(1));
        assert!(tracker.is_colliding(), "one overlap still active");
        tracker.end(Contact::Border(BorderSide::Top));
        assert!(!tracker.is_colliding());

        // unmatched end is ignored
        tracker.end(Contact::Shard(9));
        assert!(!tracker.is_colliding());
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let mut session = PuzzleSession::new(2);
        assert!(session.press(5).is_empty());
        assert!(session.release(5).is_empty());
        session.set_in_bounds(5, false);
        session.begin_contact(5, Contact::Shard(0));
        assert!(!session.is_colliding(5));
    }

    #[test]
    fn test_solve_animation_sequence() {
        let mut anim = SolveAnimation::new();
        assert_eq!(anim.phase(), SolvePhase::Brightening);
        assert_eq!(anim.intensity(), 0.0);

        // halfway through brightening
        assert_eq!(anim.tick(2.5), None);
        assert!((anim.intensity() - 0.5).abs() < 1e-6);

        // finish brightening
        assert_eq!(anim.tick(2.5), Some(SolvePhase::SwappingVisuals));
        assert_eq!(anim.intensity(), 1.0);

        // the swap phase lasts one tick
        assert_eq!(anim.tick(0.1), Some(SolvePhase::Dimming));

        // dim back down
        assert_eq!(anim.tick(2.5), None);
        assert!((anim.intensity() - 0.5).abs() < 1e-6);
        assert_eq!(anim.tick(2.5), Some(SolvePhase::Done));
        assert!(anim.is_done());
        assert_eq!(anim.intensity(), 0.0);

        // further ticks are inert
        assert_eq!(anim.tick(10.0), None);
        assert!(anim.is_done());
    }
}
