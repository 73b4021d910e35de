use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Purpose of a deferred one-shot action. At most one is pending per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKind {
    OpenMessage,
    CollapseMessage,
    HideWish,
    ResetBalloons,
    ResumeOrbit,
    FadeLoading,
    HideLoading,
}

/// Deadline table for deferred actions, polled once per frame.
///
/// Scheduling a kind that is already pending replaces its deadline, so a new
/// transition deterministically supersedes a stale one.
#[derive(Default, Debug, Clone)]
pub struct Timers {
    pending: FnvHashMap<TimerKind, f64>,
}

impl Timers {
    /// Returns true if an earlier deadline of the same kind was replaced.
    pub fn schedule(&mut self, kind: TimerKind, due_ms: f64) -> bool {
        let replaced = self.pending.insert(kind, due_ms).is_some();
        if replaced {
            log::debug!("[timer] {:?} rescheduled for {:.0}ms", kind, due_ms);
        }
        replaced
    }

    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.pending.remove(&kind).is_some()
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.contains_key(&kind)
    }

    pub fn due_at(&self, kind: TimerKind) -> Option<f64> {
        self.pending.get(&kind).copied()
    }

    /// Remove and return every timer due at `now_ms`, earliest deadline first.
    pub fn take_due(&mut self, now_ms: f64) -> SmallVec<[TimerKind; 4]> {
        let mut due: SmallVec<[(f64, TimerKind); 4]> = self
            .pending
            .iter()
            .filter(|(_, &at)| at <= now_ms)
            .map(|(&kind, &at)| (at, kind))
            .collect();
        due.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        for (_, kind) in &due {
            self.pending.remove(kind);
        }
        due.into_iter().map(|(_, kind)| kind).collect()
    }
}
