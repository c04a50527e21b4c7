use serde::Serialize;

#[derive(Debug, Clone, Copy)]
struct Reward {
    name: &'static str,
    threshold: u64,
}

const REWARDS: [Reward; 5] = [
    Reward { name: "Bronze Badge", threshold: 5000 },
    Reward { name: "Silver Badge", threshold: 10000 },
    Reward { name: "Gold Badge", threshold: 15000 },
    Reward { name: "Platinum Badge", threshold: 20000 },
    Reward { name: "Diamond Badge", threshold: 50000 },
];

/// Where a donation total stands against one badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardProgress {
    pub name: &'static str,
    pub threshold: u64,
    pub unlocked: bool,
    /// Percent of the threshold reached, capped at 100.
    pub progress: f64,
    pub remaining: u64,
}

pub fn progress(donations: u64) -> Vec<RewardProgress> {
    REWARDS
        .iter()
        .map(|&Reward { name, threshold }| RewardProgress {
            name,
            threshold,
            unlocked: donations >= threshold,
            progress: (donations as f64 / threshold as f64 * 100.0).min(100.0),
            remaining: threshold.saturating_sub(donations),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocks_at_exact_threshold() {
        let ladder = progress(10000);
        let unlocked: Vec<_> = ladder.iter().filter(|r| r.unlocked).map(|r| r.name).collect();

        assert_eq!(unlocked, ["Bronze Badge", "Silver Badge"]);
        assert_eq!(ladder[1].progress, 100.0);
        assert_eq!(ladder[1].remaining, 0);
    }

    #[test]
    fn partial_progress() {
        let platinum = &progress(15420)[3];

        assert_eq!(platinum.name, "Platinum Badge");
        assert!(!platinum.unlocked);
        assert_eq!(platinum.remaining, 4580);
        assert!((platinum.progress - 77.1).abs() < 1e-9);
    }

    #[test]
    fn nothing_donated() {
        assert!(progress(0).iter().all(|r| !r.unlocked && r.progress == 0.0 && r.remaining == r.threshold));
    }

    #[test]
    fn progress_is_capped() {
        assert!(progress(1_000_000).iter().all(|r| r.unlocked && r.progress == 100.0));
    }
}
