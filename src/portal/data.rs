use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: &'static str,
    pub referral: &'static str,
    pub donations: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub name: &'static str,
    pub donations: u64,
}

static CURRENT_USER: UserProfile = UserProfile {
    name: "Nachiketh",
    referral: "nachiketh2025",
    donations: 15420,
};

static LEADERBOARD: [LeaderboardEntry; 7] = [
    LeaderboardEntry { name: "Alice", donations: 20000 },
    LeaderboardEntry { name: "Bob", donations: 18000 },
    LeaderboardEntry { name: "Nachiketh", donations: 15420 },
    LeaderboardEntry { name: "Charlie", donations: 12500 },
    LeaderboardEntry { name: "Diana", donations: 11800 },
    LeaderboardEntry { name: "Emma", donations: 9600 },
    LeaderboardEntry { name: "Frank", donations: 8200 },
];

pub fn current_user() -> &'static UserProfile {
    &CURRENT_USER
}

pub fn leaderboard() -> &'static [LeaderboardEntry] {
    &LEADERBOARD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_is_sorted_by_donations() {
        assert!(leaderboard().windows(2).all(|w| w[0].donations >= w[1].donations));
    }

    #[test]
    fn current_user_is_on_the_leaderboard() {
        let user = current_user();
        assert!(
            leaderboard()
                .iter()
                .any(|entry| entry.name == user.name && entry.donations == user.donations)
        );
    }
}
