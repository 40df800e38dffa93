// ============================================
// src/stats.rs
// 正確率・KPM の計算
// ============================================

use crate::player::Player;

/// 正確率（%）。小数点1桁に丸める。タイプがなければ 0
pub fn accuracy(player: &Player) -> f64 {
    let total = player.correct_types + player.miss_types;
    if total == 0 {
        return 0.0;
    }
    (player.correct_types as f64 / total as f64 * 1000.0).round() / 10.0
}

/// 1分あたりの正タイプ数。経過0秒なら 0
pub fn kpm(player: &Player, elapsed_secs: u32) -> u32 {
    if elapsed_secs == 0 {
        return 0;
    }
    (player.correct_types as f64 / elapsed_secs as f64 * 60.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerId;

    fn player_with(correct_types: u32, miss_types: u32) -> Player {
        Player {
            correct_types,
            miss_types,
            ..Player::new(PlayerId::One)
        }
    }

    #[test]
    fn test_accuracy_without_typing() {
        assert_eq!(accuracy(&player_with(0, 0)), 0.0);
    }

    #[test]
    fn test_accuracy_all_correct() {
        assert_eq!(accuracy(&player_with(50, 0)), 100.0);
    }

    #[test]
    fn test_accuracy_with_misses() {
        assert_eq!(accuracy(&player_with(80, 20)), 80.0);
        // 19 / 23 = 0.82608... → 82.6
        assert_eq!(accuracy(&player_with(19, 4)), 82.6);
    }

    #[test]
    fn test_kpm() {
        assert_eq!(kpm(&player_with(100, 0), 0), 0);
        assert_eq!(kpm(&player_with(60, 0), 30), 120);
        assert_eq!(kpm(&player_with(50, 0), 40), 75);
        // 7 / 9 * 60 = 46.66... → 47
        assert_eq!(kpm(&player_with(7, 3), 9), 47);
    }
}
