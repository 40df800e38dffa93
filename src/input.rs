// ============================================
// src/input.rs
// キー入力の処理（プレイヤー振り分け・スコア更新）
// ============================================

use crate::game::{Game, GameState, LastValidation, NO_MISS_BONUS};
use crate::input_validator::{ValidationResult, validate};
use crate::player::PlayerId;

/// キーからプレイヤーと入力文字を決める
///
/// 小文字 → 1P、大文字 → 2P（小文字にして判定）。英字以外は None。
pub fn route_key(key: char) -> Option<(PlayerId, char)> {
    if key.is_ascii_lowercase() {
        Some((PlayerId::One, key))
    } else if key.is_ascii_uppercase() {
        Some((PlayerId::Two, key.to_ascii_lowercase()))
    } else {
        None
    }
}

/// 1キー分の入力を処理する。プレイ中以外は何もしない
pub fn process_input(game: &mut Game, key: char) -> ValidationResult {
    if game.state != GameState::Playing {
        return ValidationResult::Incorrect;
    }

    let Some((id, c)) = route_key(key) else {
        return ValidationResult::Incorrect;
    };

    let sentence_count = game.sentences.len();
    let player = game.player(id);
    let Some(sentence) = game.sentences.get(player.sentence_index) else {
        return ValidationResult::Incorrect;
    };
    let Some(chunk) = sentence.chunks.get(player.chunk_index) else {
        return ValidationResult::Incorrect;
    };

    let mut new_input = player.input.clone();
    new_input.push(c);
    let result = validate(&new_input, chunk);
    let is_last_chunk = player.chunk_index + 1 >= sentence.chunks.len();

    let player = game.player_mut(id);
    match result {
        ValidationResult::Correct => {
            player.record_correct();
            player.add_score(1);
            if is_last_chunk {
                if !player.missed_current_sentence {
                    player.add_score(NO_MISS_BONUS);
                }
                player.next_sentence();
                log::debug!("{}P がお題 {} を完了", id.number(), player.sentence_index);
            } else {
                player.next_chunk(new_input);
            }
        }
        ValidationResult::Partial => {
            player.record_correct();
            player.input = new_input;
        }
        ValidationResult::Incorrect => {
            player.record_miss();
            player.reset_input();
        }
    }

    let finished_all = player.sentence_index >= sentence_count;
    game.last_validation = Some(LastValidation { player: id, result });
    if finished_all {
        log::info!("{}P が全お題を打ち切りました", id.number());
        game.finish();
    }
    result
}
