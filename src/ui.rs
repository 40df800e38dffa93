// ============================================
// src/ui.rs
// UI描画
// ============================================

use std::time::Instant;

use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use typebattle::game::{DURATION_OPTIONS, GameState};
use typebattle::player::{Player, PlayerId};
use typebattle::sentence::Sentence;
use typebattle::stats::{accuracy, kpm};

use crate::app::App;

pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let size = f.area();
    // 枠線を描画
    let block = Block::default().borders(Borders::ALL).title("Type Battle !");
    let inner_area = block.inner(size);
    f.render_widget(block, size);

    match app.game.state {
        GameState::Idle => draw_title(f, app, inner_area),
        GameState::Countdown => draw_countdown(f, app, inner_area),
        GameState::Playing => draw_playing(f, app, inner_area, now),
        GameState::Finished => draw_result(f, app, inner_area),
    }
}

// --------------------------------------------------
// タイトル画面
// --------------------------------------------------

fn draw_title(f: &mut Frame, app: &App, area: Rect) {
    let durations: Vec<Span> = DURATION_OPTIONS
        .iter()
        .flat_map(|&d| {
            let style = if d == app.game.duration {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            [Span::styled(format!(" {d}秒 "), style), Span::raw(" ")]
        })
        .collect();

    let lines = vec![
        Line::from("ローマ字タイピング対戦").bold().centered(),
        Line::default(),
        Line::from("1P: 小文字で入力 (a-z)").fg(Color::Cyan).centered(),
        Line::from("2P: 大文字で入力 (Shift + A-Z)").fg(Color::Magenta).centered(),
        Line::default(),
        Line::from(durations).centered(),
        Line::from("←/→: 制限時間").fg(Color::DarkGray).centered(),
        Line::default(),
        Line::from("Enter: スタート   Esc: 終了").fg(Color::Yellow).centered(),
    ];
    f.render_widget(Paragraph::new(lines), centered_rows(area, 9));
}

// --------------------------------------------------
// カウントダウン
// --------------------------------------------------

fn draw_countdown(f: &mut Frame, app: &App, area: Rect) {
    let text = Line::from(app.countdown.to_string())
        .style(Style::default().fg(Color::Yellow).bold())
        .centered();
    f.render_widget(Paragraph::new(text), centered_rows(area, 1));
}

// --------------------------------------------------
// 対戦画面
// --------------------------------------------------

fn draw_playing(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // [0] 残り時間
            Constraint::Length(1), // [1] 空白
            Constraint::Min(6),    // [2] プレイヤーエリア
        ])
        .split(area);

    // 0. 残り時間ゲージ
    let game = &app.game;
    let ratio = if game.duration > 0 {
        (game.remaining as f64 / game.duration as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(ratio)
        .label(format!("残り {} 秒", game.remaining));
    f.render_widget(gauge, chunks[0]);

    // 1P / 2P を上下に並べる
    let players = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    for (id, rect) in [(PlayerId::One, players[0]), (PlayerId::Two, players[1])] {
        let player = game.player(id);
        let sentence = game.sentences.get(player.sentence_index);
        draw_player(f, player, sentence, app.is_flashing(id, now), rect);
    }
}

fn player_color(id: PlayerId) -> Color {
    match id {
        PlayerId::One => Color::Cyan,
        PlayerId::Two => Color::Magenta,
    }
}

fn draw_player(
    f: &mut Frame,
    player: &Player,
    sentence: Option<&Sentence>,
    flashing: bool,
    area: Rect,
) {
    let border_style = if flashing {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(player_color(player.id))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {}P  Score: {} ", player.id.number(), player.score));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(sentence) = sentence else {
        f.render_widget(
            Paragraph::new("全文完了").fg(Color::DarkGray).centered(),
            inner,
        );
        return;
    };

    let lines = vec![
        // 日本語（漢字混じり）
        Line::from(sentence.japanese.as_str()).style(Style::default().fg(Color::White).bold()),
        // ひらがな
        Line::from(sentence.reading.as_str()).style(Style::default().fg(Color::Gray)),
        // ローマ字
        romaji_line(player, sentence, flashing),
    ];
    f.render_widget(Paragraph::new(lines).centered(), inner);
}

/// 入力済み（緑）・入力中（カーソル）・未入力（灰色）に色分けしたローマ字
fn romaji_line<'a>(player: &'a Player, sentence: &'a Sentence, flashing: bool) -> Line<'a> {
    let mut spans = Vec::new();

    for (i, chunk) in sentence.chunks.iter().enumerate() {
        if i < player.chunk_index {
            // 完了済みのチャンク (実際に打ったパターン)
            let typed = player
                .completed_patterns
                .get(i)
                .map(String::as_str)
                .unwrap_or_else(|| chunk.preferred());
            spans.push(Span::styled(typed, Style::default().fg(Color::Green)));
        } else if i == player.chunk_index {
            // 現在のチャンク (入力中)
            let typed = player.input.as_str();
            let pattern = chunk.pattern_for(typed);
            let remaining = pattern.get(typed.len()..).unwrap_or("");

            if !typed.is_empty() {
                spans.push(Span::styled(typed, Style::default().fg(Color::Green)));
            }

            if let Some(next) = remaining.chars().next() {
                // カーソル (白または赤)
                let style = if flashing {
                    Style::default().fg(Color::White).bg(Color::Red)
                } else {
                    Style::default().fg(Color::Black).bg(Color::White)
                };
                spans.push(Span::styled(next.to_string(), style));

                // カーソル以降の残り (黄色)
                if remaining.len() > 1 {
                    spans.push(Span::styled(
                        &remaining[1..],
                        Style::default().fg(Color::Yellow).underlined(),
                    ));
                }
            }
        } else {
            // まだ手をつけていないチャンク (灰色)
            spans.push(Span::styled(chunk.preferred(), Style::default().fg(Color::DarkGray)));
        }
    }
    Line::from(spans)
}

// --------------------------------------------------
// リザルト画面
// --------------------------------------------------

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let result_text = match game.winner() {
        Some(id) => format!("Player {} の勝ち!", id.number()),
        None => "引き分け!".to_string(),
    };

    let elapsed = game.elapsed();
    let mut lines = vec![
        Line::from("結果発表").bold().centered(),
        Line::default(),
        Line::from(result_text).fg(Color::Yellow).bold().centered(),
        Line::default(),
    ];
    for id in [PlayerId::One, PlayerId::Two] {
        let p = game.player(id);
        lines.push(
            Line::from(format!(
                "Player {}: {} 点   正確率 {:.1}%   {} KPM",
                id.number(),
                p.score,
                accuracy(p),
                kpm(p, elapsed)
            ))
            .fg(player_color(id))
            .centered(),
        );
    }
    lines.push(Line::default());
    lines.push(
        Line::from("Enter: もう一度対戦   T: タイトルへ   Esc: 終了")
            .fg(Color::DarkGray)
            .centered(),
    );
    let height = lines.len() as u16;
    f.render_widget(Paragraph::new(lines), centered_rows(area, height));
}

/// 縦方向の中央に `height` 行ぶんの領域を取る
fn centered_rows(area: Rect, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}
