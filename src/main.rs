// ============================================
// src/main.rs (メインファイル)
// ============================================

use std::fs::OpenOptions;
use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use console::style;
use dialoguer::{Password, Select, theme::ColorfulTheme};

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use typebattle::converter::convert;
use typebattle::game::DURATION_OPTIONS;
use typebattle::save_data::{History, MatchRecord};
use typebattle::sentence_validator::is_convertible;
use typebattle::settings::{Settings, project_dirs};
use typebattle::source::{SentenceSource, load_sentences, repository_for};

mod app;
mod ui;

use app::{Action, App, Key};

const LOG_FILE: &str = "typebattle.log";

// --------------------------------------------------
// コマンドライン引数
// --------------------------------------------------

#[derive(Parser)]
#[command(name = "typebattle", version, about = "2人対戦のローマ字タイピングゲーム")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 対戦する（省略時もこれ）
    Play(PlayArgs),
    /// 設定を対話的に変更する
    Config,
    /// 読みのローマ字変換結果を表示する
    Romaji {
        /// ひらがなの読み
        reading: String,
    },
    /// 最近の対戦記録を表示する
    History {
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Args, Default)]
struct PlayArgs {
    /// 制限時間（10 / 30 / 60 秒）
    #[arg(short, long)]
    duration: Option<u32>,
    /// お題の取得元
    #[arg(short, long, value_enum)]
    source: Option<SentenceSource>,
    /// API キー（設定ファイルより優先）
    #[arg(long)]
    api_key: Option<String>,
}

// --------------------------------------------------
// メイン関数
// --------------------------------------------------

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => play(args),
        Command::Config => run_config(),
        Command::Romaji { reading } => {
            print_romaji(&reading);
            Ok(())
        }
        Command::History { limit } => {
            print_history(&History::load(), limit);
            Ok(())
        }
    }
}

/// ログはファイルに出す（端末は TUI が使うため）
fn init_logging() {
    let Some(dirs) = project_dirs() else {
        return;
    };
    let dir = dirs.data_dir();
    if std::fs::create_dir_all(dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn play(args: PlayArgs) -> anyhow::Result<()> {
    let mut settings = Settings::load();
    if let Some(duration) = args.duration {
        settings.duration = duration;
    }
    if let Some(source) = args.source {
        settings.source = source;
    }
    if args.api_key.is_some() {
        settings.api_key = args.api_key;
    }
    let settings = settings.normalized();

    // お題の準備は TUI を起動する前に行う（API の待ち時間を表示するため）
    if settings.source == SentenceSource::Api {
        println!("{}", style("お題を生成しています...").dim());
    }
    let repository = repository_for(settings.source, settings.api_key.as_deref())?;
    let sentences = load_sentences(repository.as_ref(), &mut rand::rng())
        .context("お題を準備できませんでした")?;

    let history_dir = History::default_dir().ok();
    let history = history_dir.as_deref().map(History::load_from).unwrap_or_default();
    let mut app = App::new(sentences, settings.duration, history, history_dir);

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    restore_terminal()?;
    result?;

    if let Some(record) = app.last_record() {
        print_record(record);
    }
    Ok(())
}

fn setup_terminal() -> std::io::Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?; // 代替スクリーンを使用
    stdout().execute(Hide)?; // カーソルを非表示
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

fn restore_terminal() -> std::io::Result<()> {
    stdout().execute(Show)?; // カーソルを再表示
    stdout().execute(LeaveAlternateScreen)?; // 代替スクリーンを終了
    disable_raw_mode()?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<impl Backend>, app: &mut App) -> std::io::Result<()> {
    loop {
        let now = Instant::now();
        app.on_tick(now);
        terminal.draw(|f| ui::ui(f, app, now))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let key = match key.code {
                    KeyCode::Esc => Key::Esc,
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Left => Key::Left,
                    KeyCode::Right => Key::Right,
                    KeyCode::Char(c) => Key::Char(c),
                    _ => continue,
                };
                if app.handle_key(key, Instant::now()) == Action::Quit {
                    break;
                }
            }
        }
    }
    Ok(())
}

// --------------------------------------------------
// サブコマンド
// --------------------------------------------------

fn run_config() -> anyhow::Result<()> {
    let mut settings = Settings::load();
    let theme = ColorfulTheme::default();

    let labels: Vec<String> = DURATION_OPTIONS.iter().map(|d| format!("{d} 秒")).collect();
    let current = DURATION_OPTIONS
        .iter()
        .position(|d| *d == settings.duration)
        .unwrap_or(1);
    let idx = Select::with_theme(&theme)
        .with_prompt("制限時間")
        .items(&labels)
        .default(current)
        .interact()?;
    settings.duration = DURATION_OPTIONS[idx];

    let sources = ["同梱のお題", "API で生成したお題"];
    let current = match settings.source {
        SentenceSource::Local => 0,
        SentenceSource::Api => 1,
    };
    let idx = Select::with_theme(&theme)
        .with_prompt("お題の取得元")
        .items(&sources)
        .default(current)
        .interact()?;
    settings.source = if idx == 0 {
        SentenceSource::Local
    } else {
        SentenceSource::Api
    };

    if settings.source == SentenceSource::Api {
        let key = Password::with_theme(&theme)
            .with_prompt("APIキー（空欄なら変更しない）")
            .allow_empty_password(true)
            .interact()?;
        if !key.is_empty() {
            settings.api_key = Some(key);
        }
    }

    settings.save().context("設定を保存できませんでした")?;
    println!("{}", style("設定を保存しました").green());
    Ok(())
}

fn print_romaji(reading: &str) {
    let result = convert(reading);
    println!("{} {}", style("romaji:").bold(), result.romaji);
    for chunk in &result.chunks {
        println!("  {}  {}", style(&chunk.source).cyan(), chunk.patterns.join(" / "));
    }
    if is_convertible(reading) {
        println!("{}", style("すべての文字を変換できます").green());
    } else {
        println!("{}", style("変換できない文字が含まれています").red());
    }
}

fn print_record(record: &MatchRecord) {
    let winner = match record.winner {
        Some(n) => format!("Player {n} の勝ち!"),
        None => "引き分け!".to_string(),
    };
    println!("{}", style(winner).yellow().bold());
    for (n, r) in [(1, &record.player1), (2, &record.player2)] {
        println!(
            "  Player {n}: {} 点  正確率 {:.1}%  {} KPM",
            r.score, r.accuracy, r.kpm
        );
    }
}

fn print_history(history: &History, limit: usize) {
    if history.records.is_empty() {
        println!("{}", style("対戦記録はまだありません").dim());
        return;
    }
    for record in history.recent(limit) {
        let winner = record
            .winner
            .map_or("引き分け".to_string(), |n| format!("{n}P 勝ち"));
        println!(
            "{}  {:>2}秒  {:>4} - {:<4}  {}",
            style(record.timestamp.format("%Y-%m-%d %H:%M")).dim(),
            record.duration,
            record.player1.score,
            record.player2.score,
            style(winner).bold()
        );
    }
}
