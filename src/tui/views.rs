//! Stateless rendering for the menu and every game.

use crate::games::GameKind;
use crate::games::grid_battle::GridBattle;
use crate::games::heart_hunt::{self, HeartHunt, HuntPhase};
use crate::games::memory_match::MemoryMatch;
use crate::games::reaction_tile::ReactionTile;
use crate::games::scripted_reveal::{LOADING_MESSAGES, RevealPhase, ScriptedReveal, VERDICT};
use crate::games::tap_target::{self, TapTarget};
use crate::games::trivia::{Stage, Trivia};
use crate::games::truth_or_dare::{PromptKind, TruthOrDare};
use crate::session::{Outcome, PlayerSlot};
use crate::tui::app::{App, Screen, Session};
use crate::tui::ui;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

/// Draws the whole frame for the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Menu => draw_menu(frame, app),
        Screen::Game(session) => match session {
            Session::GridBattle(game) => draw_grid_battle(frame, app, game),
            Session::MemoryMatch(game) => draw_memory_match(frame, app, game),
            Session::TapTarget(game) => draw_tap_target(frame, app, game),
            Session::ReactionTile(game) => draw_reaction_tile(frame, app, game),
            Session::Trivia(game) => draw_trivia(frame, app, game),
            Session::ScriptedReveal(game) => draw_scripted_reveal(frame, game),
            Session::HeartHunt(game) => draw_heart_hunt(frame, app, game),
            Session::TruthOrDare(game) => draw_truth_or_dare(frame, app, game),
        },
    }
    ui::draw_confetti(frame, app.overlay());
}

fn draw_menu(frame: &mut Frame, app: &App) {
    let chunks = ui::frame_chunks(frame.area());
    ui::draw_title(
        frame,
        chunks[0],
        &format!(
            "Love Arcade - {} & {}",
            app.config().player_a(),
            app.config().player_b()
        ),
    );

    let lines: Vec<Line> = GameKind::iter()
        .enumerate()
        .map(|(i, kind)| {
            let selected = i == app.cursor();
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("{}{}  -  {}", marker, kind, kind.tagline()),
                style,
            ))
        })
        .collect();
    let list = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(list, ui::center_rect(chunks[1], 60, 12));

    ui::draw_status(frame, chunks[2], "[↑/↓] pick  [Enter] play  [q] quit");
}

fn draw_grid_battle(frame: &mut Frame, app: &App, game: &GridBattle) {
    let chunks = ui::frame_chunks(frame.area());
    ui::draw_title(frame, chunks[0], "Grid Battle");

    let mut board = String::new();
    for i in 0..9 {
        if i % 3 == 0 && i > 0 {
            board.push_str("\n-----------\n");
        }
        match game.cell(i) {
            Some(mark) => board.push_str(&format!(" {} ", mark.symbol())),
            None => board.push_str(&format!(" {} ", i + 1)),
        }
        if i % 3 < 2 {
            board.push('|');
        }
    }
    let grid = Paragraph::new(board).alignment(Alignment::Center);
    frame.render_widget(grid, ui::center_rect(chunks[1], 20, 6));

    let status = match game.result() {
        Some(Outcome::Tie) => "A tie! [r] rematch, [Esc] menu".to_string(),
        Some(outcome) => {
            let winner = outcome.winner().map(|s| app.name_of(s)).unwrap_or_default();
            format!("{} wins! [r] rematch, [Esc] menu", winner)
        }
        None => match game.to_move() {
            Some(mark) => format!(
                "{} ({}) to move - press 1-9",
                app.name_of(mark.slot()),
                mark.symbol()
            ),
            None => String::new(),
        },
    };
    ui::draw_status(frame, chunks[2], &status);
}

fn draw_memory_match(frame: &mut Frame, app: &App, game: &MemoryMatch) {
    let chunks = ui::frame_chunks(frame.area());
    ui::draw_title(frame, chunks[0], "Memory Match");

    let mut rows = Vec::new();
    for row in 0..2 {
        let mut line = String::new();
        for col in 0..5 {
            let index = row * 5 + col;
            let card = &game.cards()[index];
            let label = if card.is_matched() || card.is_face_up() {
                format!(" {} ", card.symbol())
            } else {
                let key = if index == 9 { 0 } else { index + 1 };
                format!("[{}]", key)
            };
            line.push_str(&label);
            line.push(' ');
        }
        rows.push(Line::from(line));
        rows.push(Line::from(""));
    }
    let table = Paragraph::new(rows).alignment(Alignment::Center);
    frame.render_widget(table, ui::center_rect(chunks[1], 30, 4));

    let scores = ui::score_line(
        game.engine().scoreboard(),
        app.config().player_a(),
        app.config().player_b(),
    );
    let turn = ui::phase_line(
        game.engine().phase(),
        app.config().player_a(),
        app.config().player_b(),
        "",
    );
    ui::draw_status(frame, chunks[2], &format!("{}   |   {}", scores, turn));
}

fn draw_tap_target(frame: &mut Frame, app: &App, game: &TapTarget) {
    let chunks = ui::frame_chunks(frame.area());
    ui::draw_title(frame, chunks[0], "Tap Target");

    let mut lanes = vec![String::from("   "); tap_target::LANES];
    for target in game.targets() {
        lanes[target.lane()] = if target.is_golden() {
            " ★ ".to_string()
        } else {
            " ● ".to_string()
        };
    }
    let keys: String = (1..=tap_target::LANES).map(|k| format!(" {} ", k)).collect();
    let body = Paragraph::new(vec![
        Line::from(lanes.concat()),
        Line::from(""),
        Line::from(keys),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(body, ui::center_rect(chunks[1], 40, 4));

    let scores = ui::score_line(
        game.engine().scoreboard(),
        app.config().player_a(),
        app.config().player_b(),
    );
    let phase = ui::phase_line(
        game.engine().phase(),
        app.config().player_a(),
        app.config().player_b(),
        "[Enter] start - catch targets with 1-9, gold is worth 5",
    );
    ui::draw_status(frame, chunks[2], &format!("{}   |   {}", scores, phase));
}

fn draw_reaction_tile(frame: &mut Frame, app: &App, game: &ReactionTile) {
    let chunks = ui::frame_chunks(frame.area());
    ui::draw_title(frame, chunks[0], "Reaction Tile");

    let mut rows = Vec::new();
    for row in 0..3 {
        let spans: Vec<Span> = (0..3)
            .map(|col| {
                let tile = row * 3 + col;
                let lit = game.lit_tile() == Some(tile);
                let style = if lit {
                    Style::default()
                        .bg(Color::LightGreen)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Span::styled(format!(" [{}] ", tile + 1), style)
            })
            .collect();
        rows.push(Line::from(spans));
        rows.push(Line::from(""));
    }
    let grid = Paragraph::new(rows).alignment(Alignment::Center);
    frame.render_widget(grid, ui::center_rect(chunks[1], 24, 6));

    let scores = ui::score_line(
        game.engine().scoreboard(),
        app.config().player_a(),
        app.config().player_b(),
    );
    let phase = ui::phase_line(
        game.engine().phase(),
        app.config().player_a(),
        app.config().player_b(),
        "[Enter] start - hit the lit tile with 1-9",
    );
    ui::draw_status(frame, chunks[2], &format!("{}   |   {}", scores, phase));
}

fn draw_trivia(frame: &mut Frame, app: &App, game: &Trivia) {
    let chunks = ui::frame_chunks(frame.area());
    ui::draw_title(frame, chunks[0], "Trivia Round");

    let question = game.question();
    let mut lines = vec![
        Line::from(format!(
            "{} Question {}/5",
            question.emoji,
            game.question_number()
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.text,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (i, option) in question.options.iter().enumerate() {
        let style = match game.stage() {
            Stage::Pending { choice } | Stage::Answered { choice, .. } if choice == i => {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            }
            _ => Style::default(),
        };
        lines.push(Line::from(Span::styled(
            format!("[{}] {}", i + 1, option),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(match game.stage() {
        Stage::Awaiting => Line::from("pick with 1-3"),
        Stage::Pending { .. } => Line::from("checking..."),
        Stage::Answered { correct: true, .. } => Line::from(Span::styled(
            "Correct! +1",
            Style::default().fg(Color::Green),
        )),
        Stage::Answered { correct: false, .. } => Line::from(Span::styled(
            "Not this time!",
            Style::default().fg(Color::Red),
        )),
    });
    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, ui::center_rect(chunks[1], 54, 12));

    let scores = ui::score_line(
        game.engine().scoreboard(),
        app.config().player_a(),
        app.config().player_b(),
    );
    let phase = ui::phase_line(
        game.engine().phase(),
        app.config().player_a(),
        app.config().player_b(),
        "[Enter] start",
    );
    ui::draw_status(frame, chunks[2], &format!("{}   |   {}", scores, phase));
}

fn draw_scripted_reveal(frame: &mut Frame, game: &ScriptedReveal) {
    let chunks = ui::frame_chunks(frame.area());
    ui::draw_title(frame, chunks[0], "Love Calculator");

    let lines = match game.phase() {
        RevealPhase::Entry => {
            let mut lines = vec![
                Line::from("Enter your name to measure compatibility:"),
                Line::from(""),
                Line::from(Span::styled(
                    format!("> {}_", game.input()),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            if game.was_rejected() {
                lines.push(Line::from(Span::styled(
                    "Hmm. That is not the name on file. Try again.",
                    Style::default().fg(Color::Red),
                )));
            } else {
                lines.push(Line::from("[Enter] calculate"));
            }
            lines
        }
        RevealPhase::Loading { message } => vec![
            Line::from(Span::styled(
                LOADING_MESSAGES[*message],
                Style::default().fg(Color::Magenta),
            )),
            Line::from(""),
            Line::from("please hold..."),
        ],
        RevealPhase::Revealed => vec![
            Line::from(Span::styled(
                VERDICT.percent,
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                VERDICT.ruling,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(VERDICT.message),
            Line::from(""),
            Line::from("[r] run it again  [Esc] menu"),
        ],
    };
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, ui::center_rect(chunks[1], 60, 11));

    ui::draw_status(frame, chunks[2], "science does not lie");
}

fn draw_heart_hunt(frame: &mut Frame, app: &App, game: &HeartHunt) {
    let chunks = ui::frame_chunks(frame.area());
    ui::draw_title(frame, chunks[0], "Heart Hunt");

    let mut lanes = vec![String::from("   "); heart_hunt::LANES];
    let mut lane_styles = vec![Style::default(); heart_hunt::LANES];
    for heart in game.hearts() {
        lanes[heart.lane()] = " ♥ ".to_string();
        lane_styles[heart.lane()] = if heart.is_blue() {
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::LightRed)
        };
    }
    let hearts_line = Line::from(
        lanes
            .iter()
            .zip(&lane_styles)
            .map(|(text, style)| Span::styled(text.clone(), *style))
            .collect::<Vec<_>>(),
    );
    let keys: String = (1..=heart_hunt::LANES).map(|k| format!(" {} ", k)).collect();
    let stopwatch = format!("{:.1}s", game.elapsed().as_secs_f32());
    let body = Paragraph::new(vec![
        hearts_line,
        Line::from(""),
        Line::from(keys),
        Line::from(""),
        Line::from(stopwatch),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(body, ui::center_rect(chunks[1], 40, 6));

    let status = match game.phase() {
        HuntPhase::Ready { next } => {
            format!("{}: [Enter] to start your hunt", app.name_of(next))
        }
        HuntPhase::Running { slot } => {
            format!("{} hunting - catch the BLUE heart (1-9)", app.name_of(slot))
        }
        HuntPhase::Finished(outcome) => {
            let times = format!(
                "{}: {:.1}s  {}: {:.1}s",
                app.config().player_a(),
                game.time_for(PlayerSlot::A)
                    .unwrap_or_default()
                    .as_secs_f32(),
                app.config().player_b(),
                game.time_for(PlayerSlot::B)
                    .unwrap_or_default()
                    .as_secs_f32(),
            );
            match outcome.winner() {
                Some(slot) => format!("{} - {} wins! [r] rematch", times, app.name_of(slot)),
                None => format!("{} - a tie! [r] rematch", times),
            }
        }
    };
    ui::draw_status(frame, chunks[2], &status);
}

fn draw_truth_or_dare(frame: &mut Frame, app: &App, game: &TruthOrDare) {
    let chunks = ui::frame_chunks(frame.area());
    ui::draw_title(frame, chunks[0], "Truth or Dare");

    let lines = match game.current() {
        Some((kind, prompt)) => {
            let label = match kind {
                PromptKind::Truth => ("TRUTH", Color::LightBlue),
                PromptKind::Dare => ("DARE", Color::LightRed),
            };
            vec![
                Line::from(Span::styled(
                    label.0,
                    Style::default().fg(label.1).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(prompt),
                Line::from(""),
                Line::from("[n] done, next player"),
            ]
        }
        None => vec![
            Line::from(format!("{}, your pick:", app.name_of(game.player()))),
            Line::from(""),
            Line::from("[t] truth    [d] dare"),
        ],
    };
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(card, ui::center_rect(chunks[1], 60, 9));

    ui::draw_status(frame, chunks[2], "no points, just honesty");
}
