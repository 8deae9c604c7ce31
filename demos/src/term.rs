//! Crossterm front-end: draws the maze, maps keys and clicks to
//! [`Command`]s and animates searches one step at a time.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use mazer_core::{CellState, Coord};
use mazer_paths::Progress;
use rand::Rng;

use crate::session::{Selection, Session, Status};

/// Terminal columns per maze cell; cells are drawn as two glyphs wide so
/// the maze looks square.
const CELL_WIDTH: u16 = 2;

const COL_WALL: Color = Color::Rgb { r: 60, g: 60, b: 80 };
const COL_SPACE: Color = Color::Rgb { r: 15, g: 15, b: 20 };
const COL_VISITED: Color = Color::Rgb { r: 40, g: 90, b: 160 };
const COL_SOLUTION: Color = Color::Rgb { r: 240, g: 200, b: 60 };
const COL_START: Color = Color::Rgb { r: 60, g: 200, b: 90 };
const COL_END: Color = Color::Rgb { r: 220, g: 60, b: 60 };
const COL_TEXT: Color = Color::Rgb { r: 200, g: 200, b: 200 };

const HELP: &str = "click: start/end  s: solve  r: new maze  c: clear  g: generator  a: solver  +/-: size  [/]: speed  q: quit";

/// A user intent, decoded from a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Coord),
    Solve,
    Reset,
    Clear,
    CycleGenerator,
    CycleSolver,
    Grow,
    Shrink,
    Faster,
    Slower,
    Quit,
}

/// Decode a terminal event. Returns `None` for events with no meaning here.
pub fn command_for(ev: &Event) -> Option<Command> {
    match ev {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('s') | KeyCode::Enter => Some(Command::Solve),
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char('c') => Some(Command::Clear),
            KeyCode::Char('g') => Some(Command::CycleGenerator),
            KeyCode::Char('a') | KeyCode::Tab => Some(Command::CycleSolver),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::Grow),
            KeyCode::Char('-') => Some(Command::Shrink),
            KeyCode::Char(']') => Some(Command::Faster),
            KeyCode::Char('[') => Some(Command::Slower),
            _ => None,
        },
        Event::Mouse(me) => match me.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(Command::Select(screen_to_cell(me.column, me.row)))
            }
            _ => None,
        },
        _ => None,
    }
}

/// Map a terminal position to the maze cell drawn there.
pub fn screen_to_cell(column: u16, row: u16) -> Coord {
    Coord::new(row as i32, (column / CELL_WIDTH) as i32)
}

/// Raw-mode, alternate-screen terminal with mouse capture. Restores the
/// terminal when dropped.
pub struct Terminal {
    out: io::Stdout,
}

impl Terminal {
    pub fn enter() -> Result<Self, Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn cell_color(state: CellState, c: Coord, start: Option<Coord>, end: Option<Coord>) -> Color {
    if Some(c) == start {
        COL_START
    } else if Some(c) == end {
        COL_END
    } else {
        match state {
            CellState::Space => COL_SPACE,
            CellState::Wall => COL_WALL,
            CellState::Visited => COL_VISITED,
            CellState::Solution => COL_SOLUTION,
        }
    }
}

fn draw_cell<W: Write>(out: &mut W, c: Coord, color: Color) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(c.col as u16 * CELL_WIDTH, c.row as u16),
        SetBackgroundColor(color),
        Print("  ")
    )
}

fn status_line<R: Rng>(session: &Session<R>) -> String {
    let s = session.settings();
    let state = match session.status() {
        Status::Idle if !session.can_solve() => match session.start() {
            None => "pick a start cell".to_string(),
            Some(_) => "pick an end cell".to_string(),
        },
        Status::Idle => "ready".to_string(),
        Status::Solved { cells, visited } => {
            format!("solved: {cells} cells long, {visited} visited")
        }
        Status::NoPath { visited } => format!("no path ({visited} visited)"),
        Status::Cancelled => "cancelled".to_string(),
    };
    format!(
        "{}x{}  gen: {}  solver: {}  delay: {}ms  | {state}",
        s.size,
        s.size,
        s.generator,
        s.solver,
        s.delay.as_millis()
    )
}

fn draw_status<W: Write, R: Rng>(out: &mut W, session: &Session<R>) -> io::Result<()> {
    let row = session.grid().rows() as u16;
    queue!(
        out,
        ResetColor,
        SetForegroundColor(COL_TEXT),
        cursor::MoveTo(0, row + 1),
        terminal::Clear(ClearType::CurrentLine),
        Print(status_line(session)),
        cursor::MoveTo(0, row + 2),
        terminal::Clear(ClearType::CurrentLine),
        Print(HELP),
        ResetColor
    )
}

/// Redraw everything.
pub fn draw<W: Write, R: Rng>(out: &mut W, session: &Session<R>) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;
    for (c, state) in session.grid().iter() {
        draw_cell(out, c, cell_color(state, c, session.start(), session.end()))?;
    }
    draw_status(out, session)?;
    out.flush()
}

/// Run a search with one redraw per step, pausing `delay` in between.
///
/// Any key press or click while the animation runs abandons the search.
/// Returns `Ok(true)` if the search ran to completion.
fn animate<W: Write, R: Rng>(out: &mut W, session: &mut Session<R>) -> io::Result<bool> {
    let (start, end) = (session.start(), session.end());
    let delay = session.settings().delay;

    let mut solver = match session.solver() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("cannot solve: {e}");
            return Ok(false);
        }
    };

    // The solver reset the grid; repaint before the first step.
    for (c, state) in solver.grid().iter() {
        draw_cell(out, c, cell_color(state, c, start, end))?;
    }
    out.flush()?;

    let outcome = loop {
        match solver.advance() {
            Progress::Step(step) => {
                let state = solver.grid().at(step.coord).unwrap_or(CellState::Wall);
                draw_cell(out, step.coord, cell_color(state, step.coord, start, end))?;
                out.flush()?;
                if event::poll(delay)? {
                    let interrupt = match event::read()? {
                        Event::Key(k) => k.kind == KeyEventKind::Press,
                        Event::Mouse(m) => matches!(m.kind, MouseEventKind::Down(_)),
                        _ => false,
                    };
                    if interrupt {
                        break None;
                    }
                }
            }
            Progress::Finished(outcome) => break Some((outcome, solver.visited())),
        }
    };
    drop(solver);

    match outcome {
        Some((outcome, visited)) => {
            session.record(&outcome, Some(visited));
            Ok(true)
        }
        None => {
            session.cancel();
            Ok(false)
        }
    }
}

/// Interactive loop. Returns when the user quits.
pub fn run<R: Rng>(session: &mut Session<R>) -> Result<(), Box<dyn std::error::Error>> {
    let mut term = Terminal::enter()?;
    draw(&mut term.out, session)?;

    loop {
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Some(cmd) = command_for(&event::read()?) else {
            continue;
        };
        log::debug!("command {cmd:?}");
        match cmd {
            Command::Quit => break,
            Command::Select(c) => {
                if session.select(c) == Selection::Ignored {
                    continue;
                }
            }
            Command::Solve => {
                if session.can_solve() {
                    animate(&mut term.out, session)?;
                }
            }
            Command::Reset => session.reset()?,
            Command::Clear => session.clear_marks(),
            Command::CycleGenerator => session.cycle_generator()?,
            Command::CycleSolver => session.cycle_solver(),
            Command::Grow => session.grow()?,
            Command::Shrink => session.shrink()?,
            Command::Faster => session.faster(),
            Command::Slower => session.slower(),
        }
        draw(&mut term.out, session)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};

    fn key(c: KeyCode) -> Event {
        Event::Key(KeyEvent::new(c, KeyModifiers::NONE))
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(command_for(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for(&key(KeyCode::Char('s'))), Some(Command::Solve));
        assert_eq!(command_for(&key(KeyCode::Char('+'))), Some(Command::Grow));
        assert_eq!(command_for(&key(KeyCode::Char('['))), Some(Command::Slower));
        assert_eq!(command_for(&key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn left_click_selects_the_cell_under_the_pointer() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(command_for(&click), Some(Command::Select(Coord::new(3, 3))));

        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(command_for(&right), None);
    }

    #[test]
    fn endpoints_override_cell_colors() {
        let s = Some(Coord::new(1, 1));
        let e = Some(Coord::new(3, 3));
        assert_eq!(cell_color(CellState::Solution, Coord::new(1, 1), s, e), COL_START);
        assert_eq!(cell_color(CellState::Visited, Coord::new(3, 3), s, e), COL_END);
        assert_eq!(cell_color(CellState::Wall, Coord::new(0, 0), s, e), COL_WALL);
    }

    #[test]
    fn draw_writes_to_any_writer() {
        use rand::SeedableRng;
        let session = Session::new(
            crate::Settings::default(),
            rand::rngs::StdRng::seed_from_u64(2),
        )
        .unwrap();
        let mut buf = Vec::new();
        draw(&mut buf, &session).unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("gen: backtracking"));
        assert!(text.contains("pick a start cell"));
    }
}
