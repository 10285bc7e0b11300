//! Gapwing terminal front end
//!
//! Renders the playfield as character cells and feeds key presses into the
//! session. Space (or Up) applies the impulse, `q` or Esc quits. The high
//! score persists in a JSON file next to the working directory.

use std::cell::RefCell;
use std::io::{self, Write, stdout};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode},
    execute, queue,
    style::{self, Color},
    terminal,
};

use gapwing::config::Config;
use gapwing::host::{NotificationSink, RenderSink};
use gapwing::session::GameSession;
use gapwing::store::JsonFileStore;

/// Frames the game-over banner stays on screen (~1.5 s at 30 fps)
const BANNER_FRAMES: u32 = 45;
/// Frame period (~30 fps); the session's fixed tick runs inside `advance`
const FRAME_MS: u64 = 33;

#[derive(Debug, Default)]
struct Banner {
    text: String,
    frames_left: u32,
}

/// Shared handle so the announcement shows up inside the drawn frame
#[derive(Clone, Default)]
struct BannerHandle(Rc<RefCell<Banner>>);

impl BannerHandle {
    fn countdown(&self) {
        let mut banner = self.0.borrow_mut();
        banner.frames_left = banner.frames_left.saturating_sub(1);
    }
}

impl NotificationSink for BannerHandle {
    fn announce(&mut self, message: &str) {
        let mut banner = self.0.borrow_mut();
        banner.text = message.to_string();
        banner.frames_left = BANNER_FRAMES;
    }
}

#[derive(Debug)]
struct GateView {
    id: u32,
    top_height: f32,
    bottom_height: f32,
    x: f32,
}

/// Character-cell projection of the playfield
struct TermSink {
    player: (f32, f32),
    gates: Vec<GateView>,
    score: u32,
    high_score: u32,
    banner: BannerHandle,
}

impl TermSink {
    fn new(banner: BannerHandle) -> Self {
        Self {
            player: (0.0, 0.0),
            gates: Vec::new(),
            score: 0,
            high_score: 0,
            banner,
        }
    }

    fn draw(&self, out: &mut impl Write, cfg: &Config) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        if cols < 10 || rows < 4 {
            return Ok(());
        }
        // Row 0 is the HUD; the playfield scales into the rest
        let field_rows = (rows - 1) as f32;
        let sx = cols as f32 / cfg.playfield_width;
        let sy = field_rows / cfg.playfield_height;

        // 0 empty, 1 gate, 2 player
        let mut cells = vec![0u8; cols as usize * (rows as usize - 1)];
        let mut fill = |x0: f32, y0: f32, w: f32, h: f32, kind: u8| {
            let c0 = (x0 * sx).floor().max(0.0) as usize;
            let c1 = (((x0 + w) * sx).ceil() as usize).min(cols as usize);
            let r0 = (y0 * sy).floor().max(0.0) as usize;
            let r1 = (((y0 + h) * sy).ceil() as usize).min(rows as usize - 1);
            for r in r0..r1 {
                for c in c0..c1 {
                    cells[r * cols as usize + c] = kind;
                }
            }
        };

        for gate in &self.gates {
            fill(gate.x, 0.0, cfg.gate_width, gate.top_height, 1);
            fill(
                gate.x,
                cfg.playfield_height - gate.bottom_height,
                cfg.gate_width,
                gate.bottom_height,
                1,
            );
        }
        fill(
            self.player.0,
            self.player.1,
            cfg.player_width,
            cfg.player_height,
            2,
        );

        queue!(
            out,
            cursor::MoveTo(0, 0),
            style::SetForegroundColor(Color::White),
            style::Print(format!(
                "Score: {:<6} Best: {:<6}",
                self.score, self.high_score
            )),
            terminal::Clear(terminal::ClearType::UntilNewLine),
        )?;

        let mut current = 0u8;
        for r in 0..rows as usize - 1 {
            queue!(out, cursor::MoveTo(0, r as u16 + 1))?;
            for c in 0..cols as usize {
                let kind = cells[r * cols as usize + c];
                if kind != current {
                    let color = match kind {
                        1 => Color::Green,
                        2 => Color::Yellow,
                        _ => Color::Reset,
                    };
                    queue!(out, style::SetForegroundColor(color))?;
                    current = kind;
                }
                queue!(out, style::Print(if kind == 0 { ' ' } else { '\u{2588}' }))?;
            }
        }

        let banner = self.banner.0.borrow();
        if banner.frames_left > 0 {
            let col = (cols as usize).saturating_sub(banner.text.len()) / 2;
            queue!(
                out,
                cursor::MoveTo(col as u16, rows / 2),
                style::SetForegroundColor(Color::Red),
                style::Print(&banner.text),
            )?;
        }

        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

impl RenderSink for TermSink {
    fn set_player_position(&mut self, x: f32, y: f32) {
        self.player = (x, y);
    }

    fn create_gate(&mut self, id: u32, top_height: f32, bottom_height: f32, x: f32) {
        self.gates.push(GateView {
            id,
            top_height,
            bottom_height,
            x,
        });
    }

    fn move_gate(&mut self, id: u32, x: f32) {
        if let Some(gate) = self.gates.iter_mut().find(|g| g.id == id) {
            gate.x = x;
        }
    }

    fn destroy_gate(&mut self, id: u32) {
        self.gates.retain(|g| g.id != id);
    }

    fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    fn set_high_score(&mut self, score: u32) {
        self.high_score = score;
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let banner = BannerHandle::default();
    let sink = TermSink::new(banner.clone());
    let store = JsonFileStore::open("gapwing-scores.json");
    let mut session = match GameSession::new(Config::default(), rand::random(), sink, store, banner.clone())
    {
        Ok(session) => session,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let cleanup = |out: &mut io::Stdout| -> io::Result<()> {
        execute!(out, terminal::LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()
    };

    let frame_dur = Duration::from_millis(FRAME_MS);
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        cleanup(&mut out)?;
                        return Ok(());
                    }
                    KeyCode::Char(' ') | KeyCode::Up => session.impulse(),
                    _ => {}
                }
            }
        }

        let elapsed = last.elapsed().as_millis() as u64;
        last = Instant::now();
        session.advance(elapsed);
        banner.countdown();

        session.render_sink().draw(&mut out, session.config())?;

        let spent = frame_start.elapsed();
        if spent < frame_dur {
            std::thread::sleep(frame_dur - spent);
        }
    }
}
