use anyhow::Result;
use bento_config::Config;
use bento_engine::feed::FeedState;
use bento_engine::intents::{self, Intent, PointerPosition};
use bento_engine::variant::{Background, RenderVariant, block_icon, describe};
use bento_engine::{Block, Board, BoardChange, BuiltinPlatforms, io};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block as Panel, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

struct App {
    page_path: PathBuf,
    board: Board,
    list_state: ListState,
    status: String,
}

impl App {
    fn new(page_path: PathBuf) -> Result<Self> {
        let page = io::load_page(&page_path)?;
        let mut app = Self {
            page_path,
            board: Board::new(page),
            list_state: ListState::default(),
            status: String::new(),
        };

        if !app.board.blocks().is_empty() {
            app.list_state.select(Some(0));
        }

        Ok(app)
    }

    fn selected_block(&self) -> Option<&Block> {
        self.list_state
            .selected()
            .and_then(|index| self.board.blocks().get(index))
    }

    fn next_block(&mut self) {
        let len = self.board.blocks().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_block(&mut self) {
        let len = self.board.blocks().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Swap the selected block with its neighbour, the same way a drop does
    fn move_selected(&mut self, offset: isize) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        let Some(target_index) = index.checked_add_signed(offset) else {
            return;
        };
        let (Some(source), Some(target)) = (
            self.board.blocks().get(index).cloned(),
            self.board.blocks().get(target_index).cloned(),
        ) else {
            return;
        };

        self.board.apply(Intent::DragStart(source.id));
        let change = self.board.apply(intents::drop(&target));
        if self.apply_change(change) {
            self.list_state.select(Some(target_index));
        }
    }

    /// Grow or shrink the selected block's spans by whole cells
    fn resize_selected(&mut self, d_cols: i64, d_rows: i64) {
        let Some(block) = self.selected_block().cloned() else {
            return;
        };
        let cols = (i64::from(block.col_span) + d_cols).max(1) as u32;
        let rows = (i64::from(block.row_span) + d_rows).max(1) as u32;

        self.board.apply(Intent::ResizeStart {
            block,
            pointer: PointerPosition::default(),
        });
        let change = self.board.finish_resize(cols, rows);
        self.apply_change(change);
    }

    fn delete_selected(&mut self) {
        let Some(block) = self.selected_block().cloned() else {
            return;
        };
        let change = self.board.apply(intents::delete(&block));
        if self.apply_change(change) {
            let len = self.board.blocks().len();
            let next = self.list_state.selected().filter(|_| len > 0).map(|i| i.min(len - 1));
            self.list_state.select(next);
        }
    }

    /// Save after a content change; returns whether the page changed
    fn apply_change(&mut self, change: BoardChange) -> bool {
        if change != BoardChange::Content {
            return false;
        }
        self.status = match io::save_page(&self.page_path, self.board.page()) {
            Ok(()) => format!("Saved {}", self.page_path.display()),
            Err(e) => format!("Error saving page: {e}"),
        };
        true
    }
}

/// Detail lines for one block as the renderer would draw it.
///
/// Uses only cached feed entries; the inspector never fetches.
fn describe_block(block: &Block) -> Vec<String> {
    let (feed, _) = FeedState::for_block(block);
    let tile = describe(block, &feed, &BuiltinPlatforms);

    let mut lines = vec![
        format!("id:        {}", block.id),
        format!("type:      {:?}", block.kind),
        format!("spans:     {}x{}", block.col_span, block.row_span),
        format!("tier:      {}", tile.tier.as_str()),
        format!("variant:   {}", tile.variant.name()),
        format!("glyph:     {}", block_icon(block, &BuiltinPlatforms).glyph()),
    ];

    if !tile.placement.is_auto_flow() {
        lines.push(format!("placement: {}", tile.placement.to_css().trim_end()));
    }
    if let Some((columns, rows)) = block.occupied_cells() {
        lines.push(format!(
            "cells:     cols {}..{} rows {}..{}",
            columns.start, columns.end, rows.start, rows.end
        ));
    }

    lines.push(match &tile.surface.background {
        Background::Image(url) => format!("surface:   image {url}"),
        Background::Custom(value) => format!("surface:   custom {value}"),
        Background::Color(class) => format!("surface:   {class}"),
    });
    if tile.surface.scrim {
        lines.push("scrim:     yes".to_string());
    }

    lines.push(String::new());
    match &tile.variant {
        RenderVariant::Spacer => lines.push("(empty space)".to_string()),
        RenderVariant::SocialIcon(view) => {
            if let Some(glyph) = &view.glyph {
                let brand = if glyph.brand { " (brand)" } else { "" };
                lines.push(format!("icon:      {}{brand}", glyph.name));
            }
            lines.push(format!(
                "link:      {}",
                view.url.as_deref().unwrap_or("(none)")
            ));
        }
        RenderVariant::YoutubeFeed(view) => {
            lines.push(format!("feed:      {} ({:?})", view.header, view.mode));
            lines.push(format!(
                "layout:    {}, {} thumbnails",
                view.layout.as_str(),
                view.layout.thumbnail_count()
            ));
            for video in &view.videos {
                lines.push(format!("  - {} {}", video.id, video.title));
            }
        }
        RenderVariant::YoutubeSingle(view) => {
            lines.push(format!("video:     {}", view.video_id));
            lines.push(view.heading.clone());
        }
        RenderVariant::Media(view) => {
            lines.push(format!("media:     {:?} {}", view.kind, view.source));
        }
        RenderVariant::Map(view) => lines.push(format!("map:       {}", view.embed_url)),
        RenderVariant::Standard(view) => {
            if let Some(icon) = &view.icon {
                lines.push(format!("icon:      {}", icon.glyph()));
            }
            lines.push(view.heading.clone().unwrap_or_else(|| "Add title...".to_string()));
            if let Some(subtext) = &view.subtext {
                lines.push(subtext.clone());
            }
            if let Some(body) = &view.body {
                lines.push(String::new());
                lines.extend(body.lines().map(str::to_string));
            }
        }
    }

    lines
}

fn main() -> Result<()> {
    // Page path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let page_path = match args.len() {
        2 => PathBuf::from(&args[1]),
        1 => match Config::load() {
            Ok(Some(config)) => config.page_path,
            Ok(None) => {
                eprintln!("Error: No page path provided and no config file found");
                eprintln!("Usage: {} <page.json>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <page.json>", args[0]);
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {} [page.json]", args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_page_path(&page_path) {
        eprintln!("Error: Page path '{}' is invalid: {e}", page_path.display());
        process::exit(1);
    }

    let mut app = match App::new(page_path) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_block(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_block(),
                KeyCode::Char('J') => app.move_selected(1),
                KeyCode::Char('K') => app.move_selected(-1),
                KeyCode::Right | KeyCode::Char('l') => app.resize_selected(1, 0),
                KeyCode::Left | KeyCode::Char('h') => app.resize_selected(-1, 0),
                KeyCode::Char('+') => app.resize_selected(0, 1),
                KeyCode::Char('-') => app.resize_selected(0, -1),
                KeyCode::Char('d') => app.delete_selected(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    let items: Vec<ListItem> = app
        .board
        .blocks()
        .iter()
        .map(|block| {
            let label = if block.title.is_empty() {
                format!("{:?}", block.kind)
            } else {
                block.title.clone()
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}x{} ", block.col_span, block.row_span),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(label),
            ]))
        })
        .collect();

    let title = format!("{} ({} blocks)", app.board.page().profile.name, items.len());
    let list = List::new(items)
        .block(Panel::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    let detail: Vec<Line> = match app.selected_block() {
        Some(block) => describe_block(block).into_iter().map(Line::from).collect(),
        None => vec![Line::from("Page has no blocks")],
    };
    let detail = Paragraph::new(detail)
        .block(Panel::default().borders(Borders::ALL).title("Tile"))
        .wrap(Wrap { trim: false });
    f.render_widget(detail, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | j/k: Select | J/K: Move | h/l: Width | +/-: Height | d: Delete  "),
        Span::styled(app.status.clone(), Style::default().fg(Color::Green)),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}
