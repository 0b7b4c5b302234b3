// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use prospectus_app::{
    Accent, AppCommand, AppEvent, AppState, CategoryFilter, OverlayKind, Project, SectionKind,
    Service, SiteContent,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const CARD_FEATURE_LINES: usize = 3;
const CARD_TAG_COUNT: usize = 3;
const HALF_PAGE_LINES: u16 = 10;
const OVERLAY_CLOSE_MARKER: &str = "[x]";
const POPULAR_MARK: &str = "MOST POPULAR";

/// Terminal-session switches resolved before the loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub mouse: bool,
    pub mono: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            mouse: true,
            mono: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    services_cursor: usize,
    work_cursor: usize,
    overlay_scroll: u16,
    help_visible: bool,
    mono: bool,
    status_token: u64,
}

pub fn run_app(state: &mut AppState, content: &SiteContent, options: &UiOptions) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;
    if options.mouse {
        execute!(stdout, EnableMouseCapture).context("enable mouse capture")?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData {
        mono: options.mono,
        ..ViewData::default()
    };
    let (internal_tx, internal_rx) = mpsc::channel();
    let mut screen = Rect::default();

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        match terminal.draw(|frame| render(frame, state, content, &view_data)) {
            Ok(completed) => screen = completed.area,
            Err(error) => {
                result = Err(error).context("draw frame");
                break;
            }
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, content, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Mouse(mouse) if options.mouse => {
                    handle_mouse_event(state, content, &mut view_data, &internal_tx, screen, mouse);
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    if options.mouse {
        execute!(io::stdout(), DisableMouseCapture).context("disable mouse capture")?;
    }
    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

/// Routes a command through the state machine and reacts to the events
/// it actually produced. A command that changed nothing leaves the view
/// alone too.
fn dispatch_and_refresh(
    state: &mut AppState,
    content: &SiteContent,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) {
    let events = state.dispatch(command);
    for event in events {
        match event {
            AppEvent::FilterChanged(filter) => {
                view_data.services_cursor = 0;
                let count = content.services.by_category(filter).len();
                let noun = if count == 1 { "match" } else { "matches" };
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("filter: {} -- {count} {noun}", filter.label()),
                );
            }
            AppEvent::ServiceOpened(_) | AppEvent::ProjectOpened(_) => {
                view_data.overlay_scroll = 0;
            }
            AppEvent::SectionChanged(_)
            | AppEvent::OverlayClosed
            | AppEvent::StatusUpdated(_)
            | AppEvent::StatusCleared => {}
        }
    }
}

fn handle_key_event(
    state: &mut AppState,
    content: &SiteContent,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
            emit_status(state, view_data, internal_tx, "help hidden");
        }
        return false;
    }

    if key.code == KeyCode::Char('?') {
        view_data.help_visible = true;
        return false;
    }

    if state.overlay_open() {
        handle_overlay_key(state, content, view_data, internal_tx, key);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => {
            dispatch_and_refresh(state, content, view_data, internal_tx, AppCommand::NextSection);
        }
        KeyCode::BackTab => {
            dispatch_and_refresh(state, content, view_data, internal_tx, AppCommand::PrevSection);
        }
        _ => match state.section {
            SectionKind::Home => handle_home_key(state, content, view_data, internal_tx, key),
            SectionKind::Services => {
                handle_services_key(state, content, view_data, internal_tx, key);
            }
            SectionKind::Work => handle_work_key(state, content, view_data, internal_tx, key),
            SectionKind::Process | SectionKind::Tools | SectionKind::Contact => {}
        },
    }
    false
}

fn handle_home_key(
    state: &mut AppState,
    content: &SiteContent,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('s') => dispatch_and_refresh(
            state,
            content,
            view_data,
            internal_tx,
            AppCommand::GoToSection(SectionKind::Services),
        ),
        KeyCode::Char('b') => dispatch_and_refresh(
            state,
            content,
            view_data,
            internal_tx,
            AppCommand::GoToSection(SectionKind::Contact),
        ),
        _ => {}
    }
}

fn handle_services_key(
    state: &mut AppState,
    content: &SiteContent,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char(digit @ '1'..='7') => {
            let index = digit as usize - '1' as usize;
            dispatch_and_refresh(
                state,
                content,
                view_data,
                internal_tx,
                AppCommand::SetFilter(CategoryFilter::ALL[index]),
            );
        }
        KeyCode::Char('f') => {
            let next = rotate_filter(state.services.filter, 1);
            dispatch_and_refresh(
                state,
                content,
                view_data,
                internal_tx,
                AppCommand::SetFilter(next),
            );
        }
        KeyCode::Char('F') => {
            let previous = rotate_filter(state.services.filter, -1);
            dispatch_and_refresh(
                state,
                content,
                view_data,
                internal_tx,
                AppCommand::SetFilter(previous),
            );
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
            let visible = content.services.by_category(state.services.filter).len();
            move_cursor(&mut view_data.services_cursor, -1, visible);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            let visible = content.services.by_category(state.services.filter).len();
            move_cursor(&mut view_data.services_cursor, 1, visible);
        }
        KeyCode::Enter => {
            let visible = content.services.by_category(state.services.filter);
            if let Some(service) = visible.get(view_data.services_cursor) {
                let key = service.key;
                dispatch_and_refresh(
                    state,
                    content,
                    view_data,
                    internal_tx,
                    AppCommand::OpenService(key),
                );
            }
        }
        _ => {}
    }
}

fn handle_work_key(
    state: &mut AppState,
    content: &SiteContent,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
            move_cursor(&mut view_data.work_cursor, -1, content.work.len());
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            move_cursor(&mut view_data.work_cursor, 1, content.work.len());
        }
        KeyCode::Enter => {
            if let Some(project) = content.work.entries().get(view_data.work_cursor) {
                let key = project.key;
                dispatch_and_refresh(
                    state,
                    content,
                    view_data,
                    internal_tx,
                    AppCommand::OpenProject(key),
                );
            }
        }
        _ => {}
    }
}

/// The open overlay owns the keyboard. Everything that is not a close
/// or scroll key is swallowed so the grid underneath cannot move.
fn handle_overlay_key(
    state: &mut AppState,
    content: &SiteContent,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('x') => {
            dispatch_and_refresh(
                state,
                content,
                view_data,
                internal_tx,
                AppCommand::CloseOverlay,
            );
        }
        KeyCode::Down | KeyCode::Char('j') => scroll_overlay_by(state, content, view_data, 1),
        KeyCode::Up | KeyCode::Char('k') => scroll_overlay_by(state, content, view_data, -1),
        KeyCode::Char('d') => {
            scroll_overlay_by(state, content, view_data, HALF_PAGE_LINES as isize);
        }
        KeyCode::Char('u') => {
            scroll_overlay_by(state, content, view_data, -(HALF_PAGE_LINES as isize));
        }
        KeyCode::Char('g') => view_data.overlay_scroll = 0,
        KeyCode::Char('G') => view_data.overlay_scroll = overlay_scroll_limit(state, content),
        _ => {}
    }
}

fn scroll_overlay_by(
    state: &AppState,
    content: &SiteContent,
    view_data: &mut ViewData,
    delta: isize,
) {
    let limit = overlay_scroll_limit(state, content) as isize;
    let next = (view_data.overlay_scroll as isize + delta).clamp(0, limit);
    view_data.overlay_scroll = next as u16;
}

fn overlay_scroll_limit(state: &AppState, content: &SiteContent) -> u16 {
    let Some(view) = overlay_view(state, content) else {
        return 0;
    };
    let lines = view.body.lines().count().saturating_sub(1);
    lines.min(u16::MAX as usize) as u16
}

fn move_cursor(cursor: &mut usize, delta: isize, len: usize) {
    if len == 0 {
        *cursor = 0;
        return;
    }
    let current = (*cursor).min(len - 1) as isize;
    *cursor = (current + delta).clamp(0, len as isize - 1) as usize;
}

fn rotate_filter(filter: CategoryFilter, delta: isize) -> CategoryFilter {
    let chips = CategoryFilter::ALL;
    let current = chips.iter().position(|chip| *chip == filter).unwrap_or(0) as isize;
    let next = (current + delta).rem_euclid(chips.len() as isize) as usize;
    chips[next]
}

fn handle_mouse_event(
    state: &mut AppState,
    content: &SiteContent,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    screen: Rect,
    mouse: MouseEvent,
) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let position = Position::new(mouse.column, mouse.row);
            handle_mouse_click(state, content, view_data, internal_tx, screen, position);
        }
        MouseEventKind::ScrollDown => handle_mouse_scroll(state, content, view_data, 1),
        MouseEventKind::ScrollUp => handle_mouse_scroll(state, content, view_data, -1),
        _ => {}
    }
}

fn handle_mouse_scroll(
    state: &mut AppState,
    content: &SiteContent,
    view_data: &mut ViewData,
    delta: isize,
) {
    if state.overlay_open() {
        scroll_overlay_by(state, content, view_data, delta);
        return;
    }
    match state.section {
        SectionKind::Services => {
            let visible = content.services.by_category(state.services.filter).len();
            move_cursor(&mut view_data.services_cursor, delta, visible);
        }
        SectionKind::Work => move_cursor(&mut view_data.work_cursor, delta, content.work.len()),
        _ => {}
    }
}

fn handle_mouse_click(
    state: &mut AppState,
    content: &SiteContent,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    screen: Rect,
    position: Position,
) {
    if view_data.help_visible {
        view_data.help_visible = false;
        return;
    }

    // An open overlay owns the pointer as well. Clicks land either on
    // the close marker, inside the panel where they stay inert, or on
    // the backdrop which dismisses.
    if state.overlay_open() {
        let panel = overlay_rect(screen);
        if overlay_close_rect(panel).contains(position) || !panel.contains(position) {
            dispatch_and_refresh(
                state,
                content,
                view_data,
                internal_tx,
                AppCommand::CloseOverlay,
            );
        }
        return;
    }

    let chrome = chrome_rects(screen);
    if let Some(section) = section_tab_at(chrome.header, position) {
        dispatch_and_refresh(
            state,
            content,
            view_data,
            internal_tx,
            AppCommand::GoToSection(section),
        );
        return;
    }

    match state.section {
        SectionKind::Services => {
            let regions = services_rects(inner_rect(chrome.body));
            if let Some(index) = chip_at(regions.chips, position) {
                dispatch_and_refresh(
                    state,
                    content,
                    view_data,
                    internal_tx,
                    AppCommand::SetFilter(CategoryFilter::ALL[index]),
                );
                return;
            }
            let visible = content.services.by_category(state.services.filter);
            if let Some(index) = card_at(regions.grid, visible.len(), position) {
                let key = visible[index].key;
                view_data.services_cursor = index;
                dispatch_and_refresh(
                    state,
                    content,
                    view_data,
                    internal_tx,
                    AppCommand::OpenService(key),
                );
            }
        }
        SectionKind::Work => {
            let grid = inner_rect(chrome.body);
            if let Some(index) = card_at(grid, content.work.len(), position) {
                let key = content.work.entries()[index].key;
                view_data.work_cursor = index;
                dispatch_and_refresh(
                    state,
                    content,
                    view_data,
                    internal_tx,
                    AppCommand::OpenProject(key),
                );
            }
        }
        SectionKind::Home | SectionKind::Process | SectionKind::Tools | SectionKind::Contact => {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChromeRects {
    header: Rect,
    body: Rect,
    status: Rect,
}

fn chrome_rects(area: Rect) -> ChromeRects {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);
    ChromeRects {
        header: layout[0],
        body: layout[1],
        status: layout[2],
    }
}

fn inner_rect(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ServicesRects {
    chips: Rect,
    grid: Rect,
}

fn services_rects(inner: Rect) -> ServicesRects {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);
    ServicesRects {
        chips: layout[0],
        grid: layout[1],
    }
}

fn chip_rects(area: Rect) -> Vec<Rect> {
    let count = CategoryFilter::ALL.len();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(area)
        .to_vec()
}

fn chip_at(area: Rect, position: Position) -> Option<usize> {
    chip_rects(area)
        .iter()
        .position(|rect| rect.contains(position))
}

fn grid_columns(width: u16) -> usize {
    if width >= 120 {
        3
    } else if width >= 80 {
        2
    } else {
        1
    }
}

/// Card cells in row-major order. Geometry is pure so the renderer and
/// the mouse hit-test can never disagree.
fn card_rects(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let columns = grid_columns(area.width) as u16;
    let rows = count.div_ceil(columns as usize) as u16;
    let cell_width = area.width / columns;
    let cell_height = area.height / rows;
    if cell_width == 0 || cell_height == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|index| {
            let column = index as u16 % columns;
            let row = index as u16 / columns;
            Rect::new(
                area.x + column * cell_width,
                area.y + row * cell_height,
                cell_width,
                cell_height,
            )
        })
        .collect()
}

fn card_at(area: Rect, count: usize, position: Position) -> Option<usize> {
    card_rects(area, count)
        .iter()
        .position(|rect| rect.contains(position))
}

/// Mirrors the Tabs widget layout: one pad cell either side of each
/// title, one divider cell between tabs.
fn section_tab_at(header: Rect, position: Position) -> Option<SectionKind> {
    let inner = inner_rect(header);
    if !inner.contains(position) {
        return None;
    }
    let mut x = inner.x;
    for section in SectionKind::ALL {
        let width = section.label().chars().count() as u16 + 2;
        let tab = Rect::new(x, inner.y, width.min(inner.right().saturating_sub(x)), 1);
        if tab.contains(position) {
            return Some(section);
        }
        x = x.saturating_add(width + 1);
    }
    None
}

fn overlay_rect(screen: Rect) -> Rect {
    centered_rect(76, 84, screen)
}

fn overlay_close_rect(panel: Rect) -> Rect {
    if panel.width < 5 || panel.height == 0 {
        return Rect::default();
    }
    Rect::new(panel.x + panel.width - 5, panel.y, 3, 1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OverlayView {
    title: String,
    body: String,
    accent: Accent,
}

/// Resolves the open selection to renderable copy. `None` both when
/// nothing is selected and when a selected key is missing from the
/// catalog; the latter cannot happen through the key and mouse paths.
fn overlay_view(state: &AppState, content: &SiteContent) -> Option<OverlayView> {
    match state.active_overlay()? {
        OverlayKind::Service(key) => {
            let Some(service) = content.services.get(key) else {
                debug_assert!(false, "selected service {key:?} missing from catalog");
                return None;
            };
            Some(OverlayView {
                title: format!("{} {}", service.icon, service.title),
                body: service_overlay_text(service),
                accent: service.accent,
            })
        }
        OverlayKind::Project(key) => {
            let Some(project) = content.work.get(key) else {
                debug_assert!(false, "selected project {key:?} missing from catalog");
                return None;
            };
            Some(OverlayView {
                title: format!("{} {}", project.icon, project.title),
                body: project_overlay_text(project),
                accent: project.accent,
            })
        }
    }
}

fn render(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    content: &SiteContent,
    view_data: &ViewData,
) {
    let chrome = chrome_rects(frame.area());

    let selected = SectionKind::ALL
        .iter()
        .position(|section| *section == state.section)
        .unwrap_or(0);
    let titles = SectionKind::ALL
        .iter()
        .map(|section| section.label().to_owned())
        .collect::<Vec<String>>();
    let tabs = Tabs::new(titles)
        .block(Block::default().title(content.studio).borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(selection_style(view_data.mono))
        .select(selected);
    frame.render_widget(tabs, chrome.header);

    match state.section {
        SectionKind::Home => render_plain_section(
            frame,
            chrome.body,
            state.section.label(),
            render_home_text(content),
        ),
        SectionKind::Services => render_services(frame, chrome.body, state, content, view_data),
        SectionKind::Process => render_plain_section(
            frame,
            chrome.body,
            content.process_copy.heading,
            render_process_text(content),
        ),
        SectionKind::Tools => render_plain_section(
            frame,
            chrome.body,
            content.tools_copy.heading,
            render_tools_text(content),
        ),
        SectionKind::Work => render_work(frame, chrome.body, content, view_data),
        SectionKind::Contact => render_plain_section(
            frame,
            chrome.body,
            state.section.label(),
            render_contact_text(content),
        ),
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chrome.status);

    if state.overlay_open() {
        render_overlay(frame, state, content, view_data);
    }

    if view_data.help_visible {
        let area = centered_rect(80, 72, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_plain_section(frame: &mut ratatui::Frame<'_>, area: Rect, title: &str, text: String) {
    let body = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned()),
    );
    frame.render_widget(body, area);
}

fn render_services(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    content: &SiteContent,
    view_data: &ViewData,
) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(content.services_copy.heading);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let regions = services_rects(inner);
    for (index, rect) in chip_rects(regions.chips).into_iter().enumerate() {
        let chip = CategoryFilter::ALL[index];
        let active = chip == state.services.filter;
        let style = if active {
            selection_style(view_data.mono)
        } else {
            Style::default()
        };
        let label = Paragraph::new(format!("{} {}", chip.icon(), chip.label()))
            .block(Block::default().borders(Borders::ALL).style(style));
        frame.render_widget(label, rect);
    }

    let visible = content.services.by_category(state.services.filter);
    if visible.is_empty() {
        let empty = Paragraph::new(format!(
            "no services under {}; press 1 for all",
            state.services.filter.label()
        ));
        frame.render_widget(empty, regions.grid);
        return;
    }
    for (index, rect) in card_rects(regions.grid, visible.len()).into_iter().enumerate() {
        let service = visible[index];
        let style = if index == view_data.services_cursor {
            selection_style(view_data.mono)
        } else {
            accent_style(service.accent, view_data.mono)
        };
        let card = Paragraph::new(service_card_text(service)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} {}", service.icon, service.title))
                .style(style),
        );
        frame.render_widget(card, rect);
    }
}

fn render_work(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    content: &SiteContent,
    view_data: &ViewData,
) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(content.work_copy.heading);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let projects = content.work.entries();
    for (index, rect) in card_rects(inner, projects.len()).into_iter().enumerate() {
        let project = &projects[index];
        let style = if index == view_data.work_cursor {
            selection_style(view_data.mono)
        } else {
            accent_style(project.accent, view_data.mono)
        };
        let card = Paragraph::new(project_card_text(project)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} {}", project.icon, project.title))
                .style(style),
        );
        frame.render_widget(card, rect);
    }
}

fn render_overlay(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    content: &SiteContent,
    view_data: &ViewData,
) {
    let Some(view) = overlay_view(state, content) else {
        return;
    };
    let panel = overlay_rect(frame.area());
    frame.render_widget(Clear, panel);
    let body = Paragraph::new(view.body)
        .block(
            Block::default()
                .title(view.title)
                .borders(Borders::ALL)
                .style(accent_style(view.accent, view_data.mono)),
        )
        .scroll((view_data.overlay_scroll, 0));
    frame.render_widget(body, panel);
    frame.render_widget(
        Paragraph::new(OVERLAY_CLOSE_MARKER),
        overlay_close_rect(panel),
    );
}

fn selection_style(mono: bool) -> Style {
    if mono {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }
}

fn accent_style(accent: Accent, mono: bool) -> Style {
    if mono {
        return Style::default();
    }
    let (red, green, blue) = accent.from;
    Style::default().fg(Color::Rgb(red, green, blue))
}

fn render_home_text(content: &SiteContent) -> String {
    [
        content.hero.title.to_owned(),
        content.hero.subtitle.to_owned(),
        String::new(),
        content.hero.tagline.to_owned(),
        String::new(),
        format!("[s] {}  -> services", content.hero.primary_cta),
        format!("[b] {}  -> contact", content.hero.secondary_cta),
    ]
    .join("\n")
}

fn render_process_text(content: &SiteContent) -> String {
    let mut lines = Vec::new();
    if !content.process_copy.tagline.is_empty() {
        lines.push(content.process_copy.tagline.to_owned());
        lines.push(String::new());
    }
    for step in content.process {
        lines.push(format!("{} {} {}", step.number, step.icon, step.title));
        lines.push(format!("   {}", step.desc));
        lines.push(String::new());
    }
    lines.join("\n")
}

fn render_tools_text(content: &SiteContent) -> String {
    let mut lines = Vec::new();
    if !content.tools_copy.tagline.is_empty() {
        lines.push(content.tools_copy.tagline.to_owned());
        lines.push(String::new());
    }
    for tool in content.tools {
        lines.push(format!("{} {}", tool.icon, tool.name));
        lines.push(format!("   {}", tool.desc));
        lines.push(String::new());
    }
    lines.join("\n")
}

fn render_contact_text(content: &SiteContent) -> String {
    let contact = &content.contact;
    let links = contact
        .links
        .iter()
        .map(|link| format!("{} {}", link.icon, link.label))
        .collect::<Vec<String>>()
        .join(" | ");
    let mut lines = vec![
        format!("{}  {}", contact.phone_label, contact.phone),
        format!("{}  {}", contact.email_label, contact.email),
        String::new(),
        links,
        String::new(),
    ];
    for tagline in contact.taglines {
        lines.push((*tagline).to_owned());
    }
    lines.push(String::new());
    lines.push(contact.copyright.to_owned());
    lines.join("\n")
}

fn service_card_text(service: &Service) -> String {
    let mut lines = vec![service.blurb.to_owned(), String::new()];
    for feature in service.features.iter().take(CARD_FEATURE_LINES) {
        lines.push(format!("- {feature}"));
    }
    let hidden = service.features.len().saturating_sub(CARD_FEATURE_LINES);
    if hidden > 0 {
        lines.push(format!("  +{hidden} more"));
    }
    lines.join("\n")
}

fn project_card_text(project: &Project) -> String {
    let mut lines = vec![
        format!("{} | {}", project.sector, project.shipped.display()),
        project.blurb.to_owned(),
        String::new(),
    ];
    let tags = project
        .tags
        .iter()
        .take(CARD_TAG_COUNT)
        .map(|tag| format!("[{tag}]"))
        .collect::<Vec<String>>()
        .join(" ");
    let hidden = project.tags.len().saturating_sub(CARD_TAG_COUNT);
    if hidden > 0 {
        lines.push(format!("{tags} +{hidden}"));
    } else {
        lines.push(tags);
    }
    for outcome in project.results {
        lines.push(format!("{} {}", outcome.metric, outcome.label));
    }
    lines.join("\n")
}

/// Full service brief. Nothing here is truncated; long bodies scroll.
fn service_overlay_text(service: &Service) -> String {
    let mut lines = vec![
        service.blurb.to_owned(),
        String::new(),
        format!("category: {}", service.category.label()),
        String::new(),
        "features".to_owned(),
    ];
    for feature in service.detailed_features {
        lines.push(format!("  {} {} - {}", feature.icon, feature.title, feature.desc));
    }
    lines.push(String::new());
    lines.push("stack".to_owned());
    lines.push(format!("  {}", service.tech_stack.join(", ")));
    lines.push(String::new());
    lines.push("pricing".to_owned());
    for tier in service.pricing {
        if tier.popular {
            lines.push(format!("  {} {} {POPULAR_MARK}", tier.name, tier.price_line()));
        } else {
            lines.push(format!("  {} {}", tier.name, tier.price_line()));
        }
        for feature in tier.features {
            lines.push(format!("    - {feature}"));
        }
    }
    lines.push(String::new());
    lines.push("use cases".to_owned());
    for use_case in service.use_cases {
        lines.push(format!(
            "  {} {} - {}",
            use_case.icon, use_case.title, use_case.desc
        ));
    }
    lines.join("\n")
}

/// Full case study. Blocks with no copy are omitted rather than shown
/// as empty headings.
fn project_overlay_text(project: &Project) -> String {
    let mut lines = vec![
        format!(
            "{} | {} | shipped {}",
            project.client,
            project.sector,
            project.shipped.display()
        ),
        String::new(),
        project.blurb.to_owned(),
    ];
    if !project.results.is_empty() {
        lines.push(String::new());
        lines.push("results".to_owned());
        for outcome in project.results {
            lines.push(format!("  {} {}", outcome.metric, outcome.label));
        }
    }
    if !project.challenge.is_empty() {
        lines.push(String::new());
        lines.push("challenge".to_owned());
        lines.push(format!("  {}", project.challenge));
    }
    if !project.solution.is_empty() {
        lines.push(String::new());
        lines.push("solution".to_owned());
        lines.push(format!("  {}", project.solution));
    }
    if !project.features.is_empty() {
        lines.push(String::new());
        lines.push("delivered".to_owned());
        for feature in project.features {
            lines.push(format!("  - {feature}"));
        }
    }
    if !project.tags.is_empty() {
        lines.push(String::new());
        lines.push(format!("stack: {}", project.tags.join(", ")));
    }
    if let Some(testimonial) = project.testimonial {
        lines.push(String::new());
        lines.push(format!("\"{}\"", testimonial.quote));
        lines.push(format!("  {} | {}", testimonial.author, testimonial.role));
    }
    lines.join("\n")
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible {
        return String::new();
    }
    let hints = if state.overlay_open() {
        "esc/x close | j/k scroll | d/u half page | g/G ends"
    } else {
        match state.section {
            SectionKind::Home => "tab sections | s services | b contact | ? help | q quit",
            SectionKind::Services => {
                "1-7 chips | f/F cycle | arrows move | enter open | ? help | q quit"
            }
            SectionKind::Work => "arrows move | enter open | ? help | q quit",
            SectionKind::Process | SectionKind::Tools | SectionKind::Contact => {
                "tab sections | ? help | q quit"
            }
        }
    };
    match &state.status_line {
        Some(status) => format!("{status} | {hints}"),
        None => hints.to_owned(),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | q quit outside overlays | ? help\n\
nav: tab/shift+tab cycle sections | click a tab to jump\n\
home: s services | b contact\n\
services: 1-7 pick chip | f/F cycle chips | h/j/k/l or arrows move | enter open brief\n\
work: h/j/k/l or arrows move | enter open case study\n\
overlay: esc/x or [x] close | click outside closes | j/k scroll | d/u half page | g/G ends\n\
mouse: click chips, cards, and tabs directly | wheel scrolls"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
