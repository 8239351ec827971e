use profile_card::core::{Action, App, Directory, Effect, Route, User, update};
use profile_card::tui::event::TuiEvent;
use profile_card::tui::{TuiState, handle_event, ui};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

// ============================================================================
// Helper Functions
// ============================================================================

fn avatar_directory() -> Directory {
    Directory::new(vec![
        User::new(0, "Aang", "https://example.com/aang.png", true),
        User::new(1, "Korra", "https://example.com/korra.png", false),
    ])
    .unwrap()
}

/// Draws the app and returns the screen as text, one line per row.
fn screen(app: &App, tui: &mut TuiState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    terminal.draw(|f| ui::draw_ui(f, app, tui)).unwrap();
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_selecting_second_card_shows_korra() {
    let mut app = App::new(avatar_directory(), "Home".to_string());
    let mut tui = TuiState::new(app.directory.len());
    screen(&app, &mut tui);

    handle_event(&mut app, &mut tui, &TuiEvent::CursorDown);
    handle_event(&mut app, &mut tui, &TuiEvent::CursorDown);
    assert_eq!(
        handle_event(&mut app, &mut tui, &TuiEvent::Submit),
        Effect::RouteChanged
    );
    assert_eq!(app.route().to_string(), "Details/1");

    let text = screen(&app, &mut tui);
    assert!(text.contains("Korra"));
    assert!(text.contains("Offline"));

    handle_event(&mut app, &mut tui, &TuiEvent::Back);
    assert_eq!(app.route(), Route::List);
    let text = screen(&app, &mut tui);
    assert!(text.contains("Aang"));
    assert!(text.contains("Korra"));
}

#[test]
fn test_every_card_navigates_to_its_own_user() {
    let directory = Directory::builtin();
    for (index, user) in directory.iter().enumerate() {
        let mut app = App::new(directory.clone(), "Home".to_string());
        let mut tui = TuiState::new(directory.len());
        tui.user_list.selected = Some(index);

        handle_event(&mut app, &mut tui, &TuiEvent::Submit);
        assert_eq!(app.route(), Route::Details(user.id));
        assert_eq!(app.detail_user().unwrap().unwrap(), user);
        assert_eq!(app.route().to_string().parse::<Route>(), Ok(app.route()));

        update(&mut app, Action::NavigateUp);
        assert_eq!(app.route(), Route::List);
    }
}

#[test]
fn test_empty_directory_renders_without_cards() {
    let mut app = App::new(Directory::empty(), "Home".to_string());
    let mut tui = TuiState::new(0);
    let text = screen(&app, &mut tui);
    assert!(text.contains("No users"));
    assert!(!text.contains("Active now"));
    assert!(!text.contains("Offline"));

    assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::Submit), Effect::None);
    assert_eq!(app.route(), Route::List);
}

#[test]
fn test_card_status_lines_follow_presence() {
    let app = App::new(avatar_directory(), "Home".to_string());
    let mut tui = TuiState::new(app.directory.len());
    let text = screen(&app, &mut tui);
    let aang = text.lines().position(|l| l.contains("Aang")).unwrap();
    let korra = text.lines().position(|l| l.contains("Korra")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[aang + 1].contains("Active now"));
    assert!(lines[korra + 1].contains("Offline"));
}

#[test]
fn test_unknown_user_selection_is_rejected() {
    let mut app = App::new(avatar_directory(), "Home".to_string());
    assert_eq!(update(&mut app, Action::SelectUser(5)), Effect::None);
    assert_eq!(app.route(), Route::List);
    let mut tui = TuiState::new(app.directory.len());
    assert!(screen(&app, &mut tui).contains("no user with id 5"));
}
