#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::components::TetrominoType;
    use crate::disguise::{HEADER, SUSPENDED_LINES};
    use crate::snapshot::View;
    use crate::ui::{self, preview_lines};
    use ratatui::{Terminal, backend::TestBackend};

    // Helper function to create a test terminal
    fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    // Flatten the rendered buffer into one string per row
    fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
            .collect()
    }

    fn draw(terminal: &mut Terminal<TestBackend>, view: &View) -> Vec<String> {
        terminal.draw(|f| ui::render(f, view)).unwrap();
        screen_lines(terminal)
    }

    #[test]
    fn test_disguise_view_shows_log_lines() {
        let mut terminal = create_test_terminal(100, 30);
        let screen = draw(&mut terminal, &View::Disguise);

        assert!(screen[0].starts_with(HEADER));
        for line in SUSPENDED_LINES {
            assert!(
                screen.iter().any(|row| row.contains(line)),
                "missing disguise line {line:?}"
            );
        }
        // No game data leaks through
        assert!(!screen.iter().any(|row| row.contains("Score:")));
        assert!(!screen.iter().any(|row| row.contains("[]")));
    }

    #[test]
    fn test_game_view_shows_board_and_stats() {
        let mut app = App::with_seed(3);
        let view = app.view();

        let mut terminal = create_test_terminal(80, 26);
        let screen = draw(&mut terminal, &view);

        assert!(screen[0].starts_with(HEADER));
        let text = screen.join("\n");
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Lines: 0"));
        assert!(text.contains("Level: 1"));
        assert!(text.contains("Next:"));
        // Active piece plus the next preview
        assert!(text.matches("[]").count() >= 8);
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let mut app = App::with_seed(3);
        let view = app.view();

        let mut terminal = create_test_terminal(20, 5);
        draw(&mut terminal, &view);
        draw(&mut terminal, &View::Disguise);
    }

    #[test]
    fn test_preview_lines_trim_empty_rows() {
        assert_eq!(preview_lines(TetrominoType::I).len(), 1);
        assert_eq!(preview_lines(TetrominoType::O).len(), 2);
        assert_eq!(preview_lines(TetrominoType::T).len(), 2);

        for kind in TetrominoType::ALL {
            let cells: usize = preview_lines(kind)
                .iter()
                .flat_map(|line| line.spans.iter())
                .filter(|span| span.content == "[]")
                .count();
            assert_eq!(cells, 4, "{kind:?} preview should show four cells");
        }
    }
}
