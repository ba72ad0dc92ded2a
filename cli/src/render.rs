use campo_core::*;

fn glyph(cell: &Cell) -> char {
    if cell.is_exploding() {
        return '#';
    }
    match cell.view() {
        CellView::Flagged => 'F',
        CellView::Detonated => '*',
        CellView::Revealed(0) => ' ',
        CellView::Revealed(count) => char::from(b'0' + count),
        CellView::Hidden => '.',
    }
}

/// Text rendering of the board, x across and y down.
pub fn render<S: Scheduler>(game: &Game<S>) -> String {
    let board = game.board();
    let size = board.size();
    let width = size.saturating_sub(1).to_string().len() + 1;

    let mut lines = Vec::with_capacity(usize::from(size) + 3);
    lines.push(format!(
        "time {}s  flags {}",
        game.elapsed_secs(),
        game.flags_remaining()
    ));

    let mut header = format!("{:>width$}", "");
    header.extend((0..size).map(|x| format!("{:>width$}", x)));
    lines.push(header);

    for y in 0..size {
        let mut line = format!("{:>width$}", y);
        line.extend((0..size).map(|x| format!("{:>width$}", glyph(&board[(x, y)]))));
        lines.push(line);
    }

    if let Some((x, y)) = game.triggered_mine() {
        lines.push(format!("BOOM! Mine hit at ({}, {}), n starts a new game", x, y));
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
