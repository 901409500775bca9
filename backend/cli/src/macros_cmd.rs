//! `cronforge macros`: the macro table.

use cronforge_scheduler::Macro;

use crate::terminal_output::render_table;

pub fn render() -> String {
    let rows: Vec<Vec<String>> = Macro::ALL
        .into_iter()
        .map(|m| {
            let expansion = m.expansion().unwrap_or("(at startup)");
            vec![m.to_string(), expansion.to_string()]
        })
        .collect();
    render_table(&["Macro", "Expansion"], &rows)
}

pub fn run() {
    print!("{}", render());
}
