use std::fmt::Write;

use cr_core::HistoryView;

pub const HELP: &str = "\
commands: list | next | prev | select N | fav N | del N | clear [-y]
          undo | private on|off | search [TEXT] | reload | help | quit";

/// Render the view as numbered rows. Numbers match `select`/`fav`/`del`.
///
/// Rows hidden by a search keep their number but are not printed.
pub fn render_view(view: &HistoryView) -> String {
    let mut out = String::new();

    if view.topbar.text_visible {
        let _ = writeln!(out, "clipboard: {}", view.topbar.text);
    }
    if view.private_mode {
        out.push_str("(private mode: history hidden)");
        return out;
    }
    if !view.search_query.is_empty() {
        let _ = writeln!(out, "search: {}", view.search_query);
    }
    if view.rows.is_empty() {
        out.push_str("(history is empty)");
        return out;
    }

    for (index, row) in view.rows.iter().enumerate() {
        if !row.visible {
            continue;
        }
        let marker = if row.selected { '>' } else { ' ' };
        let pin = if row.favorite { "★ " } else { "" };
        let _ = writeln!(out, "{marker}{:>3}. {pin}{}", index + 1, row.label);
    }
    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cr_core::history::view::{HistoryViewRow, TopbarView};
    use cr_core::EntryId;

    fn row(label: &str, favorite: bool, selected: bool, visible: bool) -> HistoryViewRow {
        HistoryViewRow {
            id: EntryId::from(label),
            label: label.to_string(),
            favorite,
            selected,
            visible,
        }
    }

    fn view(rows: Vec<HistoryViewRow>, private_mode: bool) -> HistoryView {
        HistoryView {
            rows,
            history_visible: !private_mode,
            favorites_visible: !private_mode,
            topbar: TopbarView {
                icon_visible: false,
                text_visible: true,
                text: "b".to_string(),
                down_arrow_visible: true,
            },
            delete_enabled: true,
            private_mode,
            search_query: String::new(),
        }
    }

    #[test]
    fn rows_are_numbered_in_display_order() {
        let rendered = render_view(&view(
            vec![row("b", false, true, true), row("a", false, false, true), row("pin", true, false, true)],
            false,
        ));

        assert_eq!(
            rendered,
            "clipboard: b\n>  1. b\n   2. a\n   3. ★ pin"
        );
    }

    #[test]
    fn hidden_rows_keep_their_numbers() {
        let rendered = render_view(&view(
            vec![row("b", false, true, false), row("a", false, false, true)],
            false,
        ));

        assert!(!rendered.contains("1. b"));
        assert!(rendered.contains("2. a"));
    }

    #[test]
    fn active_search_is_shown_above_rows() {
        let mut searched = view(vec![row("apple", false, true, true)], false);
        searched.search_query = "app".to_string();

        assert_eq!(
            render_view(&searched),
            "clipboard: b\nsearch: app\n>  1. apple"
        );
    }

    #[test]
    fn private_mode_hides_rows() {
        let rendered = render_view(&view(vec![row("secret", false, true, true)], true));

        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("private mode"));
    }
}
