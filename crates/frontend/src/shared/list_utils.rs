/// Helpers for list pages: sorting, search highlighting, debounced search input.
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows that can be ordered by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// New (field, ascending) after a click on the header of `clicked`.
pub fn toggle_sort(current_field: &str, ascending: bool, clicked: &str) -> (String, bool) {
    if current_field == clicked {
        (clicked.to_string(), !ascending)
    } else {
        (clicked.to_string(), true)
    }
}

/// Splits `text` into (segment, is_match) parts, case-insensitive.
///
/// Matching runs on a lowercased copy; every lowercased byte remembers the
/// byte range of the original char it came from, so segments always fall on
/// char boundaries of `text` even when lowercasing changes lengths.
pub fn split_matches(text: &str, filter: &str) -> Vec<(String, bool)> {
    let filter_lower: String = filter.trim().chars().flat_map(char::to_lowercase).collect();
    if filter_lower.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let mut lowered = String::with_capacity(text.len());
    let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        let range = (i, i + ch.len_utf8());
        for lc in ch.to_lowercase() {
            lowered.push(lc);
            origin.extend(std::iter::repeat(range).take(lc.len_utf8()));
        }
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    let mut search_from = 0;
    while let Some(pos) = lowered[search_from..].find(&filter_lower) {
        let match_start = search_from + pos;
        let match_end = match_start + filter_lower.len();
        search_from = match_end;

        let start = origin[match_start].0;
        let end = origin[match_end - 1].1;
        // the previous match already covers part of this original char
        if start < last_pos {
            continue;
        }
        if start > last_pos {
            parts.push((text[last_pos..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last_pos = end;
    }
    if last_pos < text.len() || parts.is_empty() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    split_matches(text, filter)
        .into_iter()
        .map(|(part, is_match)| {
            if is_match {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Text input that reports its value 300 ms after the last keystroke.
#[component]
pub fn SearchInput(
    /// Applied filter, used to mark the input as active
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Tìm kiếm...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Dropping a pending Timeout cancels it.
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(300, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Xóa">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        rank: u32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "rank" => self.rank.cmp(&other.rank),
                _ => self.name.cmp(other.name),
            }
        }
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut rows = vec![
            Row { name: "b", rank: 2 },
            Row { name: "a", rank: 3 },
            Row { name: "c", rank: 1 },
        ];
        sort_list(&mut rows, "rank", true);
        assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
        sort_list(&mut rows, "name", false);
        assert_eq!(rows.iter().map(|r| r.name).collect::<Vec<_>>(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_toggle_sort() {
        assert_eq!(toggle_sort("name", true, "name"), ("name".to_string(), false));
        assert_eq!(toggle_sort("name", false, "phone"), ("phone".to_string(), true));
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "phone", true), " ⇅");
        assert_eq!(get_sort_class("name", "name"), "sort-icon active");
    }

    #[test]
    fn test_split_matches() {
        assert_eq!(
            split_matches("Quận Ba Đình", "ba"),
            vec![
                ("Quận ".to_string(), false),
                ("Ba".to_string(), true),
                (" Đình".to_string(), false)
            ]
        );
        assert_eq!(split_matches("abc", ""), vec![("abc".to_string(), false)]);
        assert_eq!(split_matches("abc", "x"), vec![("abc".to_string(), false)]);
        assert_eq!(split_matches("", "x"), vec![(String::new(), false)]);
        assert_eq!(
            split_matches("aXa", "a"),
            vec![
                ("a".to_string(), true),
                ("X".to_string(), false),
                ("a".to_string(), true)
            ]
        );
    }

    #[test]
    fn test_split_matches_when_lowercase_changes_lengths() {
        // 'İ' grows and the Kelvin sign shrinks when lowercased
        assert_eq!(
            split_matches("İİ\u{212A}", "k"),
            vec![("İİ".to_string(), false), ("\u{212A}".to_string(), true)]
        );
        assert_eq!(
            split_matches("xİy", "i"),
            vec![
                ("x".to_string(), false),
                ("İ".to_string(), true),
                ("y".to_string(), false)
            ]
        );
        assert_eq!(split_matches("ĐÀ NẴNG", "nẵng")[1], ("NẴNG".to_string(), true));
    }
}
