//! Reducer for the search dialog.

use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::{DialogFocus, SearchDialogState, SearchForm, SearchPhase};

/// Reducer for search dialog state transitions.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchDialogState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (_, SearchIntent::Open { language, page_size }) => {
                SearchDialogState::Visible(SearchForm::new(language, page_size))
            }

            (_, SearchIntent::Close) => SearchDialogState::Hidden,

            (SearchDialogState::Visible(form), intent) => {
                SearchDialogState::Visible(reduce_form(form, intent))
            }

            (SearchDialogState::Hidden, _) => SearchDialogState::Hidden,
        }
    }
}

fn reduce_form(mut form: SearchForm, intent: SearchIntent) -> SearchForm {
    match intent {
        SearchIntent::InsertChar(ch) => {
            form.input.push(ch);
            form.focus = DialogFocus::Query;
        }

        SearchIntent::Backspace => {
            form.input.pop();
        }

        SearchIntent::ToggleFocus => {
            form.focus = match form.focus {
                DialogFocus::Query if !form.session.page_items().is_empty() => {
                    DialogFocus::Results
                }
                _ => DialogFocus::Query,
            };
        }

        SearchIntent::SetLanguage { code } => {
            form.session.set_language(code);
        }

        SearchIntent::Submitted { request_id, query } => {
            // One request at a time: a second submit keeps the pending one.
            if !form.is_searching() {
                form.phase = SearchPhase::Searching {
                    request_id,
                    query,
                    animation_tick: 0,
                };
            }
        }

        SearchIntent::Completed {
            request_id,
            results,
        } => {
            if let Some(query) = take_pending_query(&mut form, request_id) {
                form.session.replace_results(query, results);
                form.selected = 0;
                form.focus = if form.session.results().is_empty() {
                    DialogFocus::Query
                } else {
                    DialogFocus::Results
                };
            }
        }

        SearchIntent::Failed { request_id } => {
            if let Some(query) = take_pending_query(&mut form, request_id) {
                form.session.clear_results(query);
                form.selected = 0;
                form.focus = DialogFocus::Query;
            }
        }

        SearchIntent::NextPage => {
            if form.session.next_page() {
                form.selected = 0;
            }
        }

        SearchIntent::PreviousPage => {
            if form.session.previous_page() {
                form.selected = 0;
            }
        }

        SearchIntent::MoveSelection { delta } => {
            let count = form.session.page_items().len();
            if count > 0 {
                let target = form.selected as isize + delta;
                form.selected = target.clamp(0, count as isize - 1) as usize;
            }
        }

        SearchIntent::AnimationTick => {
            if let SearchPhase::Searching { animation_tick, .. } = &mut form.phase {
                *animation_tick = animation_tick.wrapping_add(1);
            }
        }

        SearchIntent::Open { .. } | SearchIntent::Close => {}
    }
    form
}

/// Leave `Searching` if `request_id` is the pending request, returning its query.
fn take_pending_query(form: &mut SearchForm, request_id: u64) -> Option<String> {
    match &form.phase {
        SearchPhase::Searching {
            request_id: pending,
            ..
        } if *pending == request_id => {}
        _ => return None,
    }
    match std::mem::take(&mut form.phase) {
        SearchPhase::Searching { query, .. } => Some(query),
        SearchPhase::Idle => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PictogramRecord;

    fn open() -> SearchDialogState {
        SearchReducer::reduce(
            SearchDialogState::Hidden,
            SearchIntent::Open {
                language: "fr".into(),
                page_size: 20,
            },
        )
    }

    fn records(n: usize) -> Vec<PictogramRecord> {
        (1..=n)
            .map(|i| PictogramRecord::new(i.to_string(), Vec::new()))
            .collect()
    }

    fn form(state: &SearchDialogState) -> &SearchForm {
        state.form().expect("dialog should be visible")
    }

    #[test]
    fn submit_enters_searching() {
        let state = SearchReducer::reduce(
            open(),
            SearchIntent::Submitted {
                request_id: 1,
                query: "chat".into(),
            },
        );
        assert_eq!(state.pending_request(), Some(1));
    }

    #[test]
    fn second_submit_keeps_pending_request() {
        let state = SearchReducer::reduce(
            open(),
            SearchIntent::Submitted {
                request_id: 1,
                query: "chat".into(),
            },
        );
        let state = SearchReducer::reduce(
            state,
            SearchIntent::Submitted {
                request_id: 2,
                query: "chien".into(),
            },
        );
        assert_eq!(state.pending_request(), Some(1));
    }

    #[test]
    fn stale_completion_is_ignored() {
        let state = SearchReducer::reduce(
            open(),
            SearchIntent::Submitted {
                request_id: 3,
                query: "chat".into(),
            },
        );
        let state = SearchReducer::reduce(
            state,
            SearchIntent::Completed {
                request_id: 2,
                results: records(5),
            },
        );
        assert!(state.is_searching());
        assert!(form(&state).session.results().is_empty());
    }

    #[test]
    fn animation_tick_increments() {
        let state = SearchReducer::reduce(
            open(),
            SearchIntent::Submitted {
                request_id: 1,
                query: "chat".into(),
            },
        );
        let state = SearchReducer::reduce(state, SearchIntent::AnimationTick);
        assert!(matches!(
            form(&state).phase,
            SearchPhase::Searching {
                animation_tick: 1,
                ..
            }
        ));
    }

    #[test]
    fn selection_is_clamped_to_page() {
        let state = SearchReducer::reduce(
            open(),
            SearchIntent::Submitted {
                request_id: 1,
                query: "chat".into(),
            },
        );
        let state = SearchReducer::reduce(
            state,
            SearchIntent::Completed {
                request_id: 1,
                results: records(3),
            },
        );
        let state = SearchReducer::reduce(state, SearchIntent::MoveSelection { delta: 10 });
        assert_eq!(form(&state).selected, 2);
        let state = SearchReducer::reduce(state, SearchIntent::MoveSelection { delta: -10 });
        assert_eq!(form(&state).selected, 0);
    }

    #[test]
    fn toggle_focus_needs_results() {
        let state = SearchReducer::reduce(open(), SearchIntent::ToggleFocus);
        assert_eq!(form(&state).focus, DialogFocus::Query);
    }

    #[test]
    fn intents_on_hidden_are_noop() {
        let state = SearchReducer::reduce(SearchDialogState::Hidden, SearchIntent::NextPage);
        assert_eq!(state, SearchDialogState::Hidden);
        let state = SearchReducer::reduce(state, SearchIntent::InsertChar('a'));
        assert_eq!(state, SearchDialogState::Hidden);
    }
}
