//! Selection-level commands: select, delete, lock, edit, z-order, semantic
//! tags, and escape back to idle.

use super::{Interaction, Reaction, Sources};
use crate::action::Action;
use crate::document::{DocumentState, Mode, SelectionMode};
use crate::field::coerce_field;
use crate::input::{InputEvent, KeyEvent};
use crate::intent::UiIntent;

/// Translates UI intents and keyboard shortcuts into selection actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelInteraction;

impl SelInteraction {
    fn on_intent(&self, intent: &UiIntent, sources: &Sources<'_>) -> Reaction {
        let state = sources.state;
        let mut reaction = Reaction::default();
        match intent {
            UiIntent::ChangeSel { item_ids } => {
                if !state.selection.same_set(item_ids) {
                    reaction.push(Action::ChangeSelection {
                        item_ids: item_ids.clone(),
                    });
                }
            }
            UiIntent::Delete => reaction.push(delete_selection(state)),
            UiIntent::DeleteItems { item_ids } => reaction.push(Action::DeleteItems {
                item_ids: item_ids.clone(),
            }),
            UiIntent::ToggleLock => {
                if !state.selection.is_empty() {
                    reaction.push(Action::ToggleLock);
                }
            }
            UiIntent::Edit { field, value } => reaction.push(Action::EditItem {
                field: field.clone(),
                value: coerce_field(field, value),
            }),
            UiIntent::ChangeZIndex { op } => reaction.push(Action::ChangeZIndex { op: *op }),
            UiIntent::ToggleSemanticTag { tag_name } => {
                if !state.selection.is_empty() {
                    let tag = sources.config.find_tag(tag_name).cloned();
                    if tag.is_none() {
                        log::debug!("Semantic tag {:?} is not registered", tag_name);
                    }
                    reaction.push(Action::ToggleSemanticTag { tag });
                }
            }
        }
        reaction
    }

    fn on_key(&self, key: &KeyEvent, sources: &Sources<'_>) -> Reaction {
        let state = sources.state;
        let keys = &sources.config.keys;
        let mut reaction = Reaction::default();

        if key.is_shortcut(&keys.delete) && keyboard_delete_allowed(state) {
            reaction.push(delete_selection(state));
        }
        if key.is_shortcut(&keys.toggle_lock) && !state.selection.is_empty() {
            reaction.push(Action::ToggleLock);
        }
        if key.is_shortcut(&keys.to_idle) {
            reaction.next_mode = Some(Mode::Idle);
            reaction.next_adjust_configs = Some(Vec::new());
        }
        reaction
    }
}

/// Keyboard delete needs a selection, and either a plain bbox selection or
/// a single locked item.
fn keyboard_delete_allowed(state: &DocumentState) -> bool {
    !state.selection.is_empty()
        && (state.sel_mode == SelectionMode::Bbox
            || state.single_selected().is_some_and(|item| item.locked))
}

fn delete_selection(state: &DocumentState) -> Action {
    Action::DeleteItems {
        item_ids: state.selection.to_vec(),
    }
}

impl Interaction for SelInteraction {
    fn name(&self) -> &'static str {
        "sel-interaction"
    }

    fn on_event(&self, event: &InputEvent, sources: &Sources<'_>) -> Reaction {
        match event {
            InputEvent::Intent(intent) => self.on_intent(intent, sources),
            InputEvent::Key(key) => self.on_key(key, sources),
            InputEvent::Pointer(_) => Reaction::default(),
        }
    }
}
