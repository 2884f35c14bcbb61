//! Keystroke sequences as a browser text field would deliver them.

#![allow(unused_crate_dependencies)]

use cadl_input::{Assistant, BufferState, KeyResult};
use cadl_primitives::{Key, Modifiers, Selection};

fn init_tracing() {
	let _ = tracing_subscriber::fmt::try_init();
}

/// Types `keys` the way a text field would: handled keys are rewritten,
/// unhandled ones fall back to inserting the character itself.
fn type_keys(state: &mut BufferState, keys: &[(&str, Modifiers)]) {
	let assistant = Assistant::default();
	for &(name, modifiers) in keys {
		let key = Key::from_dom(name, modifiers);
		if assistant.apply_key(state, key) {
			continue;
		}
		let insert = match name {
			"Enter" => "\n".to_string(),
			other => other.to_string(),
		};
		let mut text = state.to_string();
		let start = state.selection().start();
		let byte = text.char_indices().nth(start).map_or(text.len(), |(i, _)| i);
		text.insert_str(byte, &insert);
		state.set_text(&text);
		state.set_selection(Selection::point(start + insert.chars().count()));
	}
}

#[test]
fn enter_after_block_opener_indents_blank_line() {
	init_tracing();
	let text = "cat Miso {\n  mood = \"sleepy\";\n}";
	let state = BufferState::new(text, Selection::point(10));

	let result = Assistant::default().handle_key(&state, Key::from_dom("Enter", Modifiers::NONE));
	let KeyResult::Edit(edit) = result else {
		panic!("expected an edit, got {result:?}");
	};

	let mut state = state;
	state.apply(&edit);
	assert_eq!(state.to_string(), "cat Miso {\n  \n  mood = \"sleepy\";\n}");
	assert_eq!(state.selection(), Selection::point(13));
}

#[test]
fn typing_a_block_from_scratch() {
	init_tracing();
	let mut state = BufferState::default();
	let plain = Modifiers::NONE;
	let shift = Modifiers::SHIFT;

	type_keys(&mut state, &[("c", plain), ("a", plain), ("t", plain), (" ", plain), ("{", shift)]);
	assert_eq!(state.to_string(), "cat {}");
	assert_eq!(state.selection(), Selection::point(5));

	type_keys(&mut state, &[("Enter", plain)]);
	assert_eq!(state.to_string(), "cat {\n  }");
	assert_eq!(state.selection(), Selection::point(8));

	type_keys(&mut state, &[("x", plain), ("\"", shift)]);
	assert_eq!(state.to_string(), "cat {\n  x\"\"}");
	assert_eq!(state.selection(), Selection::point(10));
}

#[test]
fn indent_block_then_outdent_it() {
	init_tracing();
	let text = "cat Miso {\nmood = \"sleepy\";\nears = \"pointy\";\n}";
	let mut state = BufferState::new(text, Selection::new(11, 44));
	let assistant = Assistant::default();

	assert!(assistant.apply_key(&mut state, Key::tab()));
	assert_eq!(state.to_string(), "cat Miso {\n  mood = \"sleepy\";\n  ears = \"pointy\";\n}");
	assert_eq!(state.selection(), Selection::new(13, 48));

	assert!(assistant.apply_key(&mut state, Key::tab().with_modifiers(Modifiers::SHIFT)));
	assert_eq!(state.to_string(), text);
	assert_eq!(state.selection(), Selection::new(11, 44));
}

#[test]
fn closing_brace_line_outdents_following_line() {
	init_tracing();
	let mut state = BufferState::with_caret_at_end("cat Miso {\n    ears = 2;\n    }");
	let assistant = Assistant::default();

	assert!(assistant.apply_key(&mut state, Key::enter()));
	assert_eq!(state.to_string(), "cat Miso {\n    ears = 2;\n    }\n  ");
}
