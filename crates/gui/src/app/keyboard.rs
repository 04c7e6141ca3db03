//! Keyboard shortcut handling

use eframe::egui;

use super::{AppEditor, AppStorage};

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, editor: &mut AppEditor, storage: &mut AppStorage) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Ctrl+Z: undo
        if i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift {
            editor.undo();
        }
        // Ctrl+Shift+Z or Ctrl+Y: redo
        if (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
            || (i.modifiers.command && i.key_pressed(egui::Key::Y))
        {
            editor.redo();
        }
        // Ctrl+S: save
        if i.modifiers.command && i.key_pressed(egui::Key::S) {
            editor.save(storage);
        }
        // Escape: close dialogs, then deselect
        if i.key_pressed(egui::Key::Escape) {
            handle_escape(editor);
        }
        // Delete: remove selected element
        if i.key_pressed(egui::Key::Delete) {
            editor.delete_selected();
        }
    });
}

fn handle_escape(editor: &mut AppEditor) {
    if editor.cancel_drag() {
        return;
    }
    let state = &mut editor.state;
    if state.pending_confirm.is_some() {
        state.pending_confirm = None;
    } else if state.save_dialog.open {
        state.save_dialog.open = false;
    } else if state.share_link.is_some() {
        state.share_link = None;
    } else {
        state.selection.clear();
    }
}
