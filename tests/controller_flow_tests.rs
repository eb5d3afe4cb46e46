use glam::Vec2;
use taktikboard_editor::{
    AppCommand, AppController, AppIntent, AppState, ArrowPatch, Gesture, ShapePatch, ShapeTool,
};
use taktikboard_editor::{ArrowKind, GlyphStyle, HeadStyle, Selection, ShapeKind};

#[test]
fn test_save_requested_without_path_opens_save_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("SaveRequested sollte ohne Fehler durchlaufen");

    assert!(
        state.ui.show_save_file_dialog,
        "Ohne bekannten Pfad öffnet Speichern den Speichern-unter-Dialog"
    );

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::SaveFile { path } => assert!(path.is_none()),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_open_and_export_requests_set_dialog_flags() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenFileRequested)
        .expect("OpenFileRequested sollte ohne Fehler durchlaufen");
    assert!(state.ui.show_file_dialog);

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested sollte ohne Fehler durchlaufen");
    assert!(state.ui.show_export_dialog);
}

#[test]
fn test_add_shape_inserts_selects_and_logs() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.shape_count(), 1);
    let shape = &state.board.shapes[0];
    assert_eq!(shape.kind, ShapeKind::Rectangle);
    assert_eq!(shape.pos, Vec2::new(50.0, 50.0));
    assert_eq!(state.selection, Selection::Shape(shape.id));

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::AddShape => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_add_shape_uses_palette_settings() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetShapeToolRequested {
                tool: ShapeTool::Circle,
            },
        )
        .expect("SetShapeToolRequested sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SetPaletteColorRequested {
                color: [200, 30, 30],
            },
        )
        .expect("SetPaletteColorRequested sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SetPaletteTextRequested {
                text: "Station 1".to_string(),
            },
        )
        .expect("SetPaletteTextRequested sollte funktionieren");

    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");

    let shape = &state.board.shapes[0];
    assert_eq!(shape.kind, ShapeKind::Circle);
    assert_eq!(shape.color, [200, 30, 30]);
    assert_eq!(shape.text, "Station 1");
}

#[test]
fn test_add_directional_arrow_glyph_from_palette() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetShapeToolRequested {
                tool: ShapeTool::DirectionalArrow,
            },
        )
        .expect("SetShapeToolRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::SetGlyphCurvedRequested { curved: true })
        .expect("SetGlyphCurvedRequested sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SetGlyphBidirectionalRequested {
                bidirectional: true,
            },
        )
        .expect("SetGlyphBidirectionalRequested sollte funktionieren");

    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");

    assert_eq!(
        state.board.shapes[0].kind,
        ShapeKind::DirectionalArrow {
            style: GlyphStyle::Curved,
            bidirectional: true,
            line_width: 2.0,
        }
    );
}

#[test]
fn test_add_arrow_uses_palette_kind_and_head() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetArrowKindRequested {
                kind: ArrowKind::Bidirectional,
            },
        )
        .expect("SetArrowKindRequested sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SetHeadStyleRequested {
                style: HeadStyle::Diamond,
            },
        )
        .expect("SetHeadStyleRequested sollte funktionieren");

    controller
        .handle_intent(&mut state, AppIntent::AddArrowRequested)
        .expect("AddArrowRequested sollte funktionieren");

    assert_eq!(state.arrow_count(), 1);
    let arrow = &state.board.arrows[0];
    assert_eq!(arrow.kind, ArrowKind::Bidirectional);
    assert_eq!(arrow.head_style, HeadStyle::Diamond);
    assert_eq!(arrow.start, Vec2::new(100.0, 100.0));
    assert_eq!(arrow.end, Vec2::new(200.0, 100.0));
    assert_eq!(state.selection, Selection::Arrow(arrow.id));
}

#[test]
fn test_press_drag_release_moves_shape() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");
    let id = state.board.shapes[0].id;

    // Anfassen bei (80,90) — 30/40 Einheiten vom Form-Ursprung entfernt
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(80.0, 90.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");
    assert!(matches!(state.gesture, Gesture::DraggingShape { .. }));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pos: Vec2::new(300.0, 300.0),
            },
        )
        .expect("PointerDragged sollte funktionieren");
    assert_eq!(
        state.board.shapes[0].pos,
        Vec2::new(270.0, 260.0),
        "Der Grab-Offset bleibt während des Drags erhalten"
    );

    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte funktionieren");
    assert_eq!(state.gesture, Gesture::Idle);
    assert_eq!(state.selection, Selection::Shape(id));
}

#[test]
fn test_pointer_move_without_press_does_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");
    let logged_before = state.command_log.len();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pos: Vec2::new(400.0, 250.0),
            },
        )
        .expect("PointerDragged sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte funktionieren");

    // Ohne aktive Geste erzeugen Zeiger-Events keine Commands
    assert_eq!(state.command_log.len(), logged_before);
    assert_eq!(state.board.shapes[0].pos, Vec2::new(50.0, 50.0));
}

#[test]
fn test_press_on_locked_shape_selects_without_drag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");
    let id = state.board.shapes[0].id;

    controller
        .handle_intent(
            &mut state,
            AppIntent::UpdateShapeRequested {
                id,
                patch: ShapePatch {
                    locked: Some(true),
                    ..ShapePatch::default()
                },
            },
        )
        .expect("UpdateShapeRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::ClearSelectionRequested)
        .expect("ClearSelectionRequested sollte funktionieren");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(100.0, 100.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");

    assert_eq!(state.selection, Selection::Shape(id));
    assert_eq!(state.gesture, Gesture::Idle, "Gesperrte Form startet keine Geste");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pos: Vec2::new(300.0, 300.0),
            },
        )
        .expect("PointerDragged sollte funktionieren");
    assert_eq!(state.board.shapes[0].pos, Vec2::new(50.0, 50.0));
}

#[test]
fn test_delete_selected_removes_element_and_clears_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");
    let id = state.board.shapes[0].id;

    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedRequested)
        .expect("DeleteSelectedRequested sollte funktionieren");

    assert_eq!(state.shape_count(), 0);
    assert!(state.selection.is_none());

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::DeleteElement { id: deleted } => assert_eq!(*deleted, id),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_delete_without_selection_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::ClearSelectionRequested)
        .expect("ClearSelectionRequested sollte funktionieren");
    let logged_before = state.command_log.len();

    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedRequested)
        .expect("DeleteSelectedRequested sollte robust sein");

    assert_eq!(state.shape_count(), 1, "Ohne Selektion wird nichts gelöscht");
    assert_eq!(state.command_log.len(), logged_before);
}

#[test]
fn test_undo_reverts_added_shape() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");
    assert!(state.can_undo());

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("UndoRequested sollte funktionieren");

    assert_eq!(state.shape_count(), 0);
    assert!(!state.can_undo(), "Nur der Seed-Zustand bleibt übrig");
}

#[test]
fn test_undo_steps_through_drag_moves() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(60.0, 60.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pos: Vec2::new(200.0, 200.0),
            },
        )
        .expect("PointerDragged sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pos: Vec2::new(220.0, 220.0),
            },
        )
        .expect("PointerDragged sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte funktionieren");

    assert_eq!(state.board.shapes[0].pos, Vec2::new(210.0, 210.0));

    // Jede committete Bewegung ist ein eigener Undo-Schritt
    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("UndoRequested sollte funktionieren");
    assert_eq!(state.board.shapes[0].pos, Vec2::new(190.0, 190.0));

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("UndoRequested sollte funktionieren");
    assert_eq!(state.board.shapes[0].pos, Vec2::new(50.0, 50.0));
}

#[test]
fn test_clear_board_is_undoable() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::AddArrowRequested)
        .expect("AddArrowRequested sollte funktionieren");

    controller
        .handle_intent(&mut state, AppIntent::ClearBoardRequested)
        .expect("ClearBoardRequested sollte funktionieren");

    assert_eq!(state.shape_count(), 0);
    assert_eq!(state.arrow_count(), 0);
    assert!(state.selection.is_none());

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("UndoRequested sollte funktionieren");

    assert_eq!(state.shape_count(), 1);
    assert_eq!(state.arrow_count(), 1);
}

#[test]
fn test_group_and_ungroup_element() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");
    let id = state.board.shapes[0].id;

    controller
        .handle_intent(&mut state, AppIntent::GroupElementRequested { id })
        .expect("GroupElementRequested sollte funktionieren");

    assert_eq!(state.board.groups.len(), 1);
    assert_eq!(state.board.groups[0].name, "Gruppe 1");
    assert_eq!(
        state.board.shapes[0].group_id,
        Some(state.board.groups[0].id)
    );

    controller
        .handle_intent(&mut state, AppIntent::UngroupElementRequested { id })
        .expect("UngroupElementRequested sollte funktionieren");

    assert!(state.board.groups.is_empty(), "Leere Gruppen verschwinden");
    assert_eq!(state.board.shapes[0].group_id, None);
}

#[test]
fn test_arrow_kind_change_injects_control_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::AddArrowRequested)
        .expect("AddArrowRequested sollte funktionieren");
    let id = state.board.arrows[0].id;

    controller
        .handle_intent(
            &mut state,
            AppIntent::UpdateArrowRequested {
                id,
                patch: ArrowPatch {
                    kind: Some(ArrowKind::Curved),
                    ..ArrowPatch::default()
                },
            },
        )
        .expect("UpdateArrowRequested sollte funktionieren");

    let arrow = &state.board.arrows[0];
    assert_eq!(arrow.kind, ArrowKind::Curved);
    assert!(arrow.curved);
    assert_eq!(
        arrow.control,
        Some(Vec2::new(150.0, 75.0)),
        "Kontrollpunkt 25 Einheiten über der Streckenmitte"
    );
}

#[test]
fn test_save_as_and_load_roundtrip() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir().join(format!("taktikboard_flow_{}.json", std::process::id()));
    let path_str = path.to_string_lossy().into_owned();

    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::AddArrowRequested)
        .expect("AddArrowRequested sollte funktionieren");

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFilePathSelected {
                path: path_str.clone(),
            },
        )
        .expect("Speichern unter sollte funktionieren");
    assert_eq!(state.ui.current_file_path.as_deref(), Some(path_str.as_str()));

    controller
        .handle_intent(&mut state, AppIntent::ClearBoardRequested)
        .expect("ClearBoardRequested sollte funktionieren");
    assert_eq!(state.shape_count(), 0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::FileSelected {
                path: path_str.clone(),
            },
        )
        .expect("Laden sollte funktionieren");

    assert_eq!(state.shape_count(), 1);
    assert_eq!(state.arrow_count(), 1);
    assert!(state.selection.is_none(), "Laden setzt die Selektion zurück");
    assert!(!state.can_undo(), "Die History beginnt nach dem Laden neu");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_export_png_writes_file_and_sets_status() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir().join(format!("taktikboard_flow_{}.png", std::process::id()));
    let path_str = path.to_string_lossy().into_owned();

    controller
        .handle_intent(&mut state, AppIntent::AddShapeRequested)
        .expect("AddShapeRequested sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected {
                path: path_str.clone(),
            },
        )
        .expect("PNG-Export sollte funktionieren");

    let bytes = std::fs::read(&path).expect("Export-Datei sollte existieren");
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "PNG-Signatur erwartet"
    );
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|msg| msg.contains("Exportiert")));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_options_dialog_open_and_close() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .expect("OpenOptionsDialogRequested sollte funktionieren");
    assert!(state.show_options_dialog);

    controller
        .handle_intent(&mut state, AppIntent::CloseOptionsDialogRequested)
        .expect("CloseOptionsDialogRequested sollte funktionieren");
    assert!(!state.show_options_dialog);
}
