#[cfg(test)]
mod property_tests {
    use crate::core::state::TextBuffer;
    use crate::layout::{
        contains_hebrew, font_size_for_word_count, line_count, split_lines, DirectionState,
        FontScale, TextDirection,
    };
    use crate::systems::{apply_command, EditCommand};
    use proptest::prelude::*;

    fn scale() -> FontScale {
        FontScale {
            initial_font_size: 64.0,
            min_font_size: 20.0,
            shrink_start_words: 8,
            shrink_end_words: 120,
        }
    }

    fn edit_command() -> impl Strategy<Value = EditCommand> {
        prop_oneof![
            "[a-z שלוםאב]{1,4}".prop_map(EditCommand::Insert),
            Just(EditCommand::Backspace),
            Just(EditCommand::Delete),
            Just(EditCommand::Left),
            Just(EditCommand::Right),
            Just(EditCommand::Up),
            Just(EditCommand::Down),
            Just(EditCommand::Home),
            Just(EditCommand::End),
            Just(EditCommand::Clear),
        ]
    }

    proptest! {
        #[test]
        fn split_lines_partitions_text(text in "[a-zA-Z0-9 שלום]{0,200}", width in 1usize..40) {
            let lines = split_lines(&text, width);
            let len = text.chars().count();

            prop_assert_eq!(lines.len(), len.div_ceil(width));
            prop_assert_eq!(lines.len(), line_count(len, width));
            for line in &lines {
                prop_assert!(line.chars().count() <= width);
            }
            prop_assert_eq!(lines.concat(), text);
        }

        #[test]
        fn caret_stays_within_buffer(
            commands in proptest::collection::vec(edit_command(), 0..60),
            width in 1usize..20,
        ) {
            let mut buffer = TextBuffer::with_max_chars(50);
            let mut direction = DirectionState::default();
            for command in &commands {
                apply_command(&mut buffer, command, width, direction.direction());
                direction.update(&buffer.text());
                prop_assert!(buffer.caret() <= buffer.len());
                prop_assert!(buffer.len() <= 50);
            }
        }

        #[test]
        fn font_size_never_grows_with_words(a in 0usize..500, b in 0usize..500) {
            let (fewer, more) = if a <= b { (a, b) } else { (b, a) };
            let scale = scale();
            let small = font_size_for_word_count(more, &scale);
            let large = font_size_for_word_count(fewer, &scale);

            prop_assert!(small <= large);
            prop_assert!(small >= scale.min_font_size && small <= scale.initial_font_size);
            prop_assert!(large >= scale.min_font_size && large <= scale.initial_font_size);
        }

        #[test]
        fn rtl_flag_tracks_hebrew_presence(
            commands in proptest::collection::vec(edit_command(), 0..60),
        ) {
            let mut buffer = TextBuffer::default();
            let mut direction = DirectionState::default();
            for command in &commands {
                let had_hebrew = contains_hebrew(&buffer.text());
                apply_command(&mut buffer, command, 8, direction.direction());
                let has_hebrew = contains_hebrew(&buffer.text());

                let toggled = direction.update(&buffer.text());
                prop_assert_eq!(toggled, had_hebrew != has_hebrew);
                prop_assert_eq!(direction.direction() == TextDirection::RightToLeft, has_hebrew);
            }
        }
    }
}

#[cfg(test)]
mod pipeline_tests {
    use crate::core::app::initial_editor_state;
    use crate::core::config::WidgetSettings;
    use crate::core::state::{EditorState, LayoutInputs, LayoutState};
    use crate::layout::{GlyphMetrics, GridPosition, TextDirection};
    use crate::rendering::text_cursor::position_caret;
    use crate::rendering::text_display::{
        apply_text_direction, text_layout_for, update_text_display,
    };
    use crate::rendering::{Placeholder, TextCaret, TextContainer, TextDisplay};
    use crate::systems::layout_systems::{recompute_layout, track_container_size};
    use crate::systems::DirectionChanged;
    use bevy::prelude::*;
    use bevy::window::{PrimaryWindow, WindowResized};

    fn settings() -> WidgetSettings {
        WidgetSettings {
            initial_font_size: 20.0,
            min_font_size: 10.0,
            container_margin: 50.0,
            min_chars_per_line: 1,
            min_lines: 1,
            ..default()
        }
    }

    /// Headless app running the measurement, layout and node update systems
    fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<WindowResized>()
            .add_event::<DirectionChanged>()
            .insert_resource(settings())
            .insert_resource(EditorState::new(&settings()))
            .init_resource::<LayoutInputs>()
            .init_resource::<LayoutState>()
            .add_systems(
                Update,
                (
                    track_container_size,
                    recompute_layout,
                    (apply_text_direction, update_text_display, position_caret),
                )
                    .chain(),
            );
        app.world_mut().spawn((
            Window {
                resolution: (300.0, 200.0).into(),
                ..default()
            },
            PrimaryWindow,
        ));
        app.world_mut().resource_mut::<LayoutInputs>().glyph = Some(GlyphMetrics {
            width_per_px: 0.5,
            height_per_px: 1.0,
        });
        app
    }

    /// The widget's node tree, without the camera and fonts
    fn spawn_widget_nodes(app: &mut App) {
        let text_layout = text_layout_for(TextDirection::LeftToRight);
        app.world_mut()
            .spawn((Node::default(), TextContainer))
            .with_children(|parent| {
                parent.spawn((Node::default(), Text::new(""), text_layout, TextDisplay));
                parent.spawn((
                    Node::default(),
                    Text::new("Start typing"),
                    text_layout,
                    Visibility::Inherited,
                    Placeholder,
                ));
                parent.spawn((Node::default(), Visibility::Inherited, TextCaret));
            });
    }

    fn insert_text(app: &mut App, text: &str) {
        let mut editor = app.world_mut().resource_mut::<EditorState>();
        editor.buffer.insert_str(text);
        editor.refresh_direction();
    }

    fn single_component<C: Component + Clone, F: bevy::ecs::query::QueryFilter>(
        app: &mut App,
    ) -> C {
        let mut query = app.world_mut().query_filtered::<&C, F>();
        query
            .single(app.world())
            .expect("exactly one matching node")
            .clone()
    }

    #[test]
    fn container_follows_window_minus_margins() {
        let mut app = headless_app();
        app.update();

        let inputs = *app.world().resource::<LayoutInputs>();
        assert_eq!(inputs.container, Vec2::new(200.0, 100.0));

        let layout = app.world().resource::<LayoutState>();
        let metrics = layout.metrics.expect("layout after first frame");
        assert_eq!(metrics.chars_per_line, 20);
        assert_eq!(metrics.max_lines, 5);
    }

    #[test]
    fn edits_are_laid_out_on_next_frame() {
        let mut app = headless_app();
        app.update();

        app.world_mut()
            .resource_mut::<EditorState>()
            .buffer
            .insert_str(&"a".repeat(25));
        app.update();

        let layout = app.world().resource::<LayoutState>();
        assert_eq!(
            layout.display_text,
            format!("{}\n{}", "a".repeat(20), "a".repeat(5))
        );
        assert_eq!(
            layout.caret.map(|c| c.grid),
            Some(GridPosition { line: 1, column: 5 })
        );
    }

    #[test]
    fn resize_regrids_existing_text() {
        let mut app = headless_app();
        app.world_mut()
            .resource_mut::<EditorState>()
            .buffer
            .insert_str(&"a".repeat(25));
        app.update();

        let mut windows = app
            .world_mut()
            .query_filtered::<(Entity, &mut Window), With<PrimaryWindow>>();
        let (window_entity, mut window) = windows.single_mut(app.world_mut()).unwrap();
        window.resolution.set(200.0, 200.0);
        app.world_mut().send_event(WindowResized {
            window: window_entity,
            width: 200.0,
            height: 200.0,
        });
        app.update();

        let layout = app.world().resource::<LayoutState>();
        assert_eq!(layout.chars_per_line(), 10);
        assert_eq!(
            layout.caret.map(|c| c.grid),
            Some(GridPosition { line: 2, column: 5 })
        );
    }

    #[test]
    fn initial_hebrew_text_starts_rtl() {
        let editor = initial_editor_state(&settings(), Some("שלום"));
        assert_eq!(editor.text_direction(), TextDirection::RightToLeft);
        assert_eq!(editor.buffer.caret(), 4);

        let empty = initial_editor_state(&settings(), None);
        assert_eq!(empty.text_direction(), TextDirection::LeftToRight);
        assert_eq!(empty.buffer.max_chars(), Some(settings().max_chars));
    }

    #[test]
    fn rtl_caret_node_sits_left_of_the_mirrored_offset() {
        let mut app = headless_app();
        spawn_widget_nodes(&mut app);
        app.update();

        insert_text(&mut app, "שלו");
        app.update();

        // 200px container, 10px cells: three cells in from the right edge
        let caret = single_component::<Node, With<TextCaret>>(&mut app);
        let caret_width = settings().caret_width;
        assert_eq!(caret.left, Val::Px(200.0 - 3.0 * 10.0 - caret_width));
        assert_eq!(caret.top, Val::Px(0.0));
        assert_eq!(caret.height, Val::Px(20.0));

        let container = single_component::<Node, With<TextContainer>>(&mut app);
        assert_eq!(container.width, Val::Px(200.0));
        assert_eq!(container.height, Val::Px(100.0));
    }

    #[test]
    fn direction_change_right_justifies_text() {
        let mut app = headless_app();
        spawn_widget_nodes(&mut app);
        app.update();

        app.world_mut().send_event(DirectionChanged(TextDirection::RightToLeft));
        app.update();

        let display = single_component::<TextLayout, With<TextDisplay>>(&mut app);
        let placeholder = single_component::<TextLayout, With<Placeholder>>(&mut app);
        assert_eq!(display.justify, JustifyText::Right);
        assert_eq!(placeholder.justify, JustifyText::Right);
        assert_eq!(display.linebreak, text_layout_for(TextDirection::RightToLeft).linebreak);
    }

    #[test]
    fn placeholder_hides_once_text_is_typed() {
        let mut app = headless_app();
        spawn_widget_nodes(&mut app);
        app.update();
        assert_eq!(
            single_component::<Visibility, With<Placeholder>>(&mut app),
            Visibility::Inherited
        );

        insert_text(&mut app, "hi");
        app.update();

        assert_eq!(
            single_component::<Visibility, With<Placeholder>>(&mut app),
            Visibility::Hidden
        );
        let text = single_component::<Text, With<TextDisplay>>(&mut app);
        assert_eq!(text.0, "hi");
    }
}
