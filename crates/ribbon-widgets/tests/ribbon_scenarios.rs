#![forbid(unsafe_code)]

//! End-to-end ribbon scenarios: categories, context visibility, descriptors,
//! and theming driven through the public API only.

use ribbon_core::{EntityKind, RibbonError};
use ribbon_layout::{FillMode, SizeClass};
use ribbon_style::{IconRole, Rgb, ThemeRegistry};
use ribbon_widgets::{
    CategoryStyle, Control, ControlKind, MenuBarCompat, PlacementRequest, RibbonBar,
    RibbonConfig, RibbonDescriptor,
};

fn tabs(ribbon: &RibbonBar) -> Vec<String> {
    ribbon
        .tab_bar()
        .tab_titles()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[test]
fn duplicate_home_keeps_single_tab() {
    let mut ribbon = RibbonBar::new();
    ribbon.add_category("Home", CategoryStyle::Normal, None).unwrap();
    let err = ribbon
        .add_category("Home", CategoryStyle::Normal, None)
        .unwrap_err();
    assert!(matches!(
        err,
        RibbonError::DuplicateKey {
            kind: EntityKind::Category,
            ..
        }
    ));
    assert_eq!(tabs(&ribbon), vec!["Home"]);
    assert_eq!(ribbon.current_category().unwrap().title(), "Home");
}

#[test]
fn error_context_lifecycle() {
    let mut ribbon = RibbonBar::new();
    ribbon.add_normal_category("Home").unwrap();
    ribbon
        .add_category("Error", CategoryStyle::Context, Some(Rgb::RED))
        .unwrap()
        .add_panel("Details", false)
        .unwrap()
        .add(Control::label("Something failed"))
        .unwrap();

    assert_eq!(tabs(&ribbon), vec!["Home"]);
    assert!(!ribbon.category_visible("Error").unwrap());

    ribbon.show_context("Error").unwrap();
    assert_eq!(tabs(&ribbon), vec!["Home", "Error"]);
    assert_eq!(ribbon.current_category().unwrap().title(), "Error");
    assert_eq!(
        ribbon.selected_tab_style(),
        "RibbonTabBar::tab:selected {color: #ff0000;}"
    );

    ribbon.hide_context("Error").unwrap();
    assert_eq!(tabs(&ribbon), vec!["Home"]);
    assert!(ribbon.current_category().is_none());

    let error = ribbon.category("Error").unwrap();
    let panel = error.panel("Details").unwrap();
    assert_eq!(panel.len(), 1);
    assert_eq!(
        panel.control(0).unwrap().control().label_text(),
        Some("Something failed")
    );

    ribbon.select_tab(0).unwrap();
    assert_eq!(ribbon.current_category().unwrap().title(), "Home");
}

#[test]
fn context_group_show_hide() {
    let mut ribbon = RibbonBar::new();
    ribbon.add_normal_category("Home").unwrap();
    ribbon.add_normal_category("Insert").unwrap();
    ribbon
        .add_context_group("Picture Tools", &["Format", "Crop"], Some(Rgb::new(0, 120, 215)))
        .unwrap();

    ribbon.show_context_group("Picture Tools").unwrap();
    assert_eq!(tabs(&ribbon), vec!["Home", "Insert", "Format", "Crop"]);
    assert_eq!(ribbon.current_category().unwrap().title(), "Format");
    let crop = ribbon.tab_bar().tab(3).unwrap();
    assert_eq!(crop.group(), Some("Picture Tools"));
    assert_eq!(crop.color(), Some(Rgb::new(0, 120, 215)));

    ribbon.set_current_category("Crop").unwrap();
    ribbon.hide_context_group("Picture Tools").unwrap();
    assert_eq!(tabs(&ribbon), vec!["Home", "Insert"]);
    assert!(ribbon.current_category().is_none());
    assert!(!ribbon.context_group_visible("Picture Tools").unwrap());
}

#[test]
fn manual_panel_building() {
    let mut ribbon = RibbonBar::with_config(RibbonConfig::default().with_max_rows(6));
    let panel = ribbon
        .add_normal_category("Home")
        .unwrap()
        .add_panel("Font", true)
        .unwrap();

    let bold = panel
        .add_small_control(Control::toggle_button("Bold"))
        .unwrap();
    let italic = panel
        .add_small_control(Control::toggle_button("Italic"))
        .unwrap();
    let size = panel
        .add_control(
            Control::combo_box(["8", "10", "12"]),
            PlacementRequest::new()
                .row_span(SizeClass::Small)
                .col_span(2)
                .mode(FillMode::RowWise),
        )
        .unwrap();

    assert_eq!((panel.control(bold).unwrap().row(), panel.control(bold).unwrap().col()), (0, 0));
    assert_eq!((panel.control(italic).unwrap().row(), panel.control(italic).unwrap().col()), (2, 0));
    let size = panel.control(size).unwrap();
    // Row 0 has no free suffix, so the grid grows by two fresh columns.
    assert_eq!((size.row(), size.col(), size.col_span()), (0, 1, 2));
    assert_eq!(panel.grid().cols(), 3);

    let err = panel
        .add_control(Control::label("x"), PlacementRequest::new().row_span(7usize))
        .unwrap_err();
    assert!(matches!(err, RibbonError::InvalidSpan { row_span: 7, .. }));
    assert_eq!(panel.len(), 3);
}

const DESCRIPTOR: &str = r##"{
    "Home": {
        "panels": {
            "Clipboard": {
                "widgets": {
                    "paste": {"type": "LargeButton", "args": ["Paste", "icons/paste.png"]},
                    "cut": {"type": "SmallButton", "kwargs": {"text": "Cut", "shortcut": "Ctrl+X"}},
                    "copy": {"type": "SmallButton", "args": ["Copy"]}
                }
            },
            "Styles": {
                "show_option_button": false,
                "widgets": {
                    "gallery": {"type": "Gallery"}
                }
            }
        }
    },
    "Error": {
        "style": "Context",
        "color": "#e40045",
        "panels": {}
    }
}"##;

#[test]
fn descriptor_builds_whole_ribbon() {
    let desc = RibbonDescriptor::from_json(DESCRIPTOR).unwrap();
    let mut ribbon = RibbonBar::new();
    let titles = ribbon.add_categories_by(&desc).unwrap();
    assert_eq!(titles, vec!["Home", "Error"]);
    assert_eq!(tabs(&ribbon), vec!["Home"]);

    let home = ribbon.category("Home").unwrap();
    let panel_titles: Vec<_> = home.panels().iter().map(|p| p.title()).collect();
    assert_eq!(panel_titles, vec!["Clipboard", "Styles"]);

    let clipboard = home.panel("Clipboard").unwrap();
    assert!(clipboard.shows_option_button());
    let paste = clipboard.find_control("paste").unwrap();
    assert_eq!(paste.control().kind(), ControlKind::Button);
    assert_eq!(paste.control().icon_key(), Some("icons/paste.png"));
    assert_eq!(paste.row_span(), 6);
    assert!(paste.icon_size().is_some());

    let cut = clipboard.find_control("cut").unwrap();
    assert_eq!((cut.row(), cut.col(), cut.row_span()), (0, 1, 2));
    assert_eq!(cut.control().shortcut_keys(), Some("Ctrl+X"));
    let copy = clipboard.find_control("copy").unwrap();
    assert_eq!((copy.row(), copy.col()), (2, 1));

    let styles = home.panel("Styles").unwrap();
    assert!(!styles.shows_option_button());
    let gallery = styles.find_control("gallery").unwrap();
    assert_eq!(gallery.fixed_height(), Some(f32::from(gallery.max_height())));

    let error = ribbon.category("Error").unwrap();
    assert_eq!(error.style(), CategoryStyle::Context);
    assert_eq!(error.color(), Some(Rgb::new(0xe4, 0x00, 0x45)));
}

#[test]
fn descriptor_value_keeps_written_order() {
    let value = serde_json::json!({
        "Home": {
            "panels": {
                "Styles": {
                    "widgets": {
                        "zoom": {"type": "SmallButton", "kwargs": {"text": "Zoom", "shortcut": "Ctrl+Z"}},
                        "apply": {"type": "SmallButton", "args": ["Apply"]}
                    }
                },
                "Clipboard": {}
            }
        },
        "Error": {"style": "Context"},
        "Insert": {}
    });
    let desc = RibbonDescriptor::from_value(value).unwrap();
    let mut ribbon = RibbonBar::new();
    let titles = ribbon.add_categories_by(&desc).unwrap();
    assert_eq!(titles, vec!["Home", "Error", "Insert"]);
    assert_eq!(tabs(&ribbon), vec!["Home", "Insert"]);
    assert_eq!(ribbon.current_category().unwrap().title(), "Home");

    let home = ribbon.category("Home").unwrap();
    let panel_titles: Vec<_> = home.panels().iter().map(|p| p.title()).collect();
    assert_eq!(panel_titles, vec!["Styles", "Clipboard"]);
    let styles = home.panel("Styles").unwrap();
    let names: Vec<_> = styles
        .controls()
        .iter()
        .map(|c| c.control().object_name())
        .collect();
    assert_eq!(names, vec![Some("zoom"), Some("apply")]);
    let zoom = styles.find_control("zoom").unwrap();
    assert_eq!((zoom.row(), zoom.col()), (0, 0));
    assert_eq!(zoom.control().shortcut_keys(), Some("Ctrl+Z"));
}

#[test]
fn bad_descriptor_leaves_ribbon_untouched() {
    let mut ribbon = RibbonBar::new();
    ribbon.add_normal_category("View").unwrap();
    let assigned = ribbon.palette().assigned();

    for text in [
        // unknown control type in the last category
        r#"{"A": {}, "B": {"panels": {"P": {"widgets": {"w": {"type": "Spaceship"}}}}}}"#,
        // span larger than the grid
        r#"{"A": {"panels": {"P": {"widgets": {"w": {"type": "Label", "kwargs": {"row_span": 9}}}}}}}"#,
        // column span wider than any grid may grow in one request
        r#"{"A": {"panels": {"P": {"widgets": {"w": {"type": "Label", "kwargs": {"col_span": 18446744073709551615}}}}}}}"#,
        // unknown color
        r#"{"A": {"style": "Context", "color": "mauve-ish"}}"#,
        // title already registered
        r#"{"A": {}, "View": {}}"#,
    ] {
        let desc = RibbonDescriptor::from_json(text).unwrap();
        assert!(ribbon.add_categories_by(&desc).is_err(), "{text}");
        assert_eq!(ribbon.categories().len(), 1, "{text}");
        assert_eq!(tabs(&ribbon), vec!["View"], "{text}");
        assert_eq!(ribbon.palette().assigned(), assigned, "{text}");
    }
}

#[test]
fn custom_factory_entry_is_used_by_descriptors() {
    fn build_help(kind: ControlKind, _args: &[serde_json::Value]) -> ribbon_core::Result<Control> {
        Ok(Control::new(kind).text("Help").icon(IconRole::Help.key()))
    }

    let mut ribbon = RibbonBar::new();
    ribbon
        .factory_mut()
        .register("HelpButton", ControlKind::Button, Some(SizeClass::Medium), build_help)
        .unwrap();
    let desc = RibbonDescriptor::from_json(
        r#"{"Home": {"panels": {"P": {"widgets": {"help": {"type": "HelpButton"}}}}}}"#,
    )
    .unwrap();
    ribbon.add_categories_by(&desc).unwrap();

    let help = ribbon
        .category("Home")
        .unwrap()
        .panel("P")
        .unwrap()
        .find_control("help")
        .unwrap();
    assert_eq!(help.control().label_text(), Some("Help"));
    assert_eq!(help.row_span(), 3);
}

#[test]
fn theme_registry_styles_the_ribbon() {
    let mut ribbon = RibbonBar::new();
    let mut themes = ThemeRegistry::new();
    themes.apply(&mut ribbon, "RibbonBar { background: #f0f0f0; }");
    themes.apply(&mut ribbon, "RibbonPanel { border: none; }");
    assert!(ribbon.style_sheet().contains("#f0f0f0"));
    assert!(ribbon.style_sheet().ends_with("border: none; }"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dark.qss");
    std::fs::write(&path, "RibbonTabBar { color: white; }").unwrap();
    themes.apply_file(&mut ribbon, &path).unwrap();
    assert!(ribbon.style_sheet().ends_with("color: white; }"));
    assert!(themes.apply_file(&mut ribbon, dir.path().join("missing.qss")).is_err());
}

#[test]
fn collapse_and_menu_bar_fallbacks() {
    let mut ribbon = RibbonBar::new();
    ribbon.hide_ribbon();
    assert_eq!(ribbon.collapse_icon(), IconRole::Down);
    assert_eq!(ribbon.collapse_tool_tip(), "Expand Ribbon");
    assert_eq!(ribbon.visible_height(), 35);
    ribbon.show_ribbon();
    assert_eq!(ribbon.collapse_tool_tip(), "Collapse Ribbon");

    assert!(matches!(
        ribbon.add_menu("File"),
        Err(RibbonError::Unsupported {
            operation: "add_menu"
        })
    ));
}
