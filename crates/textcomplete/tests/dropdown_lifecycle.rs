//! Drives a dropdown the way an autocomplete controller does: render on every
//! keystroke, arrow keys to move, enter to pick, escape to close.

use std::sync::Arc;

use parking_lot::Mutex;
use textcomplete::prelude::*;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
struct User {
    login: &'static str,
}

fn search(term: &str) -> Vec<SearchResult<User>> {
    ["alice", "alan", "albert", "bob"]
        .into_iter()
        .filter(|login| login.starts_with(term))
        .map(|login| {
            SearchResult::from_template(User { login }, term, |user, _| format!("@{}", user.login))
        })
        .collect()
}

/// Records every lifecycle signal in emission order.
fn record(dropdown: &Dropdown<User>) -> Arc<Mutex<Vec<String>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let signals = dropdown.signals();

    let l = log.clone();
    signals
        .render
        .connect(move |event| l.lock().push(format!("render({})", event.payload().len())));
    let l = log.clone();
    signals.rendered.connect(move |_| l.lock().push("rendered".into()));
    let l = log.clone();
    signals.show.connect(move |_| l.lock().push("show".into()));
    let l = log.clone();
    signals.shown.connect(move |_| l.lock().push("shown".into()));
    let l = log.clone();
    signals.hide.connect(move |_| l.lock().push("hide".into()));
    let l = log.clone();
    signals.hidden.connect(move |_| l.lock().push("hidden".into()));
    let l = log.clone();
    signals.select.connect(move |event| {
        l.lock()
            .push(format!("select({})", event.search_result.data().login))
    });
    log
}

#[test]
fn typing_navigating_and_picking() {
    setup();
    let mut dropdown = Dropdown::new(
        DropdownOptions::new().with_header(Edge::generator(|users: &[&User]| {
            format!("{} user(s)", users.len())
        })),
    );
    let log = record(&dropdown);
    let offset = CursorOffset::new(20.0, 8.0);

    dropdown.render(search("a"), offset);
    dropdown.render(search("al"), offset);
    assert_eq!(dropdown.len(), 3);
    assert_eq!(dropdown.el().first_child().unwrap().read().text(), "3 user(s)");

    let mut highlighted = Vec::new();
    dropdown.down(|item| highlighted.push(item.search_result().label().to_string()));
    dropdown.down(|item| highlighted.push(item.search_result().label().to_string()));
    assert_eq!(highlighted, vec!["@alice", "@alan"]);

    let mut picked = None;
    dropdown.select_active_item(|item| picked = Some(item.search_result().data().clone()));
    assert_eq!(picked, Some(User { login: "alan" }));

    assert_eq!(
        *log.lock(),
        vec![
            "render(3)",
            "show",
            "shown",
            "rendered",
            "render(3)",
            "rendered",
            "hide",
            "hidden",
            "select(alan)",
        ]
    );
    assert!(!dropdown.is_shown());
    assert!(dropdown.is_empty());
}

#[test]
fn escape_closes_without_selecting() {
    setup();
    let mut dropdown = Dropdown::<User>::default();
    let log = record(&dropdown);

    dropdown.render(search("b"), CursorOffset::default());
    dropdown.up(|_| {});
    dropdown.deactivate();
    dropdown.deactivate();

    let mut called = false;
    dropdown.select_active_item(|_| called = true);
    assert!(!called);
    assert_eq!(
        *log.lock(),
        vec!["render(1)", "show", "shown", "rendered", "hide", "hidden"]
    );
}

#[test]
fn listener_can_keep_dropdown_open() {
    setup();
    let mut dropdown = Dropdown::<User>::default();
    let keep_open = Arc::new(Mutex::new(true));
    let keep_open_clone = keep_open.clone();
    dropdown.signals().hide.connect(move |event| {
        if *keep_open_clone.lock() {
            event.prevent_default();
        }
    });

    dropdown.render(search("al"), CursorOffset::default());
    dropdown.deactivate();
    assert!(dropdown.is_shown());
    assert!(dropdown.is_empty());

    *keep_open.lock() = false;
    dropdown.deactivate();
    assert!(!dropdown.is_shown());
}

#[test]
fn options_from_config_file() {
    setup();
    let config = DropdownConfig::from_toml_str(
        r##"
        class_name = "mentions"
        footer = "tab to complete"
        max_count = 2

        [style]
        backgroundColor = "#f0f"
        "##,
    )
    .unwrap();
    let mut dropdown = Dropdown::<User>::new(config.into_options());

    dropdown.render(search("a"), CursorOffset::new(1.0, 2.0));

    assert_eq!(dropdown.len(), 2);
    let surface = dropdown.el();
    assert_eq!(surface.class_name(), "mentions");
    assert_eq!(surface.style("background-color"), Some("#f0f"));
    assert_eq!(surface.style("top"), Some("1px"));
    assert_eq!(surface.child_count(), 3);
    assert_eq!(surface.last_child().unwrap().read().text(), "tab to complete");
}

#[test]
fn pointer_selection() {
    setup();
    let mut dropdown = Dropdown::<User>::default();
    let log = record(&dropdown);

    dropdown.render(search("al"), CursorOffset::default());
    dropdown.select_at(2).unwrap();
    assert!(matches!(
        dropdown.select_at(0),
        Err(Error::ItemOutOfRange { index: 0, len: 0 })
    ));

    assert_eq!(log.lock().last().map(String::as_str), Some("select(albert)"));
}
