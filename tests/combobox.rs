#[allow(dead_code)]
mod common;

use color_eyre::Result;
use combobox::prelude::*;
use common::{INPUT_ROW, MENU_TOP_ROW, STATUS_ROW, TestHarness};
use crossterm::event::KeyCode;

#[test]
fn starts_closed() -> Result<()> {
    let h = TestHarness::new()?;
    let rows = h.rows();
    assert_eq!(rows[0], "controlling isOpen");
    assert_eq!(rows[1], "[ Toggle isOpen ]");
    assert_eq!(rows[STATUS_ROW], "The menu is closed");
    assert_eq!(rows[INPUT_ROW], "│Find a Star Wars character           ▾│");
    assert_eq!(rows[MENU_TOP_ROW], "");
    assert!(h.shown().is_empty());
    Ok(())
}

#[test]
fn toggle_button_shows_every_item() -> Result<()> {
    let mut h = TestHarness::new()?;
    h.ctrl('t')?;
    assert!(h.is_open());
    assert_eq!(h.app().controller.items_to_show, ITEMS.to_vec());

    let rows = h.rows();
    assert_eq!(rows[STATUS_ROW], "The menu is open");
    assert_eq!(rows[INPUT_ROW], "│Find a Star Wars character           ▴│");
    assert!(rows[MENU_TOP_ROW].starts_with('┌'));
    assert_eq!(rows[MENU_TOP_ROW + 1], "│  4-LOM                               │");
    assert_eq!(rows[MENU_TOP_ROW + 2], "│  Aayla Secura                        │");
    // at most ten rows are visible
    assert!(rows[MENU_TOP_ROW + 11].starts_with('└'));
    Ok(())
}

#[test]
fn toggling_twice_restores_state() -> Result<()> {
    let mut h = TestHarness::new()?;
    h.type_str("yod")?;
    assert!(h.is_open());
    assert_eq!(h.shown(), vec!["Yoda"]);

    h.ctrl('t')?;
    assert!(!h.is_open());
    assert_eq!(h.shown().len(), ITEMS.len());
    h.ctrl('t')?;
    assert!(h.is_open());
    assert_eq!(h.shown().len(), ITEMS.len());
    // the query is left alone
    assert_eq!(h.app().state.input_value, "yod");
    Ok(())
}

#[test]
fn no_match_keeps_an_empty_menu() -> Result<()> {
    let mut h = TestHarness::new()?;
    h.ctrl('t')?;
    h.type_str("xyz123")?;
    assert!(h.is_open());
    assert!(h.shown().is_empty());

    let rows = h.rows();
    assert_eq!(rows[STATUS_ROW], "The menu is open");
    assert_eq!(rows[INPUT_ROW], "│xyz123                               ▴│");
    assert!(rows[MENU_TOP_ROW].starts_with('┌'));
    assert!(rows[MENU_TOP_ROW + 1].starts_with('└'));
    Ok(())
}

#[test]
fn typing_filters_and_keeps_menu_open() -> Result<()> {
    let mut h = TestHarness::new()?;
    h.type_str("darth")?;
    assert!(h.is_open());
    assert_eq!(
        h.shown(),
        vec!["Darth Bane", "Darth Krayt", "Darth Maul", "Darth Nihilus", "Darth Vader"]
    );
    h.press(KeyCode::Backspace)?;
    assert!(h.is_open());
    assert_eq!(h.app().state.input_value, "dart");
    Ok(())
}

#[test]
fn arrows_highlight_and_enter_selects() -> Result<()> {
    let mut h = TestHarness::new()?;
    h.type_str("sky")?;
    h.press(KeyCode::Down)?;
    h.press(KeyCode::Down)?;
    assert_eq!(h.app().state.highlighted_index, Some(1));
    assert_eq!(h.rows()[MENU_TOP_ROW + 2], "│> Cade Skywalker                      │");

    h.press(KeyCode::Enter)?;
    assert!(!h.is_open());
    assert_eq!(h.app().state.selected_item, Some(Item::new("Cade Skywalker")));
    assert_eq!(h.rows()[INPUT_ROW], "│Cade Skywalker                       ✕│");
    Ok(())
}

#[test]
fn arrow_opens_a_closed_menu_without_highlight() -> Result<()> {
    let mut h = TestHarness::new()?;
    h.press(KeyCode::Up)?;
    assert!(h.is_open());
    assert_eq!(h.app().state.highlighted_index, None);
    assert_eq!(h.shown().len(), ITEMS.len());
    h.press(KeyCode::Up)?;
    assert_eq!(h.app().state.highlighted_index, Some(ITEMS.len() - 1));
    Ok(())
}

#[test]
fn escape_closes_and_restores_query() -> Result<()> {
    let mut h = TestHarness::new()?;
    h.type_str("padme")?;
    h.press(KeyCode::Down)?;
    h.press(KeyCode::Enter)?;
    h.ctrl('u')?;
    h.type_str("ha")?;
    assert!(h.is_open());

    h.press(KeyCode::Esc)?;
    assert!(!h.is_open());
    assert_eq!(h.app().state.input_value, "Padmé Amidala");
    assert_eq!(h.rows()[STATUS_ROW], "The menu is closed");
    Ok(())
}

#[test]
fn clear_selection_key() -> Result<()> {
    let mut h = TestHarness::new()?;
    h.type_str("han s")?;
    h.press(KeyCode::Down)?;
    h.press(KeyCode::Enter)?;
    assert_eq!(h.app().state.selected_item, Some(Item::new("Han Solo")));

    h.ctrl('x')?;
    assert_eq!(h.app().state.selected_item, None);
    assert_eq!(h.rows()[INPUT_ROW], "│Find a Star Wars character           ▾│");
    Ok(())
}

#[test]
fn initial_query_and_custom_bindings() -> Result<()> {
    let options = ComboboxOptionsBuilder::default()
        .query(Some(String::from("Yo")))
        .placeholder(String::from("Pick one"))
        .bind(vec![String::from("f2:toggle-is-open")])
        .build()?;
    let mut h = TestHarness::with_options(options)?;
    assert_eq!(h.rows()[INPUT_ROW], "│Yo                                   ▾│");
    assert!(!h.is_open());

    h.press(KeyCode::F(2))?;
    assert!(h.is_open());
    h.ctrl('u')?;
    assert_eq!(h.rows()[INPUT_ROW], "│Pick one                             ▴│");
    Ok(())
}

#[test]
fn accept_reports_the_selection() -> Result<()> {
    let mut h = TestHarness::new()?;
    h.type_str("yod")?;
    h.press(KeyCode::Down)?;
    h.press(KeyCode::Enter)?;
    h.action(Action::Accept)?;
    assert!(h.session.should_quit());

    let output = h.session.output()?;
    assert_eq!(output.selected_item, Some(Item::new("Yoda")));
    assert_eq!(output.query, "Yoda");
    assert!(!output.is_abort);
    assert_eq!(output.exit_code(), 0);
    Ok(())
}

#[test]
fn abort_reports_no_selection() -> Result<()> {
    let mut h = TestHarness::new()?;
    h.type_str("yod")?;
    h.ctrl('c')?;
    let output = h.session.output()?;
    assert!(output.is_abort);
    assert!(output.is_open);
    assert_eq!(output.query, "yod");
    assert_eq!(output.exit_code(), 130);
    Ok(())
}
