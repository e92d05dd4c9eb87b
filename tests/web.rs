#![cfg(target_arch = "wasm32")]

use serde::Serialize;
use serde_json::{Value, json};
use tictactoe_n::wasm::TicTacToe;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn to_js(value: Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

fn from_js(value: JsValue) -> Value {
    serde_wasm_bindgen::from_value(value).unwrap()
}

#[wasm_bindgen_test]
fn wasm_ready_returns_true() {
    assert!(tictactoe_n::wasm_ready());
}

#[wasm_bindgen_test]
fn default_config_starts_three_by_three() {
    let game = TicTacToe::new(JsValue::UNDEFINED).unwrap();
    let state = from_js(game.state().unwrap());

    assert_eq!(game.board_size(), 3);
    assert_eq!(state["board"].as_array().unwrap().len(), 9);
    assert_eq!(state["turn"], json!("X"));
    assert_eq!(state["result"], json!({ "status": "in_progress" }));
}

#[wasm_bindgen_test]
fn rejects_small_board() {
    assert!(TicTacToe::new(to_js(json!({ "board_size": 2 }))).is_err());
}

#[wasm_bindgen_test]
fn top_row_win_reports_line() {
    let mut game = TicTacToe::new(to_js(json!({ "board_size": 3 }))).unwrap();
    for index in [0, 3, 1, 4] {
        game.play(index).unwrap();
    }
    let state = from_js(game.play(2).unwrap());

    assert!(game.is_game_over());
    assert_eq!(state["winning_line"]["from"].as_f64(), Some(0.0));
    assert_eq!(state["winning_line"]["to"].as_f64(), Some(2.0));
    assert_eq!(state["headline"], json!("X wins!"));
}

#[wasm_bindgen_test]
fn click_maps_pointer_to_cell() {
    let mut game =
        TicTacToe::new(to_js(json!({ "board_size": 4, "width": 400.0, "height": 400.0 }))).unwrap();

    let state = from_js(game.click(150.0, 250.0).unwrap());

    assert_eq!(state["board"][9], json!("X"));
    assert_eq!(state["turn"], json!("O"));
}

#[wasm_bindgen_test]
fn reset_clears_board_and_keeps_size() {
    let mut game = TicTacToe::new(to_js(json!({ "board_size": 5 }))).unwrap();
    game.play(12).unwrap();

    let state = from_js(game.reset().unwrap());

    assert_eq!(state["board_size"].as_f64(), Some(5.0));
    assert!(
        state["board"]
            .as_array()
            .unwrap()
            .iter()
            .all(|cell| cell == "Empty")
    );
}

#[wasm_bindgen_test]
fn scene_lists_grid_and_marks() {
    let mut game = TicTacToe::new(JsValue::UNDEFINED).unwrap();
    game.play(4).unwrap();

    let scene = from_js(game.scene().unwrap());
    let commands = scene.as_array().unwrap();

    // Four grid lines and two cross strokes.
    assert_eq!(commands.len(), 6);
    assert_eq!(commands[0]["kind"], json!("line"));
}
