//! Scripted console sessions over in-memory input and output.

use gato::{Scoreboard, Session, ShellConfig};
use std::io::Cursor;

fn run_script(script: &str) -> (anyhow::Result<Scoreboard>, String) {
    let input = Cursor::new(script.as_bytes());
    let mut session = Session::new(input, Vec::new(), ShellConfig::plain());
    let result = session.run();
    let output = String::from_utf8(session.output().clone()).expect("utf-8 output");
    (result, output)
}

#[test]
fn test_full_session_with_replay() {
    let script = "\
        abc\n\
        1\n\
        1\n\
        5\n\
        2\n\
        4\n\
        3\n\
        s\n\
        1\n2\n3\n5\n4\n6\n8\n7\n9\n\
        n\n";
    let (result, output) = run_script(script);
    let scoreboard = result.expect("session completes");

    assert_eq!(*scoreboard.x_wins(), 1);
    assert_eq!(*scoreboard.draws(), 1);
    assert_eq!(scoreboard.matches(), 2);

    assert!(output.contains("Entrada invalida. Por favor, elige un numero entre 1 y 9: "));
    assert!(output.contains("Casilla ocupada. Intenta de nuevo."));
    assert!(output.contains("¡El jugador X ha ganado!"));
    assert!(output.contains("¡Es un empate!"));
    assert!(output.contains("Marcador: X 1 | O 0 | Empates 1"));
    assert_eq!(output.matches("¿Quieren jugar de nuevo? (s/n): ").count(), 2);
    assert!(output.ends_with("¡Gracias por jugar! Adios.\n"));
}

#[test]
fn test_first_prompt_follows_fresh_board() {
    let (_, output) = run_script("");
    let expected_start = "\n\
        --- Juego del Gato (Tic Tac Toe) ---\n \
        1 | 2 | 3\n\
        ---|---|---\n \
        4 | 5 | 6\n\
        ---|---|---\n \
        7 | 8 | 9\n\
        ---------------------------------\n\
        Turno del jugador 'X'. Elige una casilla (1-9): ";
    assert!(output.starts_with(expected_start));
}

#[test]
fn test_input_closed_mid_match_fails() {
    let (result, output) = run_script("5\n1\n");
    let err = result.expect_err("input ran out");
    assert!(err.to_string().contains("Input closed"));
    assert!(!output.contains("Adios"));
}

#[test]
fn test_any_answer_but_s_ends_session() {
    let (result, output) = run_script("1\n4\n2\n5\n3\nyes\n");
    assert_eq!(result.expect("session completes").matches(), 1);
    assert_eq!(output.matches("Turno del jugador 'X'").count(), 3);
}

#[test]
fn test_o_win_is_counted() {
    let (result, output) = run_script("1\n3\n2\n5\n9\n7\nN\n");
    let scoreboard = result.expect("session completes");
    assert_eq!(*scoreboard.o_wins(), 1);
    assert!(output.contains("¡El jugador O ha ganado!"));
}

#[test]
fn test_blank_answer_waits_for_real_one() {
    let (result, _) = run_script("1\n4\n2\n5\n3\n\ns\n1\n4\n2\n5\n3\nn\n");
    assert_eq!(result.expect("session completes").matches(), 2);
}

#[test]
fn test_blank_move_line_prints_nothing() {
    let (result, output) = run_script("\n1\n4\n2\n5\n3\nn\n");
    assert_eq!(result.expect("session completes").matches(), 1);
    assert!(!output.contains("Entrada invalida"));
}

#[test]
fn test_plus_sign_label_is_a_move() {
    let (result, output) = run_script("+1\n4\n+2\n5\n3\nn\n");
    assert_eq!(*result.expect("session completes").x_wins(), 1);
    assert!(!output.contains("Entrada invalida"));
}
