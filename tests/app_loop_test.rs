//! Tests for the console event loop.

use time_voyager::{App, FlowStatus, GameConfig};

#[tokio::test]
async fn test_scripted_session() {
    let script = b"start\n\
        click 0 0\n\
        click 1 1\n\
        click 0 1\n\
        click 1 0\n\
        click 0 2\n\
        cancel\n\
        exit\n\
        start\n" as &[u8];
    let mut output = Vec::new();

    let mut app = App::new(GameConfig::default());
    app.run(script, &mut output).await.expect("loop runs");

    let text = String::from_utf8(output).expect("utf8 output");
    assert!(text.starts_with("== Menu =="));
    assert!(text.contains("X's Win!"));
    assert!(text.trim_end().ends_with("Goodbye."));
    assert_eq!(app.flow().status(), FlowStatus::Exited);
}

#[tokio::test]
async fn test_loop_stops_when_input_closes() {
    let mut output = Vec::new();
    let mut app = App::new(GameConfig::default());
    app.run(b"start\nclick 1 1\n" as &[u8], &mut output)
        .await
        .expect("loop runs");

    assert_eq!(app.flow().status(), FlowStatus::Running);
    let game = app.flow().game().expect("game screen");
    assert_eq!(game.history().len(), 1);
}
