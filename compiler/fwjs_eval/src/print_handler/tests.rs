use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_handler_records_lines_in_order() {
    let handler = BufferPrintHandler::new();
    handler.write_line("10");
    handler.write_line("true");
    handler.write_line("null");
    assert_eq!(handler.lines(), vec!["10", "true", "null"]);
    assert_eq!(handler.get_output(), "10\ntrue\nnull\n");
}

#[test]
fn buffer_handler_empty_line() {
    let handler = BufferPrintHandler::new();
    handler.write_line("");
    assert_eq!(handler.get_output(), "\n");
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = BufferPrintHandler::new();
    handler.write_line("hello");
    assert!(!handler.get_output().is_empty());
    handler.clear();
    assert!(handler.lines().is_empty());
    assert_eq!(handler.get_output(), "");
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    handler.write_line("stdout_handler_captures_nothing");
    assert_eq!(handler.get_output(), "");
    assert!(handler.lines().is_empty());
    handler.clear();
}

#[test]
fn shared_handler_sees_writes_from_clones() {
    let handler = buffer_handler();
    let alias = SharedPrintHandler::clone(&handler);
    handler.write_line("a");
    alias.write_line("b");
    assert_eq!(handler.lines(), vec!["a", "b"]);
}

#[test]
fn buffer_handler_is_thread_safe() {
    let handler = buffer_handler();
    let handler2 = handler.clone();

    let t1 = std::thread::spawn(move || {
        for _ in 0..100 {
            handler2.write_line("a");
        }
    });

    for _ in 0..100 {
        handler.write_line("b");
    }

    t1.join().unwrap();

    assert_eq!(handler.lines().len(), 200);
}
