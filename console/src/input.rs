use common::Direction;
use common::games::snake::SessionCommand;
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

pub fn parse_key(key: char) -> Option<SessionCommand> {
    match key.to_ascii_lowercase() {
        'w' | 'k' => Some(SessionCommand::Turn(Direction::Up)),
        's' | 'j' => Some(SessionCommand::Turn(Direction::Down)),
        'a' | 'h' => Some(SessionCommand::Turn(Direction::Left)),
        'd' | 'l' => Some(SessionCommand::Turn(Direction::Right)),
        'r' => Some(SessionCommand::Restart),
        'q' => Some(SessionCommand::Quit),
        _ => None,
    }
}

/// Every recognised key on a line becomes one command, in typing order.
pub fn parse_line(line: &str) -> Vec<SessionCommand> {
    line.chars().filter_map(parse_key).collect()
}

/// Forwards commands typed on stdin until EOF, `q`, or the session going away.
pub async fn read_commands(commands: mpsc::UnboundedSender<SessionCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log!("Failed to read input: {}", e);
                break;
            }
        };

        for command in parse_line(&line) {
            if commands.send(command).is_err() {
                return;
            }
            if command == SessionCommand::Quit {
                return;
            }
        }
    }

    let _ = commands.send(SessionCommand::Quit);
}
